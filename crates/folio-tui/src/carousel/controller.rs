//! Snap-scroll carousel controller.
//!
//! `PanelCarousel` keeps a discrete current-panel index in lockstep with a
//! continuously scrollable horizontal offset. Navigation glides the offset to
//! `index * unit_width`; organic offset changes (wheel, drag) are quantized
//! back into an index. While a programmatic glide is in flight a guard
//! suppresses that quantization so the glide's intermediate offsets cannot
//! fight the index that navigation already committed.
//!
//! The guard is lowered by a fixed settle deadline rather than by observing
//! the glide itself, so a glide that outlives the settle window can briefly
//! let organic recomputation win. The window is configurable and defaults to
//! comfortably longer than the glide.
//!
//! Three deadline classes exist (settle, auto-advance, resume) and each is a
//! single `Option<Instant>` field, so at most one of each is ever pending.
//! `tick` processes expiries; every time-dependent method takes `now`
//! explicitly.

use std::time::{Duration, Instant};

use folio_core::CarouselConfig;

use super::motion::OffsetAnimator;

/// Navigation direction through the panel sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// How panel width is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sizing {
    /// Each panel spans the full viewport width.
    FullViewport,
    /// Each panel is a fixed number of columns wide.
    FixedCard(u16),
}

#[derive(Debug, Clone)]
pub struct PanelCarousel {
    panel_count: usize,
    current_index: usize,
    sizing: Sizing,
    viewport_width: u16,
    /// Whether this instance ever auto-advances.
    auto_advance: bool,
    /// Auto-advance currently running (not paused by interaction).
    is_auto_advancing: bool,
    /// While set and in the future, organic scroll updates are ignored.
    programmatic_until: Option<Instant>,
    auto_deadline: Option<Instant>,
    resume_deadline: Option<Instant>,
    config: CarouselConfig,
    animator: OffsetAnimator,
}

impl PanelCarousel {
    pub fn new(
        panel_count: usize,
        sizing: Sizing,
        auto_advance: bool,
        config: CarouselConfig,
        now: Instant,
    ) -> Self {
        let animator = OffsetAnimator::new(config.glide_ms, config.easing);
        let mut carousel = Self {
            panel_count,
            current_index: 0,
            sizing,
            viewport_width: 0,
            auto_advance,
            is_auto_advancing: auto_advance,
            programmatic_until: None,
            auto_deadline: None,
            resume_deadline: None,
            config,
            animator,
        };
        carousel.arm_auto(now);
        carousel
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[inline]
    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    /// Offset as of the last `tick`.
    #[inline]
    pub fn offset(&self) -> u16 {
        self.animator.offset()
    }

    #[inline]
    pub fn is_auto_advancing(&self) -> bool {
        self.is_auto_advancing
    }

    /// Width of one panel in columns. Zero until the surface is laid out.
    pub fn unit_width(&self) -> u16 {
        match self.sizing {
            Sizing::FullViewport => self.viewport_width,
            Sizing::FixedCard(cols) => cols,
        }
    }

    /// True while navigation owns the offset and organic scroll updates are
    /// ignored.
    pub fn is_settling(&self, now: Instant) -> bool {
        self.programmatic_until.is_some_and(|until| now < until)
    }

    /// Record the rendered surface width. On change the offset re-snaps to
    /// the current panel without animation.
    pub fn set_viewport_width(&mut self, width: u16, _now: Instant) {
        if width == self.viewport_width {
            return;
        }
        self.viewport_width = width;
        let unit = self.unit_width();
        if unit > 0 {
            self.animator.jump_to(self.current_index as u16 * unit);
        }
    }

    /// Replace the panel sequence. The position always resets to the first
    /// panel: even with an unchanged count the panels behind the indices are
    /// different ones.
    pub fn set_panels(&mut self, count: usize, now: Instant) {
        self.panel_count = count;
        self.current_index = 0;
        self.programmatic_until = None;
        self.animator.reset();
        self.auto_deadline = None;
        self.arm_auto(now);
    }

    /// Clamp an externally held panel index into the current range.
    pub fn clamp_index(&self, index: usize) -> usize {
        if self.panel_count == 0 {
            0
        } else {
            index.min(self.panel_count - 1)
        }
    }

    /// Glide to a panel. Out-of-range indices wrap (one past the last lands
    /// on the first) with a direct glide, no intermediate stops. Silently a
    /// no-op while the surface has no width or no panels.
    pub fn scroll_to_index(&mut self, index: isize, now: Instant) {
        let unit = self.unit_width();
        if self.panel_count == 0 || unit == 0 {
            return;
        }
        let wrapped = index.rem_euclid(self.panel_count as isize) as usize;
        // The index is committed up front; the offset catches up under guard
        self.current_index = wrapped;
        self.programmatic_until = Some(now + Duration::from_millis(self.config.settle_ms));
        self.animator.glide_to(wrapped as u16 * unit, now);
    }

    /// Glide to the wrapped neighbor in `direction`.
    pub fn advance(&mut self, direction: Direction, now: Instant) {
        let step: isize = match direction {
            Direction::Previous => -1,
            Direction::Next => 1,
        };
        self.scroll_to_index(self.current_index as isize + step, now);
    }

    /// Navigation attributed to the user: pauses auto-advance, arms the
    /// resume deadline, then advances.
    pub fn user_advance(&mut self, direction: Direction, now: Instant) {
        self.interact(now);
        self.advance(direction, now);
    }

    /// Direct panel selection attributed to the user (pagination dots).
    pub fn user_select(&mut self, index: usize, now: Instant) {
        self.interact(now);
        self.scroll_to_index(index as isize, now);
    }

    /// Register a user interaction without navigating. Pauses auto-advance
    /// and (re)arms the resume deadline; repeated interactions push the
    /// deadline out, last write wins.
    pub fn interact(&mut self, now: Instant) {
        if !self.auto_advance {
            return;
        }
        self.is_auto_advancing = false;
        self.auto_deadline = None;
        self.resume_deadline = Some(now + Duration::from_millis(self.config.resume_ms));
    }

    /// Organic offset report (wheel or drag moved the surface). Ignored
    /// while the programmatic guard is up; otherwise the index becomes the
    /// nearest panel boundary.
    pub fn on_scroll_position_changed(&mut self, raw_offset: u16, now: Instant) {
        if self.is_settling(now) {
            return;
        }
        let unit = self.unit_width();
        if unit == 0 || self.panel_count == 0 {
            return;
        }
        let nearest = ((raw_offset as f64 / unit as f64).round() as usize).min(self.panel_count - 1);
        if nearest != self.current_index {
            self.current_index = nearest;
        }
    }

    /// Move the offset directly by `delta` columns (wheel scroll), then
    /// reconcile the index. Counts as a user interaction.
    pub fn nudge(&mut self, delta: i16, now: Instant) {
        let unit = self.unit_width();
        if unit == 0 || self.panel_count == 0 {
            return;
        }
        self.interact(now);
        self.animator.cancel();
        let max = (self.panel_count as u16 - 1) * unit;
        let moved = self.animator.offset().saturating_add_signed(delta).min(max);
        self.animator.jump_to(moved);
        self.on_scroll_position_changed(moved, now);
    }

    /// Process expired deadlines and advance the glide. Call once per frame.
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.programmatic_until {
            if now >= until {
                self.programmatic_until = None;
            }
        }
        if let Some(deadline) = self.resume_deadline {
            if now >= deadline {
                self.resume_deadline = None;
                self.is_auto_advancing = self.auto_advance;
                self.arm_auto(now);
            }
        }
        if let Some(deadline) = self.auto_deadline {
            if self.is_auto_advancing && now >= deadline {
                self.auto_deadline = None;
                self.advance(Direction::Next, now);
                self.arm_auto(now);
            }
        }
        self.animator.update(now);
    }

    /// True while a glide is in flight and frames should come fast.
    pub fn needs_fast_tick(&self) -> bool {
        self.animator.is_gliding()
    }

    fn arm_auto(&mut self, now: Instant) {
        if self.auto_advance && self.is_auto_advancing && self.panel_count > 1 {
            self.auto_deadline = Some(now + Duration::from_millis(self.config.auto_advance_ms));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CarouselConfig {
        CarouselConfig::default()
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn story(panels: usize, now: Instant) -> PanelCarousel {
        let mut c = PanelCarousel::new(panels, Sizing::FullViewport, true, config(), now);
        c.set_viewport_width(80, now);
        c
    }

    fn cards(panels: usize, now: Instant) -> PanelCarousel {
        let mut c = PanelCarousel::new(panels, Sizing::FixedCard(36), false, config(), now);
        c.set_viewport_width(80, now);
        c
    }

    #[test]
    fn test_advance_next_wraps_back_to_start() {
        let base = Instant::now();
        let mut c = cards(4, base);
        for step in 1..=4 {
            c.advance(Direction::Next, base + ms(step * 1000));
        }
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_advance_previous_from_first_wraps_to_last() {
        let base = Instant::now();
        let mut c = cards(4, base);
        c.advance(Direction::Previous, base);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_out_of_range_select_wraps() {
        let base = Instant::now();
        let mut c = cards(3, base);
        c.scroll_to_index(3, base);
        assert_eq!(c.current_index(), 0);
        c.scroll_to_index(-1, base);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_guard_suppresses_organic_updates_until_settle() {
        let base = Instant::now();
        let mut c = cards(4, base);
        c.scroll_to_index(2, base);
        assert_eq!(c.current_index(), 2);

        // Mid-glide offsets arrive before the settle deadline; the committed
        // index must not move
        c.on_scroll_position_changed(0, base + ms(100));
        assert_eq!(c.current_index(), 2);
        c.on_scroll_position_changed(36, base + ms(540));
        assert_eq!(c.current_index(), 2);
        assert!(c.is_settling(base + ms(540)));
    }

    #[test]
    fn test_organic_update_honored_after_settle() {
        let base = Instant::now();
        let mut c = cards(4, base);
        c.scroll_to_index(2, base);
        let after = base + ms(600);
        c.tick(after);
        assert!(!c.is_settling(after));

        // 100 / 36 rounds to panel 3
        c.on_scroll_position_changed(100, after);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_organic_update_clamps_to_last_panel() {
        let base = Instant::now();
        let mut c = cards(3, base);
        c.on_scroll_position_changed(500, base);
        assert_eq!(c.current_index(), 2);
    }

    #[test]
    fn test_zero_width_surface_drops_navigation() {
        let base = Instant::now();
        let mut c = PanelCarousel::new(5, Sizing::FullViewport, false, config(), base);
        c.advance(Direction::Next, base);
        c.scroll_to_index(3, base);
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_auto_advance_fires_on_interval() {
        let base = Instant::now();
        let mut c = story(5, base);
        c.tick(base + ms(3999));
        assert_eq!(c.current_index(), 0);
        c.tick(base + ms(4001));
        assert_eq!(c.current_index(), 1);
        c.tick(base + ms(8002));
        assert_eq!(c.current_index(), 2);
        c.tick(base + ms(12003));
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_interaction_pauses_then_resumes_from_current_panel() {
        let base = Instant::now();
        let mut c = story(5, base);
        // Three auto steps land on panel 3
        c.tick(base + ms(4001));
        c.tick(base + ms(8002));
        c.tick(base + ms(12003));
        assert_eq!(c.current_index(), 3);

        // User steps back; auto pauses
        let pause_at = base + ms(12500);
        c.user_advance(Direction::Previous, pause_at);
        assert_eq!(c.current_index(), 2);
        assert!(!c.is_auto_advancing());

        // Nothing auto-fires during the resume window
        c.tick(pause_at + ms(4999));
        assert_eq!(c.current_index(), 2);
        assert!(!c.is_auto_advancing());

        // Resume, then the next cycle advances from where the user left it
        c.tick(pause_at + ms(5001));
        assert!(c.is_auto_advancing());
        assert_eq!(c.current_index(), 2);
        c.tick(pause_at + ms(5001) + ms(4001));
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_repeated_interaction_pushes_resume_out() {
        let base = Instant::now();
        let mut c = story(5, base);
        c.user_advance(Direction::Next, base);
        c.user_advance(Direction::Next, base + ms(3000));

        // First interaction's window alone would have resumed by now
        c.tick(base + ms(6000));
        assert!(!c.is_auto_advancing());

        c.tick(base + ms(8001));
        assert!(c.is_auto_advancing());
    }

    #[test]
    fn test_single_auto_cycle_after_resume() {
        let base = Instant::now();
        let mut c = story(5, base);
        c.user_advance(Direction::Next, base);
        assert_eq!(c.current_index(), 1);

        let resumed = base + ms(5001);
        c.tick(resumed);
        assert!(c.is_auto_advancing());

        // Exactly one advance per interval: many ticks inside one window
        // move the index once
        c.tick(resumed + ms(4001));
        assert_eq!(c.current_index(), 2);
        c.tick(resumed + ms(4100));
        c.tick(resumed + ms(5000));
        c.tick(resumed + ms(7999));
        assert_eq!(c.current_index(), 2);
        c.tick(resumed + ms(8102));
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_cards_never_auto_advance() {
        let base = Instant::now();
        let mut c = cards(4, base);
        assert!(!c.is_auto_advancing());
        c.tick(base + ms(60_000));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_panel_change_resets_index_and_clamps_held_references() {
        let base = Instant::now();
        let mut c = cards(6, base);
        c.scroll_to_index(4, base);
        assert_eq!(c.current_index(), 4);
        let held = c.current_index();

        // Filter narrowed the sequence to two panels
        c.set_panels(2, base + ms(1000));
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.offset(), 0);
        assert_eq!(c.clamp_index(held), 1);
    }

    #[test]
    fn test_panel_change_with_same_count_still_resets() {
        let base = Instant::now();
        let mut c = cards(4, base);
        c.scroll_to_index(2, base);
        c.set_panels(4, base + ms(1000));
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_nudge_moves_offset_and_reconciles() {
        let base = Instant::now();
        let mut c = story(3, base);
        // Past the settle of nothing; no guard is up
        c.nudge(50, base);
        assert_eq!(c.offset(), 50);
        // 50 / 80 rounds to panel 1
        assert_eq!(c.current_index(), 1);
        assert!(!c.is_auto_advancing());
    }

    #[test]
    fn test_glide_lands_on_panel_boundary() {
        let base = Instant::now();
        let mut c = cards(4, base);
        c.scroll_to_index(2, base);
        c.tick(base + ms(50));
        assert!(c.needs_fast_tick());
        c.tick(base + ms(300));
        assert_eq!(c.offset(), 72);
        assert!(!c.needs_fast_tick());
    }

    #[test]
    fn test_resize_resnaps_offset() {
        let base = Instant::now();
        let mut c = story(3, base);
        c.scroll_to_index(1, base);
        c.tick(base + ms(300));
        c.set_viewport_width(120, base + ms(400));
        assert_eq!(c.offset(), 120);
        assert_eq!(c.current_index(), 1);
    }
}
