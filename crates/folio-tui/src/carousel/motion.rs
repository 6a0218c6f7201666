//! Eased glides between horizontal scroll offsets.
//!
//! The animator owns the continuously-changing offset of a carousel's scroll
//! surface. Navigation asks for a glide to a target column; `update` is
//! called every frame with the current instant and returns the interpolated
//! offset. All methods take `now` explicitly so tests never have to sleep.

use std::time::{Duration, Instant};

use folio_core::Easing;

use super::easing::EasingExt;

/// An in-flight glide from one offset to another.
#[derive(Debug, Clone, Copy)]
struct Glide {
    started: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: Easing,
}

impl Glide {
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    fn done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

#[inline]
fn lerp_offset(from: u16, to: u16, t: f64) -> u16 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u16
}

/// Horizontal offset animator for one carousel surface.
#[derive(Debug, Clone)]
pub struct OffsetAnimator {
    glide: Option<Glide>,
    current: u16,
    duration: Duration,
    easing: Easing,
}

impl OffsetAnimator {
    pub fn new(glide_ms: u64, easing: Easing) -> Self {
        Self {
            glide: None,
            current: 0,
            duration: Duration::from_millis(glide_ms),
            easing,
        }
    }

    /// Offset as of the last `update`.
    #[inline]
    pub fn offset(&self) -> u16 {
        self.current
    }

    /// Final offset once the active glide (if any) lands.
    pub fn target(&self) -> u16 {
        self.glide.map(|g| g.to).unwrap_or(self.current)
    }

    #[inline]
    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    /// Set the offset immediately, cancelling any glide.
    pub fn jump_to(&mut self, offset: u16) {
        self.glide = None;
        self.current = offset;
    }

    /// Begin an eased glide toward `target`. A zero-duration configuration
    /// degrades to an instant jump. Starting a glide while one is in flight
    /// retargets from the currently visible offset.
    pub fn glide_to(&mut self, target: u16, now: Instant) {
        if self.duration.is_zero() {
            self.jump_to(target);
            return;
        }
        if self.current == target {
            self.glide = None;
            return;
        }
        self.glide = Some(Glide {
            started: now,
            from: self.current,
            to: target,
            duration: self.duration,
            easing: self.easing,
        });
    }

    /// Advance the glide and return the current offset.
    pub fn update(&mut self, now: Instant) -> u16 {
        if let Some(glide) = self.glide {
            if glide.done(now) {
                self.current = glide.to;
                self.glide = None;
            } else {
                let t = glide.easing.apply(glide.progress(now));
                self.current = lerp_offset(glide.from, glide.to, t);
            }
        }
        self.current
    }

    /// Drop any in-flight glide, keeping the current offset.
    pub fn cancel(&mut self) {
        self.glide = None;
    }

    /// Back to offset zero, no animation.
    pub fn reset(&mut self) {
        self.glide = None;
        self.current = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animator(ms: u64) -> OffsetAnimator {
        OffsetAnimator::new(ms, Easing::Linear)
    }

    #[test]
    fn test_zero_duration_jumps() {
        let mut a = animator(0);
        let now = Instant::now();
        a.glide_to(120, now);
        assert_eq!(a.offset(), 120);
        assert!(!a.is_gliding());
    }

    #[test]
    fn test_glide_interpolates() {
        let mut a = animator(100);
        let start = Instant::now();
        a.glide_to(100, start);
        assert!(a.is_gliding());
        assert_eq!(a.target(), 100);

        let half = a.update(start + Duration::from_millis(50));
        assert!((40..=60).contains(&half), "midpoint was {half}");

        let end = a.update(start + Duration::from_millis(150));
        assert_eq!(end, 100);
        assert!(!a.is_gliding());
    }

    #[test]
    fn test_retarget_from_visible_offset() {
        let mut a = animator(100);
        let start = Instant::now();
        a.glide_to(100, start);
        a.update(start + Duration::from_millis(50));
        let mid = a.offset();

        // Retarget back to zero; the new glide starts where we are now
        a.glide_to(0, start + Duration::from_millis(50));
        let just_after = a.update(start + Duration::from_millis(50));
        assert_eq!(just_after, mid);

        let end = a.update(start + Duration::from_millis(200));
        assert_eq!(end, 0);
    }

    #[test]
    fn test_glide_to_current_is_noop() {
        let mut a = animator(100);
        a.jump_to(60);
        a.glide_to(60, Instant::now());
        assert!(!a.is_gliding());
        assert_eq!(a.offset(), 60);
    }

    #[test]
    fn test_reset() {
        let mut a = animator(100);
        a.jump_to(42);
        a.glide_to(80, Instant::now());
        a.reset();
        assert_eq!(a.offset(), 0);
        assert!(!a.is_gliding());
    }
}
