//! Horizontal drag gesture tracking.
//!
//! A drag sequence begins on button-down, accumulates horizontal
//! displacement through move events, and resolves on release: displacement
//! at or beyond the threshold maps to a navigation direction, anything less
//! is a no-op. Dragging left (negative displacement) reveals the next panel.

use super::controller::Direction;

#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    origin: Option<i32>,
    latest: i32,
    threshold: i32,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            origin: None,
            latest: 0,
            threshold: threshold as i32,
        }
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Button-down at horizontal position `x` (in threshold units).
    pub fn begin(&mut self, x: i32) {
        self.origin = Some(x);
        self.latest = x;
    }

    /// Drag moved to `x`. Ignored outside a drag sequence.
    pub fn update(&mut self, x: i32) {
        if self.origin.is_some() {
            self.latest = x;
        }
    }

    /// Button release. Ends the sequence and resolves it to a direction, or
    /// `None` when the displacement stayed under the threshold.
    pub fn finish(&mut self) -> Option<Direction> {
        let origin = self.origin.take()?;
        let delta = self.latest - origin;
        if delta < -self.threshold {
            Some(Direction::Next)
        } else if delta > self.threshold {
            Some(Direction::Previous)
        } else {
            None
        }
    }

    /// Abandon the sequence without resolving it.
    pub fn cancel(&mut self) {
        self.origin = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(from: i32, to: i32) -> Option<Direction> {
        let mut tracker = SwipeTracker::new(50);
        tracker.begin(from);
        tracker.update(to);
        tracker.finish()
    }

    #[test]
    fn test_under_threshold_is_noop() {
        assert_eq!(drag(100, 51), None);
        assert_eq!(drag(100, 149), None);
        // Exactly at the threshold still does not register
        assert_eq!(drag(100, 50), None);
        assert_eq!(drag(100, 150), None);
    }

    #[test]
    fn test_over_threshold_resolves() {
        assert_eq!(drag(100, 49), Some(Direction::Next));
        assert_eq!(drag(100, 151), Some(Direction::Previous));
    }

    #[test]
    fn test_finish_without_begin() {
        let mut tracker = SwipeTracker::new(50);
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn test_sequence_ends_after_finish() {
        let mut tracker = SwipeTracker::new(50);
        tracker.begin(0);
        tracker.update(-80);
        assert_eq!(tracker.finish(), Some(Direction::Next));
        // A stray move after release must not start a new sequence
        tracker.update(-200);
        assert_eq!(tracker.finish(), None);
    }

    #[test]
    fn test_cancel_discards_displacement() {
        let mut tracker = SwipeTracker::new(50);
        tracker.begin(0);
        tracker.update(-80);
        tracker.cancel();
        assert_eq!(tracker.finish(), None);
    }
}
