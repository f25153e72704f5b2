//! Swipe gesture interpretation.
//!
//! A gesture is tracked from press to release. On release the displacement
//! decides the direction: the dominant axis picks horizontal vs vertical and
//! its sign picks the side. Gestures shorter than the threshold on both axes
//! are noise.

use crate::types::{Direction, SWIPE_THRESHOLD_PX};

/// Classify a displacement vector.
///
/// Ties between the axes resolve to vertical.
///
/// # Examples
///
/// ```
/// use tui_snake_input::classify_swipe;
/// use tui_snake_types::Direction;
///
/// assert_eq!(classify_swipe(40.0, 5.0, 30.0), Some(Direction::Right));
/// assert_eq!(classify_swipe(-3.0, -50.0, 30.0), Some(Direction::Up));
/// assert_eq!(classify_swipe(10.0, 10.0, 30.0), None);
/// ```
pub fn classify_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax < threshold && ay < threshold {
        return None;
    }

    if ax > ay {
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: f32,
    y: f32,
}

/// Tracks one touch/drag gesture at a time.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<Point>,
    last: Option<Point>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(SWIPE_THRESHOLD_PX)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
            last: None,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.start = Some(Point { x, y });
        self.last = None;
    }

    pub fn touch_move(&mut self, x: f32, y: f32) {
        if self.start.is_some() {
            self.last = Some(Point { x, y });
        }
    }

    /// Finish the gesture.
    ///
    /// `heading` is the direction in effect right now; a swipe that reverses
    /// it is dropped here, before it ever reaches the input buffer.
    pub fn touch_end(&mut self, heading: Direction) -> Option<Direction> {
        let start = self.start.take()?;
        let end = self.last.take().unwrap_or(start);

        let dir = classify_swipe(end.x - start.x, end.y - start.y, self.threshold)?;
        if dir.is_reversal_of(heading) {
            return None;
        }
        Some(dir)
    }

    /// Drop any gesture in progress.
    pub fn cancel(&mut self) {
        self.start = None;
        self.last = None;
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_is_noise() {
        assert_eq!(classify_swipe(29.0, -29.0, 30.0), None);
        assert_eq!(classify_swipe(0.0, 0.0, 30.0), None);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(classify_swipe(30.0, 0.0, 30.0), Some(Direction::Right));
        assert_eq!(classify_swipe(0.0, 30.0, 30.0), Some(Direction::Down));
    }

    #[test]
    fn test_dominant_axis_wins() {
        assert_eq!(classify_swipe(-80.0, 40.0, 30.0), Some(Direction::Left));
        assert_eq!(classify_swipe(20.0, 45.0, 30.0), Some(Direction::Down));
    }

    #[test]
    fn test_tracker_full_gesture() {
        let mut t = SwipeTracker::new();
        t.touch_start(100.0, 100.0);
        t.touch_move(110.0, 80.0);
        t.touch_move(105.0, 40.0);

        assert_eq!(t.touch_end(Direction::Right), Some(Direction::Up));
        assert!(!t.is_tracking());
    }

    #[test]
    fn test_tracker_tap_without_move_is_ignored() {
        let mut t = SwipeTracker::new();
        t.touch_start(100.0, 100.0);
        assert_eq!(t.touch_end(Direction::Right), None);
    }

    #[test]
    fn test_tracker_rejects_reversal_of_current_heading() {
        let mut t = SwipeTracker::new();
        t.touch_start(200.0, 50.0);
        t.touch_move(100.0, 50.0);
        assert_eq!(t.touch_end(Direction::Right), None);

        t.touch_start(200.0, 50.0);
        t.touch_move(100.0, 50.0);
        assert_eq!(t.touch_end(Direction::Up), Some(Direction::Left));
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut t = SwipeTracker::new();
        t.touch_move(500.0, 500.0);
        assert_eq!(t.touch_end(Direction::Up), None);
    }

    #[test]
    fn test_cancel() {
        let mut t = SwipeTracker::with_threshold(5.0);
        t.touch_start(0.0, 0.0);
        t.touch_move(50.0, 0.0);
        t.cancel();
        assert_eq!(t.touch_end(Direction::Up), None);
    }
}
