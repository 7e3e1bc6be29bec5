//! Swipe gesture resolution.
//!
//! A swipe is a start point and an end point. The axis with the larger
//! displacement wins, and the displacement must exceed the minimum distance.
//! Displacement is measured start-minus-end, so a positive X delta is a swipe
//! to the left and a positive Y delta is a swipe up.

use crate::types::{Direction, MIN_SWIPE_DISTANCE};

/// Minimum drag in terminal cells for a mouse drag to count as a swipe
pub const MIN_TERMINAL_SWIPE: f32 = 3.0;

/// Resolve a gesture from `start` to `end` (x, y) into a direction
pub fn resolve_swipe(start: (f32, f32), end: (f32, f32), min_distance: f32) -> Option<Direction> {
    let dx = start.0 - end.0;
    let dy = start.1 - end.1;

    if dx.abs() > dy.abs() {
        if dx.abs() <= min_distance {
            return None;
        }
        Some(if dx > 0.0 {
            Direction::Left
        } else {
            Direction::Right
        })
    } else {
        if dy.abs() <= min_distance {
            return None;
        }
        Some(if dy > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        })
    }
}

/// Tracks a press/release pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start: Option<(f32, f32)>,
    min_distance: f32,
}

impl SwipeTracker {
    pub fn new(min_distance: f32) -> Self {
        Self {
            start: None,
            min_distance,
        }
    }

    /// Record the start point (touch start, mouse down)
    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    /// Finish the gesture (touch end, mouse up)
    ///
    /// Returns None when no gesture was started or the drag was too short.
    pub fn finish(&mut self, x: f32, y: f32) -> Option<Direction> {
        let start = self.start.take()?;
        resolve_swipe(start, (x, y), self.min_distance)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(MIN_SWIPE_DISTANCE)
    }
}
