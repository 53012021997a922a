//! Pointer tracking for horizontal drags.
//!
//! Turns raw pointer positions (touch or mouse) into [`DragSample`]s: total
//! movement since the pointer went down, the sign of the latest movement, and
//! the current speed.

use crate::models::DragSample;

/// A release this long after the last movement counts as a standstill.
const IDLE_RELEASE_MS: f64 = 100.0;

/// Tracks one pointer from press to release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureTracker {
    tracking: bool,
    start_x: f64,
    last_x: f64,
    last_time: f64,
    velocity: f64,
    direction: i8,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    #[cfg(test)]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Pointer pressed at `x`.
    pub fn start(&mut self, x: f64, time_ms: f64) {
        *self = Self {
            tracking: true,
            start_x: x,
            last_x: x,
            last_time: time_ms,
            velocity: 0.0,
            direction: 0,
        };
    }

    /// Pointer moved to `x`. Returns `None` when no drag is in progress.
    pub fn move_to(&mut self, x: f64, time_ms: f64) -> Option<DragSample> {
        if !self.tracking {
            return None;
        }

        let dx = x - self.last_x;
        let dt = time_ms - self.last_time;
        if dt > 0.0 {
            self.velocity = dx.abs() / dt;
        }
        if dx != 0.0 {
            self.direction = if dx > 0.0 { 1 } else { -1 };
        }
        self.last_x = x;
        self.last_time = time_ms;

        Some(self.sample(true))
    }

    /// Pointer released. Returns the final sample, or `None` if not tracking.
    pub fn end(&mut self, time_ms: f64) -> Option<DragSample> {
        if !self.tracking {
            return None;
        }
        if time_ms - self.last_time > IDLE_RELEASE_MS {
            self.velocity = 0.0;
        }
        self.tracking = false;
        Some(self.sample(false))
    }

    /// Stops tracking without producing a final sample.
    pub fn cancel(&mut self) {
        self.tracking = false;
    }

    fn sample(&self, active: bool) -> DragSample {
        DragSample {
            active,
            movement_x: self.last_x - self.start_x,
            direction_x: self.direction,
            velocity_x: self.velocity,
        }
    }
}
