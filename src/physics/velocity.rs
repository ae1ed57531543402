//! Vertical ankle velocity
//!
//! Tracks the previous ankle heights and frame time to turn positions into
//! upward speed in normalized units per second. Image y grows downward, so
//! a rising ankle gives a positive velocity.

/// Frame interval assumed when the real one is unknown or non-positive
pub const FALLBACK_DT_SECS: f32 = 0.016;

/// Upward ankle speeds for one frame (units/s)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnkleVelocity {
    pub left: f32,
    pub right: f32,
}

/// Tracks previous ankle heights across frames
#[derive(Clone, Debug, Default)]
pub struct AnkleVelocityTracker {
    prev_left_y: Option<f32>,
    prev_right_y: Option<f32>,
    last_update_ms: Option<u64>,
}

impl AnkleVelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update with the current ankle heights, returns upward velocity
    ///
    /// The first sample for an ankle reports zero velocity.
    pub fn update(&mut self, left_y: f32, right_y: f32, timestamp_ms: u64) -> AnkleVelocity {
        let dt = self
            .last_update_ms
            .map(|prev| timestamp_ms.saturating_sub(prev) as f32 / 1000.0)
            .filter(|dt| *dt > 0.0)
            .unwrap_or(FALLBACK_DT_SECS);
        self.last_update_ms = Some(timestamp_ms);

        let left = self.prev_left_y.map_or(0.0, |prev| (prev - left_y) / dt);
        let right = self.prev_right_y.map_or(0.0, |prev| (prev - right_y) / dt);
        self.prev_left_y = Some(left_y);
        self.prev_right_y = Some(right_y);

        AnkleVelocity { left, right }
    }
}
