//! Plank hold timer
//!
//! Reports whole seconds of continuous shoulder/hip alignment as its
//! repetition count. Any misaligned frame drops the count back to zero.

use super::{DetectorResult, ExerciseDetector};
use crate::classifier::{ExerciseType, PoseFeatures};

/// Maximum shoulder/hip height difference for a straight body (exclusive)
pub const PLANK_ALIGN_TOLERANCE: f32 = 0.10;

#[derive(Clone, Debug, Default)]
pub struct PlankDetector {
    /// Start of the current aligned stretch
    hold_start_ms: Option<u64>,
    held_secs: u32,
}

impl PlankDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_holding(&self) -> bool {
        self.hold_start_ms.is_some()
    }
}

impl ExerciseDetector for PlankDetector {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Plank
    }

    fn evaluate(&mut self, features: &PoseFeatures) -> DetectorResult {
        let aligned = (features.shoulder_y - features.hip_y).abs() < PLANK_ALIGN_TOLERANCE;

        if aligned {
            let start = *self.hold_start_ms.get_or_insert(features.timestamp_ms);
            self.held_secs = (features.timestamp_ms.saturating_sub(start) / 1000) as u32;
        } else {
            if self.hold_start_ms.take().is_some() {
                tracing::debug!(held_secs = self.held_secs, "plank hold broken");
            }
            self.held_secs = 0;
        }

        DetectorResult {
            exercise: ExerciseType::Plank,
            repetitions: self.held_secs,
            confidence: if aligned { 0.8 } else { 0.3 },
            is_in_position: aligned,
            feedback: if aligned { "Hold" } else { "Align hips" },
        }
    }

    fn repetitions(&self) -> u32 {
        self.held_secs
    }

    /// Restarts the hold timer as well; the count is derived from it
    fn clear_repetitions(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.held_secs = 0;
        self.hold_start_ms = None;
    }
}
