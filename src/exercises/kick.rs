//! Kick detection from ankle height and upward speed
//!
//! Event-triggered rather than phase-based: a fast upward ankle that is
//! raised above the hip line counts immediately. A debounce window keeps
//! one physical kick from registering several reps.

use super::{DetectorResult, ExerciseDetector};
use crate::classifier::{ExerciseType, PoseFeatures};

/// Minimum upward ankle speed (normalized units per second, exclusive)
pub const KICK_VELOCITY_THRESHOLD: f32 = 1.2;

/// How far above the hip line the ankle must be (normalized y)
pub const KICK_RAISE_MARGIN: f32 = 0.16;

/// Minimum time between two counted kicks
pub const KICK_DEBOUNCE_MS: u64 = 350;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KickPhase {
    #[default]
    Neutral,
    Kicking,
}

/// Kick counter with time-based debounce
#[derive(Clone, Debug, Default)]
pub struct KickDetector {
    phase: KickPhase,
    repetitions: u32,
    /// Timestamp of the last counted kick
    last_kick_ms: Option<u64>,
}

impl KickDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> KickPhase {
        self.phase
    }

    fn debounced(&self, now_ms: u64) -> bool {
        self.last_kick_ms
            .map_or(true, |last| now_ms.saturating_sub(last) >= KICK_DEBOUNCE_MS)
    }
}

impl ExerciseDetector for KickDetector {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Kicks
    }

    fn evaluate(&mut self, features: &PoseFeatures) -> DetectorResult {
        let raise_line = features.hip_y - KICK_RAISE_MARGIN;
        let left_raised = features.left_ankle_y < raise_line;
        let right_raised = features.right_ankle_y < raise_line;

        let velocity = features.ankle_velocity;
        let triggered = (left_raised && velocity.left > KICK_VELOCITY_THRESHOLD)
            || (right_raised && velocity.right > KICK_VELOCITY_THRESHOLD);
        let above_hip = left_raised || right_raised;

        let feedback = if triggered && self.debounced(features.timestamp_ms) {
            self.repetitions += 1;
            self.last_kick_ms = Some(features.timestamp_ms);
            self.phase = KickPhase::Kicking;
            tracing::debug!(reps = self.repetitions, at_ms = features.timestamp_ms, "kick");
            "Kick"
        } else if !above_hip {
            self.phase = KickPhase::Neutral;
            "Ready"
        } else {
            "Hold"
        };

        let confidence = if triggered {
            0.95
        } else if above_hip {
            0.7
        } else {
            0.3
        };

        DetectorResult {
            exercise: ExerciseType::Kicks,
            repetitions: self.repetitions,
            confidence,
            is_in_position: above_hip,
            feedback,
        }
    }

    fn repetitions(&self) -> u32 {
        self.repetitions
    }

    fn clear_repetitions(&mut self) {
        self.repetitions = 0;
    }

    fn reset(&mut self) {
        self.repetitions = 0;
        self.phase = KickPhase::Neutral;
    }
}
