//! Push-up detection from the left-side elbow, shoulder and hip angles
//!
//! Transitions are gated on the form check; a rep is counted on the
//! DOWN → UP edge only.

use super::{DetectorResult, ExerciseDetector};
use crate::classifier::{ExerciseType, PoseFeatures};

/// Elbow angle for an extended arm (degrees, exclusive)
pub const PUSHUP_ELBOW_EXTENDED: f32 = 160.0;

/// Elbow angle at the bottom of the movement (degrees, inclusive)
pub const PUSHUP_ELBOW_BENT: f32 = 90.0;

/// Minimum elbow-shoulder-hip angle (degrees, exclusive)
pub const PUSHUP_SHOULDER_MIN: f32 = 40.0;

/// Minimum shoulder-hip-knee angle for a straight body (degrees, exclusive)
pub const PUSHUP_HIP_STRAIGHT: f32 = 160.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PushupPhase {
    #[default]
    Up,
    Down,
}

/// Push-up rep counter
#[derive(Clone, Debug, Default)]
pub struct PushupDetector {
    phase: PushupPhase,
    repetitions: u32,
}

impl PushupDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> PushupPhase {
        self.phase
    }

    /// Advance with elbow, shoulder and hip angles (degrees)
    pub fn step(&mut self, elbow: f32, shoulder: f32, hip: f32) -> DetectorResult {
        let body_straight = hip > PUSHUP_HIP_STRAIGHT;
        let good_form = elbow > PUSHUP_ELBOW_EXTENDED && shoulder > PUSHUP_SHOULDER_MIN && body_straight;
        let down_pos = elbow <= PUSHUP_ELBOW_BENT && body_straight;
        let up_pos = elbow > PUSHUP_ELBOW_EXTENDED && shoulder > PUSHUP_SHOULDER_MIN && body_straight;

        let feedback = if good_form && self.phase == PushupPhase::Up && down_pos {
            self.phase = PushupPhase::Down;
            "Down"
        } else if good_form && self.phase == PushupPhase::Down && up_pos {
            self.phase = PushupPhase::Up;
            self.repetitions += 1;
            tracing::debug!(reps = self.repetitions, "push-up rep");
            "Up"
        } else if good_form {
            match self.phase {
                PushupPhase::Up => "Ready",
                PushupPhase::Down => "Hold",
            }
        } else {
            "Fix Form"
        };

        let confidence = if down_pos || up_pos {
            0.9
        } else if good_form {
            0.6
        } else {
            0.3
        };

        DetectorResult {
            exercise: ExerciseType::Pushups,
            repetitions: self.repetitions,
            confidence,
            is_in_position: body_straight,
            feedback,
        }
    }
}

impl ExerciseDetector for PushupDetector {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Pushups
    }

    fn evaluate(&mut self, features: &PoseFeatures) -> DetectorResult {
        self.step(features.angles.left_elbow, features.shoulder_angle, features.hip_angle)
    }

    fn repetitions(&self) -> u32 {
        self.repetitions
    }

    fn clear_repetitions(&mut self) {
        self.repetitions = 0;
    }

    fn reset(&mut self) {
        self.repetitions = 0;
        self.phase = PushupPhase::Up;
    }
}
