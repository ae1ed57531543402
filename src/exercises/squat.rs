//! Squat detection from the mean knee angle
//!
//! Counts one rep per STANDING → SQUATTING → STANDING cycle. Angles between
//! the two thresholds are a dead zone: no phase change, no rep.

use super::{DetectorResult, ExerciseDetector};
use crate::classifier::{ExerciseType, PoseFeatures};

/// Mean knee angle at or below which the user is squatting (degrees)
pub const SQUAT_DOWN_ANGLE: f32 = 70.0;

/// Mean knee angle at or above which the user is standing (degrees)
pub const SQUAT_UP_ANGLE: f32 = 160.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SquatPhase {
    #[default]
    Standing,
    Squatting,
}

/// Squat rep counter
#[derive(Clone, Debug, Default)]
pub struct SquatDetector {
    phase: SquatPhase,
    repetitions: u32,
}

impl SquatDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SquatPhase {
        self.phase
    }

    /// Advance with the smoothed mean knee angle
    pub fn step(&mut self, knee_angle: f32) -> DetectorResult {
        let in_down = knee_angle <= SQUAT_DOWN_ANGLE;
        let in_up = knee_angle >= SQUAT_UP_ANGLE;

        let (feedback, confidence) = if in_down {
            self.phase = SquatPhase::Squatting;
            ("Down", 0.9)
        } else if in_up {
            if self.phase == SquatPhase::Squatting {
                self.phase = SquatPhase::Standing;
                self.repetitions += 1;
                tracing::debug!(reps = self.repetitions, "squat rep");
            }
            ("Up", 0.8)
        } else {
            ("Keep form", 0.4)
        };

        DetectorResult {
            exercise: ExerciseType::Squats,
            repetitions: self.repetitions,
            confidence,
            is_in_position: in_down || in_up,
            feedback,
        }
    }
}

impl ExerciseDetector for SquatDetector {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Squats
    }

    fn evaluate(&mut self, features: &PoseFeatures) -> DetectorResult {
        self.step((features.angles.left_knee + features.angles.right_knee) / 2.0)
    }

    fn repetitions(&self) -> u32 {
        self.repetitions
    }

    fn clear_repetitions(&mut self) {
        self.repetitions = 0;
    }

    fn reset(&mut self) {
        self.repetitions = 0;
        self.phase = SquatPhase::Standing;
    }
}
