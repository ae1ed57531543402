//! Lunge detection from the front (more bent) knee

use super::{DetectorResult, ExerciseDetector};
use crate::classifier::{ExerciseType, PoseFeatures};

/// Front knee angle at the bottom of a lunge (degrees, inclusive)
pub const LUNGE_DOWN_ANGLE: f32 = 80.0;

/// Knee angle when back upright (degrees, inclusive)
pub const LUNGE_UP_ANGLE: f32 = 160.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LungePhase {
    #[default]
    Upright,
    Lowered,
}

#[derive(Clone, Debug, Default)]
pub struct LungeDetector {
    phase: LungePhase,
    repetitions: u32,
}

impl LungeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> LungePhase {
        self.phase
    }

    /// Advance with the smaller smoothed knee angle
    pub fn step(&mut self, knee_angle: f32) -> DetectorResult {
        let down = knee_angle <= LUNGE_DOWN_ANGLE;
        let up = knee_angle >= LUNGE_UP_ANGLE;

        let (feedback, confidence) = if down {
            self.phase = LungePhase::Lowered;
            ("Down", 0.85)
        } else if up {
            if self.phase == LungePhase::Lowered {
                self.phase = LungePhase::Upright;
                self.repetitions += 1;
                tracing::debug!(reps = self.repetitions, "lunge rep");
            }
            ("Up", 0.7)
        } else {
            ("Hold", 0.4)
        };

        DetectorResult {
            exercise: ExerciseType::Lunges,
            repetitions: self.repetitions,
            confidence,
            is_in_position: down || up,
            feedback,
        }
    }
}

impl ExerciseDetector for LungeDetector {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::Lunges
    }

    fn evaluate(&mut self, features: &PoseFeatures) -> DetectorResult {
        self.step(features.angles.left_knee.min(features.angles.right_knee))
    }

    fn repetitions(&self) -> u32 {
        self.repetitions
    }

    fn clear_repetitions(&mut self) {
        self.repetitions = 0;
    }

    fn reset(&mut self) {
        self.repetitions = 0;
        self.phase = LungePhase::Upright;
    }
}
