//! Bicep curl detection from the tighter of the two elbows

use super::{DetectorResult, ExerciseDetector};
use crate::classifier::{ExerciseType, PoseFeatures};

/// Elbow angle for a fully curled arm (degrees, inclusive)
pub const CURL_DOWN_ANGLE: f32 = 50.0;

/// Elbow angle for an extended arm (degrees, inclusive)
pub const CURL_UP_ANGLE: f32 = 160.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CurlPhase {
    #[default]
    Up,
    Down,
}

#[derive(Clone, Debug, Default)]
pub struct CurlDetector {
    phase: CurlPhase,
    repetitions: u32,
}

impl CurlDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> CurlPhase {
        self.phase
    }

    /// Advance with the smaller smoothed elbow angle
    pub fn step(&mut self, elbow_angle: f32) -> DetectorResult {
        let down = elbow_angle <= CURL_DOWN_ANGLE;
        let up = elbow_angle >= CURL_UP_ANGLE;

        let (feedback, confidence) = if down {
            self.phase = CurlPhase::Down;
            ("Curl", 0.9)
        } else if up {
            if self.phase == CurlPhase::Down {
                self.phase = CurlPhase::Up;
                self.repetitions += 1;
                tracing::debug!(reps = self.repetitions, "curl rep");
            }
            ("Extend", 0.8)
        } else {
            ("Hold", 0.4)
        };

        DetectorResult {
            exercise: ExerciseType::BicepCurls,
            repetitions: self.repetitions,
            confidence,
            is_in_position: down || up,
            feedback,
        }
    }
}

impl ExerciseDetector for CurlDetector {
    fn exercise(&self) -> ExerciseType {
        ExerciseType::BicepCurls
    }

    fn evaluate(&mut self, features: &PoseFeatures) -> DetectorResult {
        self.step(features.angles.left_elbow.min(features.angles.right_elbow))
    }

    fn repetitions(&self) -> u32 {
        self.repetitions
    }

    fn clear_repetitions(&mut self) {
        self.repetitions = 0;
    }

    fn reset(&mut self) {
        self.repetitions = 0;
        self.phase = CurlPhase::Up;
    }
}
