//! Priority arbitration between exercise detectors
//!
//! Every detector sees every frame so each keeps its own phase current.
//! The first one, in priority order, whose confidence clears the threshold
//! becomes the reported exercise.

use super::features::{FeatureExtractor, PoseFeatures};
use super::model::ExerciseType;
use crate::bridge::{Landmark, LANDMARK_COUNT};
use crate::exercises::{default_detectors, DetectorResult, ExerciseDetector};

/// A detector must be strictly above this to be selected
pub const CONFIDENCE_THRESHOLD: f32 = 0.7;

/// Confidence reported when no detector is selected
pub const UNRECOGNIZED_CONFIDENCE: f32 = 0.2;

pub const UNRECOGNIZED_FEEDBACK: &str = "Position not recognized";

/// Feature extraction plus the six detectors, for one tracking session
pub struct ExerciseClassifier {
    features: FeatureExtractor,
    /// Priority order: squat, push-up, kick, curl, lunge, plank
    detectors: Vec<Box<dyn ExerciseDetector>>,
    active: ExerciseType,
}

impl ExerciseClassifier {
    pub fn new() -> Self {
        Self {
            features: FeatureExtractor::new(),
            detectors: default_detectors(),
            active: ExerciseType::None,
        }
    }

    pub fn active_exercise(&self) -> ExerciseType {
        self.active
    }

    /// Repetitions of the active exercise (0 while nothing is active)
    pub fn active_repetitions(&self) -> u32 {
        self.detector(self.active).map_or(0, |d| d.repetitions())
    }

    /// Classify one complete skeleton
    pub fn classify(
        &mut self,
        landmarks: &[Landmark; LANDMARK_COUNT],
        timestamp_ms: u64,
    ) -> DetectorResult {
        let features = self.features.extract(landmarks, timestamp_ms);
        self.arbitrate(&features)
    }

    /// Run all detectors on prepared features and pick the winner
    pub fn arbitrate(&mut self, features: &PoseFeatures) -> DetectorResult {
        let results: Vec<DetectorResult> = self
            .detectors
            .iter_mut()
            .map(|detector| detector.evaluate(features))
            .collect();

        let Some((index, mut result)) = results
            .into_iter()
            .enumerate()
            .find(|(_, result)| result.confidence > CONFIDENCE_THRESHOLD)
        else {
            return DetectorResult {
                exercise: self.active,
                repetitions: self.active_repetitions(),
                confidence: UNRECOGNIZED_CONFIDENCE,
                is_in_position: false,
                feedback: UNRECOGNIZED_FEEDBACK,
            };
        };

        if result.exercise != self.active {
            tracing::debug!(
                from = self.active.as_str(),
                to = result.exercise.as_str(),
                "exercise switch"
            );
            self.detectors[index].clear_repetitions();
            result.repetitions = 0;
            self.active = result.exercise;
        }

        result
    }

    /// Zero the active detector's phase and count; the active type stays
    pub fn reset_active(&mut self) {
        let active = self.active;
        if let Some(detector) = self.detectors.iter_mut().find(|d| d.exercise() == active) {
            detector.reset();
        }
    }

    fn detector(&self, exercise: ExerciseType) -> Option<&dyn ExerciseDetector> {
        self.detectors
            .iter()
            .find(|d| d.exercise() == exercise)
            .map(|d| d.as_ref())
    }
}

impl Default for ExerciseClassifier {
    fn default() -> Self {
        Self::new()
    }
}
