//! Classifier module - feature extraction and exercise arbitration
//!
//! Rust owns the whole pipeline: landmarks in, one classification out
//! per completed frame.

mod arbitrator;
mod features;
mod model;

pub use arbitrator::{
    ExerciseClassifier, CONFIDENCE_THRESHOLD, UNRECOGNIZED_CONFIDENCE, UNRECOGNIZED_FEEDBACK,
};
pub use features::{FeatureExtractor, PoseFeatures};
pub use model::{ExerciseType, EXERCISE_TYPES};
