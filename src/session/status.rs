//! Status record handed to the UI and persistence collaborators

use serde::Serialize;

use crate::bridge::Landmark;
use crate::classifier::ExerciseType;

/// Always-latest classification status, serialized camelCase for JS
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseStatus {
    pub exercise_type: ExerciseType,
    pub repetitions: u32,
    pub confidence: f32,
    pub is_in_position: bool,
    /// Pass-through of the classified skeleton, `None` without a body
    pub landmarks: Option<Vec<Landmark>>,
    pub feedback_message: String,
}

impl PoseStatus {
    /// Copy of this status with the transient "no detection" fields set
    pub fn without_detection(&self) -> Self {
        Self {
            exercise_type: ExerciseType::None,
            confidence: 0.0,
            landmarks: None,
            ..self.clone()
        }
    }
}
