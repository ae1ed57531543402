//! Session configuration passed from the host as JSON

use serde::Deserialize;

use crate::classifier::ExerciseType;
use crate::error::SessionError;

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Only report rep progress for this exercise (the picker choice)
    pub selected_exercise: Option<ExerciseType>,
}

impl SessionConfig {
    /// Parse host JSON; blank input means defaults
    pub fn from_json(json: &str) -> Result<Self, SessionError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(json)?)
    }
}
