//! Exercise type shared by detectors, session and host
//!
//! One enum for every layer. `EXERCISE_TYPES` is the only mapping between
//! the enum and the names/indices the JavaScript side uses.

use serde::{Deserialize, Serialize};

/// Exercise the classifier can report
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseType {
    #[default]
    None,
    Squats,
    Pushups,
    Kicks,
    BicepCurls,
    Lunges,
    Plank,
}

/// Wire names in host index order
pub const EXERCISE_TYPES: [(ExerciseType, &str); 7] = [
    (ExerciseType::None, "NONE"),
    (ExerciseType::Squats, "SQUATS"),
    (ExerciseType::Pushups, "PUSHUPS"),
    (ExerciseType::Kicks, "KICKS"),
    (ExerciseType::BicepCurls, "BICEP_CURLS"),
    (ExerciseType::Lunges, "LUNGES"),
    (ExerciseType::Plank, "PLANK"),
];

impl ExerciseType {
    pub fn index(&self) -> usize {
        EXERCISE_TYPES
            .iter()
            .position(|(kind, _)| kind == self)
            .unwrap_or(0)
    }

    pub fn as_str(&self) -> &'static str {
        EXERCISE_TYPES[self.index()].1
    }

    pub fn is_recognized(&self) -> bool {
        *self != ExerciseType::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_serde_names() {
        for (kind, wire) in EXERCISE_TYPES {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", wire));
            let parsed: ExerciseType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, kind);
            assert_eq!(kind.as_str(), wire);
        }
    }

    #[test]
    fn test_index_lookup() {
        assert_eq!(ExerciseType::BicepCurls.index(), 4);
        assert_eq!(ExerciseType::None.index(), 0);
        assert!(!ExerciseType::None.is_recognized());
        assert!(ExerciseType::Plank.is_recognized());
    }
}
