//! Exercise detectors - one hysteresis state machine per exercise
//!
//! Every detector owns its phase and repetition count; nothing is shared
//! between exercises.

mod curl;
mod kick;
mod lunge;
mod plank;
mod pushup;
mod squat;

pub use curl::{CurlDetector, CurlPhase};
pub use kick::{KickDetector, KickPhase};
pub use lunge::{LungeDetector, LungePhase};
pub use plank::PlankDetector;
pub use pushup::{PushupDetector, PushupPhase};
pub use squat::{SquatDetector, SquatPhase};

use crate::classifier::{ExerciseType, PoseFeatures};

/// Candidate result from a single detector
#[derive(Clone, Debug, PartialEq)]
pub struct DetectorResult {
    pub exercise: ExerciseType,
    pub repetitions: u32,
    /// 0.0 - 1.0
    pub confidence: f32,
    pub is_in_position: bool,
    pub feedback: &'static str,
}

/// Common interface the arbitrator drives
pub trait ExerciseDetector {
    fn exercise(&self) -> ExerciseType;

    /// Advance the detector by one frame
    fn evaluate(&mut self, features: &PoseFeatures) -> DetectorResult;

    fn repetitions(&self) -> u32;

    /// Zero the count, keep the phase (exercise switch)
    fn clear_repetitions(&mut self);

    /// Zero the count and return to the resting phase
    fn reset(&mut self);
}

/// Detectors in arbitration priority order
pub fn default_detectors() -> Vec<Box<dyn ExerciseDetector>> {
    vec![
        Box::new(SquatDetector::new()),
        Box::new(PushupDetector::new()),
        Box::new(KickDetector::new()),
        Box::new(CurlDetector::new()),
        Box::new(LungeDetector::new()),
        Box::new(PlankDetector::new()),
    ]
}
