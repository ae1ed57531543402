//! Rep progress events for goal tracking and workout logging
//!
//! Watches the reported count and queues a delta each time it grows.
//! Persisting the deltas is the host's job.

use serde::Serialize;

use crate::classifier::ExerciseType;

/// Growth in the reported count of one exercise
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepDelta {
    pub exercise: ExerciseType,
    pub delta: u32,
    /// Reported count after this delta
    pub total: u32,
    /// Seconds since the first recognized frame of the session
    pub elapsed_secs: u64,
}

#[derive(Debug, Default)]
pub struct RepProgress {
    selected: Option<ExerciseType>,
    /// Exercise the baseline belongs to
    tracked: ExerciseType,
    last_reps: u32,
    started_at_ms: Option<u64>,
    pending: Vec<RepDelta>,
}

impl RepProgress {
    pub fn new(selected: Option<ExerciseType>) -> Self {
        Self {
            selected,
            ..Default::default()
        }
    }

    /// Feed the status reported for a frame
    pub fn observe(&mut self, exercise: ExerciseType, repetitions: u32, timestamp_ms: u64) {
        if !exercise.is_recognized() {
            return;
        }
        let started = *self.started_at_ms.get_or_insert(timestamp_ms);

        if exercise != self.tracked {
            self.tracked = exercise;
            self.last_reps = 0;
        }

        if self.selected.is_some_and(|selected| selected != exercise) {
            return;
        }

        if repetitions > self.last_reps {
            let delta = RepDelta {
                exercise,
                delta: repetitions - self.last_reps,
                total: repetitions,
                elapsed_secs: timestamp_ms.saturating_sub(started) / 1000,
            };
            tracing::debug!(exercise = exercise.as_str(), delta = delta.delta, total = repetitions, "rep progress");
            self.pending.push(delta);
        }
        // Counts also drop (plank hold broken), follow them down
        self.last_reps = repetitions;
    }

    /// Counter was zeroed by the user
    pub fn rebase(&mut self) {
        self.last_reps = 0;
    }

    pub fn drain(&mut self) -> Vec<RepDelta> {
        std::mem::take(&mut self.pending)
    }
}
