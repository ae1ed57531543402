//! Tracking session - one classifier and its status for one camera session
//!
//! Created when tracking starts and consumed by `release`; nothing carries
//! over between sessions.

mod config;
mod progress;
mod slot;
mod status;

pub use config::SessionConfig;
pub use progress::{RepDelta, RepProgress};
pub use slot::FrameSlot;
pub use status::PoseStatus;

use serde::Serialize;

use crate::bridge::PoseFrame;
use crate::classifier::{ExerciseClassifier, ExerciseType};

/// Arbitrator-owned session state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SessionState {
    pub active_exercise: ExerciseType,
    pub repetition_count: u32,
    pub last_result_ms: Option<u64>,
}

/// What a released session leaves behind
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub exercise: ExerciseType,
    pub repetitions: u32,
    pub frames_processed: u64,
    pub frames_without_body: u64,
}

pub struct ExerciseSession {
    classifier: ExerciseClassifier,
    state: SessionState,
    status: PoseStatus,
    progress: RepProgress,
    /// Bumped once per status change
    version: u64,
    frames_processed: u64,
    frames_without_body: u64,
}

impl ExerciseSession {
    pub fn new(config: SessionConfig) -> Self {
        tracing::info!(selected = ?config.selected_exercise, "tracking session started");
        Self {
            classifier: ExerciseClassifier::new(),
            state: SessionState::default(),
            status: PoseStatus::default(),
            progress: RepProgress::new(config.selected_exercise),
            version: 0,
            frames_processed: 0,
            frames_without_body: 0,
        }
    }

    /// Classify one completed detector frame and publish the status
    pub fn process_frame(&mut self, frame: &PoseFrame) -> &PoseStatus {
        self.frames_processed += 1;
        self.version += 1;
        self.state.last_result_ms = Some(frame.timestamp_ms);

        let Some(landmarks) = frame.landmarks() else {
            self.frames_without_body += 1;
            self.status = self.status.without_detection();
            return &self.status;
        };

        let result = self.classifier.classify(landmarks, frame.timestamp_ms);
        self.state.active_exercise = self.classifier.active_exercise();
        self.state.repetition_count = result.repetitions;
        self.progress
            .observe(result.exercise, result.repetitions, frame.timestamp_ms);

        self.status = PoseStatus {
            exercise_type: result.exercise,
            repetitions: result.repetitions,
            confidence: result.confidence,
            is_in_position: result.is_in_position,
            landmarks: Some(landmarks.to_vec()),
            feedback_message: result.feedback.to_string(),
        };
        &self.status
    }

    pub fn status(&self) -> &PoseStatus {
        &self.status
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Zero the active exercise's phase and count, keep the exercise
    pub fn reset_counter(&mut self) {
        self.classifier.reset_active();
        self.progress.rebase();
        self.state.repetition_count = 0;
        self.status.repetitions = 0;
        self.version += 1;
        tracing::debug!(exercise = self.state.active_exercise.as_str(), "counter reset");
    }

    /// Rep deltas since the last call
    pub fn take_rep_events(&mut self) -> Vec<RepDelta> {
        self.progress.drain()
    }

    /// End the session
    pub fn release(self) -> SessionSummary {
        let summary = SessionSummary {
            exercise: self.state.active_exercise,
            repetitions: self.state.repetition_count,
            frames_processed: self.frames_processed,
            frames_without_body: self.frames_without_body,
        };
        tracing::info!(
            exercise = summary.exercise.as_str(),
            reps = summary.repetitions,
            frames = summary.frames_processed,
            "tracking session released"
        );
        summary
    }
}

impl Default for ExerciseSession {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{
        Landmark, LANDMARK_COUNT, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER,
        LEFT_WRIST,
    };

    /// Skeleton with both knees at `knee_deg`, arms half bent and the torso
    /// upright (nothing else clears the threshold)
    fn skeleton(knee_deg: f32) -> [Landmark; LANDMARK_COUNT] {
        let mut lm = [Landmark::default(); LANDMARK_COUNT];
        let bend = (180.0 - knee_deg).to_radians();
        for (side, x) in [(0usize, 0.45f32), (1, 0.55)] {
            lm[LEFT_SHOULDER + side] = Landmark::new(x, 0.3, 0.0, 1.0);
            // Elbow at 120°: forearm swung 60° off the upper-arm line
            lm[LEFT_ELBOW + side] = Landmark::new(x, 0.4, 0.0, 1.0);
            lm[LEFT_WRIST + side] = Landmark::new(
                x + 0.1 * 60f32.to_radians().sin(),
                0.4 + 0.1 * 60f32.to_radians().cos(),
                0.0,
                1.0,
            );
            lm[LEFT_HIP + side] = Landmark::new(x, 0.55, 0.0, 1.0);
            lm[LEFT_KNEE + side] = Landmark::new(x, 0.7, 0.0, 1.0);
            lm[LEFT_ANKLE + side] = Landmark::new(
                x + 0.15 * bend.sin(),
                0.7 + 0.15 * bend.cos(),
                0.0,
                1.0,
            );
        }
        lm
    }

    /// Deep enough that the smoothed angle steps over the 70-80° band in
    /// one frame; inside that band the lunge detector outranks the squat
    /// (see `test_gradual_squat_hands_off_to_lunge`)
    const DOWN: f32 = 5.0;
    const UP: f32 = 178.0;

    fn frame(at_ms: u64, knee_deg: f32) -> PoseFrame {
        PoseFrame::detected(at_ms, skeleton(knee_deg))
    }

    #[test]
    fn test_squat_session_counts_reps() {
        let mut session = ExerciseSession::default();
        let mut t = 0;
        for _ in 0..2 {
            for _ in 0..15 {
                t += 33;
                session.process_frame(&frame(t, DOWN));
            }
            for _ in 0..15 {
                t += 33;
                session.process_frame(&frame(t, UP));
            }
        }
        let status = session.status();
        assert_eq!(status.exercise_type, ExerciseType::Squats);
        assert_eq!(status.repetitions, 2);
        assert_eq!(status.feedback_message, "Up");
        assert_eq!(status.landmarks.as_ref().map(|l| l.len()), Some(LANDMARK_COUNT));
        assert_eq!(session.state().repetition_count, 2);
        assert_eq!(session.state().last_result_ms, Some(t));
    }

    #[test]
    fn test_empty_frame_keeps_detector_state() {
        let mut session = ExerciseSession::default();
        let mut t = 0;
        for _ in 0..15 {
            t += 33;
            session.process_frame(&frame(t, DOWN));
        }

        t += 33;
        let status = session.process_frame(&PoseFrame::empty(t)).clone();
        assert_eq!(status.exercise_type, ExerciseType::None);
        assert_eq!(status.confidence, 0.0);
        assert!(status.landmarks.is_none());

        // Still squatting underneath: standing up completes the rep
        for _ in 0..15 {
            t += 33;
            session.process_frame(&frame(t, UP));
        }
        assert_eq!(session.status().exercise_type, ExerciseType::Squats);
        assert_eq!(session.status().repetitions, 1);
    }

    #[test]
    fn test_ambiguous_pose_is_unrecognized() {
        let mut session = ExerciseSession::default();
        let status = session.process_frame(&frame(0, 120.0));
        assert_eq!(status.exercise_type, ExerciseType::None);
        assert_eq!(status.confidence, 0.2);
        assert_eq!(status.feedback_message, "Position not recognized");
    }

    #[test]
    fn test_reset_counter_keeps_exercise() {
        let mut session = ExerciseSession::default();
        let mut t = 0;
        for knee in [DOWN; 6].into_iter().chain([UP; 10]) {
            t += 33;
            session.process_frame(&frame(t, knee));
        }
        assert_eq!(session.status().repetitions, 1);
        let before = session.version();

        session.reset_counter();
        assert_eq!(session.status().repetitions, 0);
        assert_eq!(session.status().exercise_type, ExerciseType::Squats);
        assert_eq!(session.state().active_exercise, ExerciseType::Squats);
        assert_eq!(session.version(), before + 1);
    }

    #[test]
    fn test_rep_events_and_release() {
        let mut session = ExerciseSession::new(SessionConfig {
            selected_exercise: Some(ExerciseType::Squats),
        });
        let mut t = 0;
        for knee in [DOWN; 10].into_iter().chain([UP; 10]) {
            t += 33;
            session.process_frame(&frame(t, knee));
        }
        session.process_frame(&PoseFrame::empty(t + 33));

        let events = session.take_rep_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].exercise, ExerciseType::Squats);
        assert_eq!(events[0].total, 1);

        let summary = session.release();
        assert_eq!(summary.exercise, ExerciseType::Squats);
        assert_eq!(summary.repetitions, 1);
        assert_eq!(summary.frames_processed, 21);
        assert_eq!(summary.frames_without_body, 1);
    }

    /// Knee angles of one slow squat: 4° per frame down to 58° and back,
    /// with holds at the top and bottom
    fn slow_squat() -> Vec<f32> {
        let mut knees = vec![UP; 10];
        knees.extend((1..=30).map(|i| 178.0 - 4.0 * i as f32));
        knees.extend([58.0; 10]);
        knees.extend((1..=30).map(|i| 58.0 + 4.0 * i as f32));
        knees.extend([UP; 10]);
        knees
    }

    #[test]
    fn test_gradual_squat_hands_off_to_lunge() {
        let mut session = ExerciseSession::default();
        let mut t = 0;
        for _ in 0..3 {
            let mut seen: Vec<ExerciseType> = Vec::new();
            let mut bottom_feedback = String::new();
            for (i, knee) in slow_squat().into_iter().enumerate() {
                t += 33;
                let status = session.process_frame(&frame(t, knee));
                if seen.last() != Some(&status.exercise_type) {
                    seen.push(status.exercise_type);
                }
                if i == 49 {
                    bottom_feedback = status.feedback_message.clone();
                }
            }

            // The 70-80° band is crossed twice and lunge wins it both times.
            // Squat takes over again at the top, and that switch zeroes the
            // rep its detector just counted.
            assert_eq!(
                seen,
                [
                    ExerciseType::Squats,
                    ExerciseType::Lunges,
                    ExerciseType::Squats,
                    ExerciseType::Lunges,
                    ExerciseType::Squats,
                ]
            );
            assert_eq!(bottom_feedback, "Down");
            assert_eq!(session.status().exercise_type, ExerciseType::Squats);
            assert_eq!(session.status().repetitions, 0);
        }
    }
}
