//! Session integration - connects the landmark slot with the classifier
//!
//! Owns the single tracking session. JS drives it: start, then call
//! `process_latest_frame` whenever it is ready for a new status, then
//! release when the camera closes.

use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use super::landmarks::{clear_pending_frame, take_pending_frame};
use crate::error::SessionError;
use crate::session::{ExerciseSession, PoseStatus, SessionConfig, SessionSummary};

thread_local! {
    static SESSION: RefCell<Option<ExerciseSession>> = const { RefCell::new(None) };
}

fn with_session<T>(f: impl FnOnce(&mut ExerciseSession) -> T) -> Result<T, SessionError> {
    SESSION.with(|cell| {
        cell.borrow_mut()
            .as_mut()
            .map(f)
            .ok_or(SessionError::NotStarted)
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Start a tracking session, replacing any running one
///
/// `config_json` may be empty, e.g. `{"selectedExercise":"SQUATS"}`.
#[wasm_bindgen]
pub fn start_session(config_json: &str) -> Result<(), JsValue> {
    let config = SessionConfig::from_json(config_json)?;
    begin_session(config);
    Ok(())
}

/// Classify the newest pending frame, if there is one
///
/// Returns true when the status was updated.
#[wasm_bindgen]
pub fn process_latest_frame() -> Result<bool, JsValue> {
    Ok(process_pending()?)
}

/// Latest status as JSON
#[wasm_bindgen]
pub fn get_status_json() -> Result<String, JsValue> {
    to_json(&current_status()?)
}

/// Increments on every status change; poll to detect updates
#[wasm_bindgen]
pub fn status_version() -> Result<f64, JsValue> {
    Ok(with_session(|session| session.version() as f64)?)
}

/// Zero the repetition counter of the active exercise
#[wasm_bindgen]
pub fn reset_counter() -> Result<(), JsValue> {
    Ok(with_session(ExerciseSession::reset_counter)?)
}

/// Rep deltas since the last call, as a JSON array
#[wasm_bindgen]
pub fn take_rep_events() -> Result<String, JsValue> {
    to_json(&with_session(|session| session.take_rep_events())?)
}

/// End the session; returns its summary as JSON, or None if none was running
#[wasm_bindgen]
pub fn release_session() -> Option<String> {
    let summary = end_session()?;
    match to_json(&summary) {
        Ok(json) => Some(json),
        Err(err) => {
            web_sys::console::warn_1(&err);
            None
        }
    }
}

/// Whether a session is running
#[wasm_bindgen]
pub fn is_session_active() -> bool {
    SESSION.with(|cell| cell.borrow().is_some())
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Install a fresh session and forget any frame parked for the old one
pub fn begin_session(config: SessionConfig) {
    clear_pending_frame();
    let previous = SESSION.with(|cell| cell.borrow_mut().replace(ExerciseSession::new(config)));
    if let Some(previous) = previous {
        previous.release();
        tracing::warn!("previous tracking session replaced");
    }
}

/// Classify the pending frame into the running session
///
/// Without a session the pending frame stays parked.
pub fn process_pending() -> Result<bool, SessionError> {
    with_session(|session| match take_pending_frame() {
        Some(frame) => {
            session.process_frame(&frame);
            true
        }
        None => false,
    })
}

pub fn current_status() -> Result<PoseStatus, SessionError> {
    with_session(|session| session.status().clone())
}

/// Drop the running session and the pending frame
pub fn end_session() -> Option<SessionSummary> {
    clear_pending_frame();
    let session = SESSION.with(|cell| cell.borrow_mut().take())?;
    Some(session.release())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{submit_frame, LANDMARK_COUNT, VALUES_PER_LANDMARK};
    use crate::classifier::ExerciseType;

    fn flat_skeleton() -> Vec<f32> {
        (0..LANDMARK_COUNT)
            .flat_map(|i| [i as f32 / 100.0, 0.5, 0.0, 0.9])
            .collect()
    }

    #[test]
    fn test_frame_waits_for_session() {
        end_session();
        assert_eq!(submit_frame(&[], 10.0), Ok(true));
        assert!(matches!(process_pending(), Err(SessionError::NotStarted)));
        assert!(matches!(current_status(), Err(SessionError::NotStarted)));

        // Frame is still parked after the failed call
        assert_eq!(take_pending_frame().map(|f| f.timestamp_ms), Some(10));
    }

    #[test]
    fn test_submit_process_status() {
        begin_session(SessionConfig::default());
        assert!(is_session_active());
        assert!(!process_pending().unwrap());

        assert_eq!(submit_frame(&flat_skeleton(), 33.0), Ok(true));
        assert!(process_pending().unwrap());
        let status = current_status().unwrap();
        assert_eq!(status.landmarks.as_ref().map(|l| l.len()), Some(LANDMARK_COUNT));

        assert_eq!(submit_frame(&[], 66.0), Ok(true));
        assert!(process_pending().unwrap());
        let status = current_status().unwrap();
        assert_eq!(status.exercise_type, ExerciseType::None);
        assert!(status.landmarks.is_none());

        // Consumed: nothing left to process
        assert!(!process_pending().unwrap());
        end_session();
    }

    #[test]
    fn test_only_newest_frame_processed() {
        begin_session(SessionConfig::default());
        for t in [33.0, 66.0, 99.0] {
            assert_eq!(submit_frame(&flat_skeleton(), t), Ok(true));
        }
        assert!(process_pending().unwrap());
        assert!(!process_pending().unwrap());

        let summary = end_session().unwrap();
        assert_eq!(summary.frames_processed, 1);
    }

    #[test]
    fn test_session_lifecycle() {
        end_session();
        assert!(!is_session_active());
        assert!(end_session().is_none());

        begin_session(SessionConfig::default());
        submit_frame(&[], 5.0).unwrap();
        process_pending().unwrap();

        // Restart drops the old session and its watermark
        begin_session(SessionConfig::default());
        assert_eq!(submit_frame(&[], 1.0), Ok(true));
        assert!(process_pending().unwrap());

        let summary = end_session().unwrap();
        assert_eq!(summary.frames_processed, 1);
        assert_eq!(summary.frames_without_body, 1);
        assert!(!is_session_active());
        assert!(matches!(process_pending(), Err(SessionError::NotStarted)));
    }

    #[test]
    fn test_invalid_frame_never_reaches_session() {
        begin_session(SessionConfig::default());
        let short = vec![0.5; VALUES_PER_LANDMARK * 10];
        assert!(submit_frame(&short, 10.0).is_err());
        assert!(!process_pending().unwrap());
        assert_eq!(end_session().unwrap().frames_processed, 0);
    }
}
