//! Error types for the landmark producer and the session layer
//!
//! The classification core never fails; these only cover malformed input
//! at the JS boundary and session lifecycle misuse.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Rejections raised while building a landmark frame from raw host data
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("invalid landmark data length: {got} (expected {expected} or 0)")]
    InvalidLength { got: usize, expected: usize },

    #[error("landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("invalid frame timestamp: {0}")]
    InvalidTimestamp(f64),
}

/// Errors surfaced by the session bridge
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid session config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("no tracking session is running")]
    NotStarted,

    #[error(transparent)]
    Frame(#[from] FrameError),
}

impl From<FrameError> for JsValue {
    fn from(err: FrameError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<SessionError> for JsValue {
    fn from(err: SessionError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
