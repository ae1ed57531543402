//! Rep Counter Web - exercise recognition from pose landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

pub mod bridge;
pub mod classifier;
pub mod error;
pub mod exercises;
pub mod physics;
pub mod session;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    get_status_json, is_session_active, process_latest_frame, release_session, reset_counter,
    start_session, status_version, take_rep_events, update_landmarks,
};

pub use bridge::{Landmark, PoseFrame};
pub use classifier::{ExerciseClassifier, ExerciseType};
pub use error::{FrameError, SessionError};
pub use session::{ExerciseSession, PoseStatus, SessionConfig};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads: panic messages and
/// `tracing` events go to the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if !tracing::dispatcher::has_been_set() {
        tracing_wasm::set_as_global_default();
    }
}
