//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod session_bridge;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    // Internal API
    clear_pending_frame,
    submit_frame,
    take_pending_frame,
    Landmark,
    PoseFrame,
    // Constants
    LANDMARK_COUNT, VALUES_PER_LANDMARK,
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LEFT_HIP, RIGHT_HIP,
    LEFT_KNEE, RIGHT_KNEE,
    LEFT_ANKLE, RIGHT_ANKLE,
};

pub use session_bridge::{
    start_session,
    process_latest_frame,
    get_status_json,
    status_version,
    reset_counter,
    take_rep_events,
    release_session,
    is_session_active,
    // Internal API
    begin_session,
    process_pending,
    current_status,
    end_session,
};
