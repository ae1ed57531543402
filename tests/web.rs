//! Browser tests for the JS-facing entry points
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]

use rep_counter_web::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_init_installs_subscriber() {
    init();
    init();
    assert!(tracing::dispatcher::has_been_set());
}

#[wasm_bindgen_test]
fn test_frame_survives_missing_session() {
    init();
    release_session();
    assert!(update_landmarks(&[], 10.0));
    assert!(process_latest_frame().is_err());

    start_session("").unwrap();
    // Start clears the slot, so the host resubmits
    assert!(update_landmarks(&[], 20.0));
    assert!(process_latest_frame().unwrap());
    assert!(get_status_json().unwrap().contains("\"exerciseType\":\"NONE\""));
    assert!(release_session().unwrap().contains("\"framesProcessed\":1"));
}

#[wasm_bindgen_test]
fn test_bad_timestamp_rejected() {
    init();
    start_session("{}").unwrap();
    assert!(!update_landmarks(&[], f64::NAN));
    assert!(!update_landmarks(&[], -5.0));
    assert!(!process_latest_frame().unwrap());
    release_session();
}

#[wasm_bindgen_test]
fn test_bad_config_rejected() {
    assert!(start_session("{not json").is_err());
}
