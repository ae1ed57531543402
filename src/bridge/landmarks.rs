//! Landmark frame contract and JS bridge
//!
//! Receives MediaPipe pose landmarks from JavaScript, validates them into
//! a `PoseFrame` and parks the newest one in a latest-wins slot until the
//! classifier is ready for it.

use serde::Serialize;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::error::FrameError;
use crate::session::FrameSlot;

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 33;

/// Values per landmark on the wire: x, y, z, visibility
pub const VALUES_PER_LANDMARK: usize = 4;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

// ============================================================================
// LANDMARK DATA STRUCTURES
// ============================================================================

/// A single 3D landmark point (normalized image coordinates)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized
    pub y: f32, // 0-1 normalized, grows downward
    pub z: f32, // Relative depth
    pub visibility: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32, visibility: f32) -> Self {
        Self { x, y, z, visibility }
    }
}

/// One detector result: either a full skeleton or "no body detected"
#[derive(Clone, Debug, PartialEq)]
pub struct PoseFrame {
    pub timestamp_ms: u64,
    landmarks: Option<[Landmark; LANDMARK_COUNT]>,
}

impl PoseFrame {
    pub fn detected(timestamp_ms: u64, landmarks: [Landmark; LANDMARK_COUNT]) -> Self {
        Self {
            timestamp_ms,
            landmarks: Some(landmarks),
        }
    }

    pub fn empty(timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            landmarks: None,
        }
    }

    /// Build a frame from a flat `[x, y, z, visibility] × 33` buffer.
    ///
    /// An empty buffer is a valid "no detection" frame. Partial skeletons
    /// are rejected here so the classifier only ever sees complete frames.
    pub fn from_flat(data: &[f32], timestamp_ms: u64) -> Result<Self, FrameError> {
        if data.is_empty() {
            return Ok(Self::empty(timestamp_ms));
        }

        let expected = LANDMARK_COUNT * VALUES_PER_LANDMARK;
        if data.len() != expected {
            return Err(FrameError::InvalidLength {
                got: data.len(),
                expected,
            });
        }

        let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
        for (index, chunk) in data.chunks_exact(VALUES_PER_LANDMARK).enumerate() {
            if chunk.iter().any(|v| !v.is_finite()) {
                return Err(FrameError::NonFinite { index });
            }
            landmarks[index] = Landmark::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        }

        Ok(Self::detected(timestamp_ms, landmarks))
    }

    pub fn landmarks(&self) -> Option<&[Landmark; LANDMARK_COUNT]> {
        self.landmarks.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_none()
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static PENDING_FRAME: RefCell<FrameSlot> = RefCell::new(FrameSlot::new());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from the pose detector's result callback with a flat Float32Array
/// of 132 values (33 landmarks × x, y, z, visibility), or an empty array
/// when no body was found.
///
/// `timestamp_ms` is the detector's frame timestamp. Every frame of a
/// session must come from the same clock, since ordering is checked
/// against the newest accepted timestamp. Returns false when the frame was
/// rejected or arrived out of order.
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32], timestamp_ms: f64) -> bool {
    match submit_frame(data, timestamp_ms) {
        Ok(accepted) => accepted,
        Err(err) => {
            web_sys::console::warn_1(&err.to_string().into());
            false
        }
    }
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

/// Validate raw host data and offer it to the pending slot
///
/// Ok(false) means the frame was valid but not newer than the last one.
pub fn submit_frame(data: &[f32], timestamp_ms: f64) -> Result<bool, FrameError> {
    if !timestamp_ms.is_finite() || timestamp_ms < 0.0 {
        return Err(FrameError::InvalidTimestamp(timestamp_ms));
    }
    let frame = PoseFrame::from_flat(data, timestamp_ms as u64)?;
    Ok(PENDING_FRAME.with(|slot| slot.borrow_mut().offer(frame)))
}

/// Take the newest pending frame, if any
pub fn take_pending_frame() -> Option<PoseFrame> {
    PENDING_FRAME.with(|slot| slot.borrow_mut().take())
}

/// Forget any pending frame and the timestamp watermark (new camera session)
pub fn clear_pending_frame() {
    PENDING_FRAME.with(|slot| slot.borrow_mut().clear());
}
