//! Latest-wins frame slot
//!
//! Sits between the asynchronous pose detector callback and the
//! synchronous classifier. Holds at most one frame; a newer frame
//! replaces an unprocessed one instead of queueing behind it.

use crate::bridge::PoseFrame;

#[derive(Debug, Default)]
pub struct FrameSlot {
    pending: Option<PoseFrame>,
    /// Timestamp of the newest frame ever accepted
    latest_ms: Option<u64>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a frame, replacing any pending one
    ///
    /// Frames not strictly newer than the last accepted one are dropped
    /// and false is returned.
    pub fn offer(&mut self, frame: PoseFrame) -> bool {
        if let Some(latest) = self.latest_ms {
            if frame.timestamp_ms <= latest {
                tracing::trace!(at_ms = frame.timestamp_ms, latest_ms = latest, "stale frame dropped");
                return false;
            }
        }

        self.latest_ms = Some(frame.timestamp_ms);
        if let Some(stale) = self.pending.replace(frame) {
            tracing::trace!(at_ms = stale.timestamp_ms, "unprocessed frame superseded");
        }
        true
    }

    pub fn take(&mut self) -> Option<PoseFrame> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
