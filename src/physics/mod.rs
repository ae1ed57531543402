//! Physics module - joint angles, smoothing and ankle velocity
//!
//! Re-exports only. All logic in submodules.

mod angles;
mod smoothing;
mod velocity;

pub use angles::calculate_joint_angle;
pub use smoothing::{AngleSmoother, ExpSmoother, LimbAngles, SMOOTHING_ALPHA};
pub use velocity::{AnkleVelocity, AnkleVelocityTracker, FALLBACK_DT_SECS};
