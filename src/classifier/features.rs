//! Feature extraction for exercise detection
//!
//! Turns one skeleton into the signals the detectors read. The four limb
//! angles are always smoothed; detectors never see the raw values.

use crate::bridge::{
    Landmark, LANDMARK_COUNT, LEFT_ANKLE, LEFT_ELBOW, LEFT_HIP, LEFT_KNEE, LEFT_SHOULDER,
    LEFT_WRIST, RIGHT_ANKLE, RIGHT_ELBOW, RIGHT_HIP, RIGHT_KNEE, RIGHT_SHOULDER, RIGHT_WRIST,
};
use crate::physics::{
    calculate_joint_angle, AngleSmoother, AnkleVelocity, AnkleVelocityTracker, LimbAngles,
};

/// Per-frame detector input
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PoseFeatures {
    pub timestamp_ms: u64,
    /// Smoothed knee/elbow angles (degrees)
    pub angles: LimbAngles,
    /// Left elbow-shoulder-hip angle (degrees)
    pub shoulder_angle: f32,
    /// Left shoulder-hip-knee angle (degrees)
    pub hip_angle: f32,
    /// Mean shoulder height (normalized y)
    pub shoulder_y: f32,
    /// Mean hip height (normalized y)
    pub hip_y: f32,
    pub left_ankle_y: f32,
    pub right_ankle_y: f32,
    pub ankle_velocity: AnkleVelocity,
}

/// Owns the cross-frame signal state: angle smoothers and ankle history
#[derive(Clone, Debug, Default)]
pub struct FeatureExtractor {
    smoother: AngleSmoother,
    ankles: AnkleVelocityTracker,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract features from a complete skeleton
    pub fn extract(
        &mut self,
        landmarks: &[Landmark; LANDMARK_COUNT],
        timestamp_ms: u64,
    ) -> PoseFeatures {
        let raw = LimbAngles {
            left_knee: calculate_joint_angle(
                &landmarks[LEFT_HIP],
                &landmarks[LEFT_KNEE],
                &landmarks[LEFT_ANKLE],
            ),
            right_knee: calculate_joint_angle(
                &landmarks[RIGHT_HIP],
                &landmarks[RIGHT_KNEE],
                &landmarks[RIGHT_ANKLE],
            ),
            left_elbow: calculate_joint_angle(
                &landmarks[LEFT_SHOULDER],
                &landmarks[LEFT_ELBOW],
                &landmarks[LEFT_WRIST],
            ),
            right_elbow: calculate_joint_angle(
                &landmarks[RIGHT_SHOULDER],
                &landmarks[RIGHT_ELBOW],
                &landmarks[RIGHT_WRIST],
            ),
        };

        let left_ankle_y = landmarks[LEFT_ANKLE].y;
        let right_ankle_y = landmarks[RIGHT_ANKLE].y;

        PoseFeatures {
            timestamp_ms,
            angles: self.smoother.update(raw),
            shoulder_angle: calculate_joint_angle(
                &landmarks[LEFT_ELBOW],
                &landmarks[LEFT_SHOULDER],
                &landmarks[LEFT_HIP],
            ),
            hip_angle: calculate_joint_angle(
                &landmarks[LEFT_SHOULDER],
                &landmarks[LEFT_HIP],
                &landmarks[LEFT_KNEE],
            ),
            shoulder_y: (landmarks[LEFT_SHOULDER].y + landmarks[RIGHT_SHOULDER].y) / 2.0,
            hip_y: (landmarks[LEFT_HIP].y + landmarks[RIGHT_HIP].y) / 2.0,
            left_ankle_y,
            right_ankle_y,
            ankle_velocity: self.ankles.update(left_ankle_y, right_ankle_y, timestamp_ms),
        }
    }
}
