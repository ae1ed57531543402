//! Exponential smoothing - single-pole low-pass filter per signal
//!
//! Damps frame-to-frame jitter from the pose estimator. The first sample
//! passes through unchanged so there is no warm-up lag.

/// Smoothing factor applied to every tracked angle
pub const SMOOTHING_ALPHA: f32 = 0.3;

/// One exponentially smoothed signal
#[derive(Clone, Debug)]
pub struct ExpSmoother {
    alpha: f32,

    // State
    value: f32,
    initialized: bool,
}

impl ExpSmoother {
    pub fn new(alpha: f32) -> Self {
        Self {
            alpha,
            value: 0.0,
            initialized: false,
        }
    }

    /// Feed a raw sample, returns the smoothed value
    pub fn update(&mut self, raw: f32) -> f32 {
        if !self.initialized {
            self.value = raw;
            self.initialized = true;
            return raw;
        }

        self.value += self.alpha * (raw - self.value);
        self.value
    }

    /// Current smoothed value, `None` before the first sample
    pub fn value(&self) -> Option<f32> {
        self.initialized.then_some(self.value)
    }
}

impl Default for ExpSmoother {
    fn default() -> Self {
        Self::new(SMOOTHING_ALPHA)
    }
}

/// Smoothed knee and elbow angles (degrees)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LimbAngles {
    pub left_knee: f32,
    pub right_knee: f32,
    pub left_elbow: f32,
    pub right_elbow: f32,
}

/// Bank of smoothers for the four tracked limb angles
#[derive(Clone, Debug, Default)]
pub struct AngleSmoother {
    left_knee: ExpSmoother,
    right_knee: ExpSmoother,
    left_elbow: ExpSmoother,
    right_elbow: ExpSmoother,
}

impl AngleSmoother {
    pub fn new() -> Self {
        Self::default()
    }

    /// Smooth raw angles; each signal is filtered independently
    pub fn update(&mut self, raw: LimbAngles) -> LimbAngles {
        LimbAngles {
            left_knee: self.left_knee.update(raw.left_knee),
            right_knee: self.right_knee.update(raw.right_knee),
            left_elbow: self.left_elbow.update(raw.left_elbow),
            right_elbow: self.right_elbow.update(raw.right_elbow),
        }
    }
}
