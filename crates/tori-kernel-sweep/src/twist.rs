//! Twist profiles: extra cross-section rotation per path step.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// Shape of the twist along the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwistPolicy {
    /// Twist grows linearly around the path.
    #[default]
    Linear,
    /// Twist back and forth like a sine wave.
    Sine,
    /// Un-normalized cardinal sine envelope, `sin(x)/x`.
    Sinc,
    /// Normalized cardinal sine envelope, `sin(πx)/(πx)`.
    SincNormalized,
}

/// Un-normalized cardinal sine, `sin(x)/x` with `sinc(0) = 1`.
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x.sin() / x
    }
}

/// Normalized cardinal sine, `sin(πx)/(πx)` with value 1 at 0.
pub fn sinc_normalized(x: f64) -> f64 {
    sinc(PI * x)
}

/// Twist applied along a sweep.
///
/// A pure lookup: the same step always yields the same angle, which the
/// assembler relies on when comparing neighbouring steps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwistProfile {
    /// How the angle varies with the step.
    pub policy: TwistPolicy,
    /// Number of twists.
    pub count: u32,
    /// Angle of one twist (radians).
    pub amplitude: f64,
}

impl Default for TwistProfile {
    fn default() -> Self {
        Self {
            policy: TwistPolicy::Linear,
            count: 0,
            amplitude: PI,
        }
    }
}

impl TwistProfile {
    /// Create a profile.
    pub fn new(policy: TwistPolicy, count: u32, amplitude: f64) -> Self {
        Self {
            policy,
            count,
            amplitude,
        }
    }

    /// Twist angle at `step` out of `total` steps.
    pub fn angle(&self, step: usize, total: usize) -> f64 {
        let count = f64::from(self.count);
        let t = step as f64 / total as f64;
        match self.policy {
            TwistPolicy::Linear => self.amplitude * count * t,
            TwistPolicy::Sine => self.amplitude * (count * TAU * t).sin(),
            // sinc envelopes peak halfway round and ease toward the seam
            TwistPolicy::Sinc => self.amplitude * sinc(count * (2.0 * t - 1.0)),
            TwistPolicy::SincNormalized => {
                self.amplitude * sinc_normalized(count * (2.0 * t - 1.0))
            }
        }
    }

    /// Twist angles for every step `0..total`.
    pub fn angles(&self, total: usize) -> Vec<f64> {
        (0..total).map(|step| self.angle(step, total)).collect()
    }
}
