//! Error types for shape generation.

use thiserror::Error;
use tori_kernel_curve::CurveError;
use tori_kernel_sweep::SweepError;

/// Errors that can occur while configuring or generating a shape.
#[derive(Error, Debug)]
pub enum ToriError {
    /// A shape parameter is out of range or not a number.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Field name as it appears in the config.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// The config file was written for a different format version.
    #[error("unsupported config version {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version in the file.
        found: u32,
        /// Version this build reads.
        expected: u32,
    },

    /// The config file is not valid TOML for a shape.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Curve parameterization failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Sweep assembly failed.
    #[error(transparent)]
    Sweep(#[from] SweepError),
}

/// Result type for shape operations.
pub type Result<T> = std::result::Result<T, ToriError>;

pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> ToriError {
    ToriError::InvalidParameter {
        name,
        reason: reason.into(),
    }
}

/// Require `min <= value <= max`; NaN always fails.
pub(crate) fn check_range(name: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(invalid(name, format!("{value} is outside [{min}, {max}]")))
    }
}

/// Require a finite `value >= min`.
pub(crate) fn check_min(name: &'static str, value: f64, min: f64) -> Result<()> {
    if value.is_finite() && value >= min {
        Ok(())
    } else {
        Err(invalid(name, format!("{value} must be finite and at least {min}")))
    }
}

/// Require an integer in `[min, max]`.
pub(crate) fn check_count(name: &'static str, value: usize, min: usize, max: usize) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(invalid(name, format!("{value} is outside [{min}, {max}]")))
    }
}

/// Require a finite value.
pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, format!("{value} is not finite")))
    }
}
