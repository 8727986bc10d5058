#![warn(missing_docs)]

//! Planar curve parameterization for the tori kernel.
//!
//! Distributes N samples around an ellipse under one of several spacing
//! disciplines and reports, for each sample, the curve parameter that
//! places it and the angle of the outward normal there.
//!
//! # Example
//!
//! ```
//! use tori_kernel_curve::{Ellipse, SpacingPolicy};
//!
//! let ring = Ellipse::new(2.3, 1.05);
//! let params = ring.parameterize_all(48, SpacingPolicy::Area).unwrap();
//! assert_eq!(params.len(), 48);
//! assert_eq!(params[0].param, 0.0);
//! ```

#[cfg(feature = "arc-length")]
mod arc_length;
mod ellipse;
mod spacing;

#[cfg(feature = "arc-length")]
pub use arc_length::{arc_speed, circumference, ArcLengthSolver};
pub use ellipse::{parameterize, Ellipse};
pub use spacing::{ParamPoint, SpacingPolicy};

use thiserror::Error;

/// Errors from curve parameterization.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A step count of zero was requested.
    #[error("step count must be at least 1")]
    InvalidSteps,

    /// Semi-axes are negative or not finite.
    #[error("invalid semi-axes ({major}, {minor}): must be finite and non-negative")]
    InvalidAxes {
        /// Major semi-axis.
        major: f64,
        /// Minor semi-axis.
        minor: f64,
    },

    /// The arc-length root finder ran out of iterations.
    #[error("arc-length solve for s={target:.9} did not converge after {iterations} iterations")]
    NonConvergence {
        /// Arc length being solved for.
        target: f64,
        /// Iterations spent.
        iterations: u32,
    },
}

/// Result type for curve operations.
pub type Result<T> = std::result::Result<T, CurveError>;
