#![warn(missing_docs)]

//! Swept-surface assembly for the tori kernel.
//!
//! Sweeps a planar cross-section along a planar path:
//! 1. A [`TwistProfile`] gives every path step an extra rotation
//! 2. [`build_frames`] turns path samples and twist into per-step transforms
//! 3. [`sweep`] places the cross-section at every frame and stitches rings
//!    into quads, shifting the bridge by half a ring wherever consecutive
//!    twist angles differ by more than 90°

mod frame;
mod mesh;
mod sweep;
mod twist;

pub use frame::{build_frames, Frame, FrameOptions, PathSample, SweepPath, ThicknessMode};
pub use mesh::{Face, PolyMesh, TriangleMesh};
pub use sweep::{assemble, bridge_offset, sweep, CapFill, CrossSection, SweepOptions};
pub use twist::{sinc, sinc_normalized, TwistPolicy, TwistProfile};

use thiserror::Error;

/// Errors from frame building and sweep assembly.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// The cross-section has no vertices.
    #[error("cross-section is empty")]
    EmptyCrossSection,

    /// The path has no samples.
    #[error("path needs at least one sample")]
    TooFewSamples,

    /// The number of twist angles does not match the number of path samples.
    #[error("expected {expected} twist angles, got {actual}")]
    TwistCountMismatch {
        /// Path sample count.
        expected: usize,
        /// Twist angles supplied.
        actual: usize,
    },

    /// The number of frames does not match the number of path samples.
    #[error("expected {expected} frames, got {actual}")]
    FrameCountMismatch {
        /// Path sample count.
        expected: usize,
        /// Frames supplied.
        actual: usize,
    },
}

/// Result type for sweep operations.
pub type Result<T> = std::result::Result<T, SweepError>;
