#![warn(missing_docs)]

//! Swept-surface mesh generation for elliptic tori and logarithmic spirals.
//!
//! Each shape family has a parameter struct with defaults and validation,
//! and an entry point that returns a [`PolyMesh`] of quads (plus cap faces
//! on spirals). Shapes can also be described by a versioned TOML
//! [`Config`].
//!
//! # Example
//!
//! ```
//! use tori::{log_spiral, CapFill, LogSpiralParams};
//!
//! let params = LogSpiralParams {
//!     cap_fill: CapFill::Fan,
//!     ..Default::default()
//! };
//! let mesh = log_spiral(&params)?;
//! assert_eq!(mesh.num_vertices(), 17 * 4 + 2);
//! # Ok::<(), tori::ToriError>(())
//! ```

pub mod config;
pub mod error;
pub mod placement;
pub mod spiral;
pub mod torus;

pub use config::{Config, ShapeConfig, CONFIG_VERSION};
pub use error::{Result, ToriError};
pub use placement::Placement;
pub use spiral::{
    golden_spiral, log_spiral, GoldenSpiralParams, LogSpiralParams, GOLDEN_RATIO,
};
pub use torus::{elliptic_torus, EllipticTorusParams};

pub use tori_kernel_curve::SpacingPolicy;
pub use tori_kernel_sweep::{
    CapFill, Face, PolyMesh, ThicknessMode, TriangleMesh, TwistPolicy,
};
