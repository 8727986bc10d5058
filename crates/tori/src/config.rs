//! Versioned shape configuration, as handed over by the host.
//!
//! ```toml
//! version = 1
//! shape = "elliptic_torus"
//! ring_axes = [2.3, 1.05]
//! twist_count = 1
//! twist_policy = "sine"
//!
//! [placement]
//! translation = [0.0, 0.0, 1.0]
//! ```
//!
//! Fields left out take their defaults.

use serde::{Deserialize, Serialize};
use tori_kernel_sweep::PolyMesh;
use tracing::debug;

use crate::error::{Result, ToriError};
use crate::spiral::{golden_spiral, log_spiral, GoldenSpiralParams, LogSpiralParams};
use crate::torus::{elliptic_torus, EllipticTorusParams};

/// The config format version this build reads.
pub const CONFIG_VERSION: u32 = 1;

/// Parameters for one shape family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeConfig {
    /// See [`elliptic_torus`].
    EllipticTorus(EllipticTorusParams),
    /// See [`log_spiral`].
    LogSpiral(LogSpiralParams),
    /// See [`golden_spiral`].
    GoldenSpiral(GoldenSpiralParams),
}

impl ShapeConfig {
    /// The `shape` tag of this variant.
    pub fn name(&self) -> &'static str {
        match self {
            ShapeConfig::EllipticTorus(_) => "elliptic_torus",
            ShapeConfig::LogSpiral(_) => "log_spiral",
            ShapeConfig::GoldenSpiral(_) => "golden_spiral",
        }
    }

    /// Validate the parameters of the selected shape.
    pub fn validate(&self) -> Result<()> {
        match self {
            ShapeConfig::EllipticTorus(p) => p.validate(),
            ShapeConfig::LogSpiral(p) => p.validate(),
            ShapeConfig::GoldenSpiral(p) => p.validate(),
        }
    }

    /// Generate the selected shape.
    pub fn generate(&self) -> Result<PolyMesh> {
        match self {
            ShapeConfig::EllipticTorus(p) => elliptic_torus(p),
            ShapeConfig::LogSpiral(p) => log_spiral(p),
            ShapeConfig::GoldenSpiral(p) => golden_spiral(p),
        }
    }
}

impl Default for ShapeConfig {
    fn default() -> Self {
        ShapeConfig::EllipticTorus(EllipticTorusParams::default())
    }
}

/// A versioned shape configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Format version; must be [`CONFIG_VERSION`].
    pub version: u32,
    /// The shape and its parameters.
    #[serde(flatten)]
    pub shape: ShapeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            shape: ShapeConfig::default(),
        }
    }
}

impl Config {
    /// Wrap a shape in a config of the current version.
    pub fn new(shape: ShapeConfig) -> Self {
        Self {
            version: CONFIG_VERSION,
            shape,
        }
    }

    /// Parse and validate a TOML config.
    ///
    /// # Errors
    ///
    /// Returns [`ToriError::Config`] for malformed TOML or an unknown shape,
    /// [`ToriError::UnsupportedVersion`] for another format version, and
    /// [`ToriError::InvalidParameter`] for out-of-range values.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        debug!(shape = config.shape.name(), "loaded config");
        Ok(config)
    }

    /// Check the version and the shape parameters.
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(ToriError::UnsupportedVersion {
                found: self.version,
                expected: CONFIG_VERSION,
            });
        }
        self.shape.validate()
    }

    /// Generate the configured shape.
    pub fn generate(&self) -> Result<PolyMesh> {
        self.validate()?;
        self.shape.generate()
    }
}
