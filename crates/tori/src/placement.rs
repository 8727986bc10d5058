//! World placement applied to a finished mesh.

use serde::{Deserialize, Serialize};
use tori_kernel_math::Transform;
use tori_kernel_sweep::PolyMesh;

use crate::error::{check_finite, Result};

/// Where the generated shape sits in the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    /// Translation `[x, y, z]`.
    pub translation: [f64; 3],
    /// Euler XYZ rotation in radians: X first, then Y, then Z.
    pub rotation: [f64; 3],
}

impl Placement {
    /// Placement at the origin with the given translation.
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            translation: [x, y, z],
            ..Default::default()
        }
    }

    /// Set the Euler XYZ rotation.
    pub fn with_rotation(mut self, x: f64, y: f64, z: f64) -> Self {
        self.rotation = [x, y, z];
        self
    }

    /// Whether applying this placement is a no-op.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }

    /// The placement as a single transform (rotate, then translate).
    pub fn transform(&self) -> Transform {
        let [tx, ty, tz] = self.translation;
        let [rx, ry, rz] = self.rotation;
        Transform::translation(tx, ty, tz).then(&Transform::euler_xyz(rx, ry, rz))
    }

    /// Move `mesh` into place.
    pub fn apply(&self, mesh: &mut PolyMesh) {
        if !self.is_identity() {
            mesh.transform(&self.transform());
        }
    }

    pub(crate) fn validate(&self) -> Result<()> {
        for &t in &self.translation {
            check_finite("placement.translation", t)?;
        }
        for &r in &self.rotation {
            check_finite("placement.rotation", r)?;
        }
        Ok(())
    }
}
