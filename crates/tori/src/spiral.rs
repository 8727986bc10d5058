//! Logarithmic spirals swept with a tapering circular cross-section.
//!
//! The path turns a quarter of the way round every `resolution` rings and
//! shrinks by `radius_scaling` per quarter turn, so with `radius_scaling = φ`
//! it traces the golden spiral.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use tori_kernel_curve::{Ellipse, SpacingPolicy};
use tori_kernel_math::Point3;
use tori_kernel_sweep::{
    sweep, CapFill, CrossSection, FrameOptions, PathSample, PolyMesh, SweepOptions, SweepPath,
};
use tracing::debug;

use crate::error::{check_count, check_finite, check_min, check_range, Result};
use crate::placement::Placement;

/// The golden ratio φ.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

const MAX_TURNS: usize = 256;
const MAX_RESOLUTION: usize = 16;
const MAX_CROSS_SEGMENTS: usize = 256;
const MIN_RADIUS: f64 = 0.01;

/// Parameters for [`log_spiral`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSpiralParams {
    /// Number of 90° turns.
    pub turns: usize,
    /// Rings per 90° turn.
    pub resolution: usize,
    /// Path radius at the first ring.
    pub initial_radius: f64,
    /// Factor the path radius shrinks by per 90° turn.
    pub radius_scaling: f64,
    /// Number of vertices per cross-section.
    pub cross_segments: usize,
    /// Cross-section twist per radian of path angle.
    pub cross_twist: f64,
    /// Cross-section radius as a fraction of the path radius.
    pub thickness_scaling: f64,
    /// How the two ends are closed.
    pub cap_fill: CapFill,
    /// World placement.
    pub placement: Placement,
}

impl Default for LogSpiralParams {
    fn default() -> Self {
        Self {
            turns: 4,
            resolution: 4,
            initial_radius: 1.0,
            radius_scaling: GOLDEN_RATIO,
            cross_segments: 4,
            cross_twist: 0.0,
            thickness_scaling: 1.0 / GOLDEN_RATIO,
            cap_fill: CapFill::None,
            placement: Placement::default(),
        }
    }
}

impl LogSpiralParams {
    /// Validate parameters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ToriError::InvalidParameter`] for the first field out of
    /// range.
    pub fn validate(&self) -> Result<()> {
        check_count("turns", self.turns, 1, MAX_TURNS)?;
        check_count("resolution", self.resolution, 1, MAX_RESOLUTION)?;
        check_min("initial_radius", self.initial_radius, MIN_RADIUS)?;
        check_min("radius_scaling", self.radius_scaling, MIN_RADIUS)?;
        check_count("cross_segments", self.cross_segments, 1, MAX_CROSS_SEGMENTS)?;
        check_finite("cross_twist", self.cross_twist)?;
        check_range("thickness_scaling", self.thickness_scaling, 0.0, 1.0)?;
        self.placement.validate()
    }

    /// Number of rings along the path.
    pub fn rings(&self) -> usize {
        self.turns * self.resolution + 1
    }

    /// Path angle at ring `u`.
    fn angle(&self, u: usize) -> f64 {
        u as f64 * FRAC_PI_2 / self.resolution as f64
    }

    /// Path sample at ring `u`, with the cross-section scale attached.
    fn sample(&self, u: usize) -> PathSample {
        let theta = self.angle(u);
        let s = self.radius_scaling;
        let r = self.initial_radius * s.powf(-(u as f64) / self.resolution as f64);

        // Derivative of s^(−2θ/π)·(cos θ, sin θ); the positive factor r₀ does
        // not change the direction
        let decay = s.powf(-2.0 * theta / PI);
        let (sin, cos) = theta.sin_cos();
        let ln_s = s.ln();
        let dx = -decay * (2.0 * cos * ln_s + PI * sin) / PI;
        let dy = decay * (-2.0 * sin * ln_s + PI * cos) / PI;

        PathSample::new(Point3::new(r * cos, r * sin, 0.0), f64::atan2(-dx, dy))
            .with_scale(r * self.thickness_scaling)
    }
}

/// Generate a logarithmic spiral.
///
/// The path starts at `(initial_radius, 0, 0)` and winds counter-clockwise
/// about +Z. Each cross-section is a circle of radius
/// `thickness_scaling` times the path radius there.
///
/// # Errors
///
/// Returns [`crate::ToriError::InvalidParameter`] if validation fails.
pub fn log_spiral(params: &LogSpiralParams) -> Result<PolyMesh> {
    params.validate()?;

    let unit = Ellipse::new(1.0, 1.0);
    let section = CrossSection::new(
        unit.parameterize_all(params.cross_segments, SpacingPolicy::Area)?
            .iter()
            .map(|p| unit.point_xz(p.param))
            .collect(),
    );

    let rings = params.rings();
    let path = SweepPath::open((0..rings).map(|u| params.sample(u)).collect());
    let twist: Vec<f64> = (0..rings)
        .map(|u| params.angle(u) * params.cross_twist)
        .collect();

    let options = SweepOptions {
        frame: FrameOptions::default(),
        caps: params.cap_fill,
    };
    let mut mesh = sweep(&section, &path, &twist, &options)?;
    params.placement.apply(&mut mesh);

    debug!(
        rings,
        cross_segments = params.cross_segments,
        faces = mesh.num_faces(),
        "generated log spiral"
    );
    Ok(mesh)
}

/// Parameters for [`golden_spiral`].
///
/// A golden spiral is a [`LogSpiralParams`] with the radius shrinking by φ
/// every quarter turn, no twist, and open ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoldenSpiralParams {
    /// Number of 90° turns.
    pub turns: usize,
    /// Rings per 90° turn.
    pub resolution: usize,
    /// Path radius at the first ring.
    pub initial_radius: f64,
    /// Number of vertices per cross-section.
    pub cross_segments: usize,
    /// Cross-section radius as a fraction of the path radius.
    pub thickness_scaling: f64,
    /// World placement.
    pub placement: Placement,
}

impl Default for GoldenSpiralParams {
    fn default() -> Self {
        Self {
            turns: 4,
            resolution: 4,
            initial_radius: 1.0,
            cross_segments: 4,
            thickness_scaling: 0.25,
            placement: Placement::default(),
        }
    }
}

impl From<&GoldenSpiralParams> for LogSpiralParams {
    fn from(golden: &GoldenSpiralParams) -> Self {
        Self {
            turns: golden.turns,
            resolution: golden.resolution,
            initial_radius: golden.initial_radius,
            radius_scaling: GOLDEN_RATIO,
            cross_segments: golden.cross_segments,
            cross_twist: 0.0,
            thickness_scaling: golden.thickness_scaling,
            cap_fill: CapFill::None,
            placement: golden.placement,
        }
    }
}

impl GoldenSpiralParams {
    /// Validate parameters.
    ///
    /// # Errors
    ///
    /// Same as [`LogSpiralParams::validate`].
    pub fn validate(&self) -> Result<()> {
        LogSpiralParams::from(self).validate()
    }
}

/// Generate a golden spiral.
///
/// # Errors
///
/// Returns [`crate::ToriError::InvalidParameter`] if validation fails.
pub fn golden_spiral(params: &GoldenSpiralParams) -> Result<PolyMesh> {
    log_spiral(&LogSpiralParams::from(params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToriError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_golden_ratio() {
        assert_abs_diff_eq!(GOLDEN_RATIO, (1.0 + 5f64.sqrt()) / 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_path_shrinks_by_scaling_per_quarter_turn() {
        let params = LogSpiralParams::default();
        let start = params.sample(0);
        let quarter = params.sample(params.resolution);
        assert_abs_diff_eq!(start.position.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(quarter.position.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(quarter.position.y, 1.0 / GOLDEN_RATIO, epsilon = 1e-12);
        assert_abs_diff_eq!(start.scale, 1.0 / GOLDEN_RATIO, epsilon = 1e-12);
    }

    #[test]
    fn test_normal_is_perpendicular_to_tangent() {
        let params = LogSpiralParams {
            resolution: 16,
            ..Default::default()
        };
        // Finite-difference tangent between the neighbours of each interior ring
        for u in 1..params.rings() - 1 {
            let prev = params.sample(u - 1).position;
            let next = params.sample(u + 1).position;
            let tangent = (next - prev).normalize();
            let n = params.sample(u).normal_angle;
            let dot = tangent.x * n.cos() + tangent.y * n.sin();
            assert!(dot.abs() < 0.01, "ring {u}: dot {dot}");
        }
    }

    #[test]
    fn test_normal_points_away_from_centre() {
        // For a shrinking spiral the outward normal leans away from the origin
        let params = LogSpiralParams::default();
        for u in 0..params.rings() {
            let sample = params.sample(u);
            let outward = sample.position.x * sample.normal_angle.cos()
                + sample.position.y * sample.normal_angle.sin();
            assert!(outward > 0.0, "ring {u}");
        }
    }

    #[test]
    fn test_unscaled_spiral_is_a_circle() {
        let params = LogSpiralParams {
            radius_scaling: 1.0,
            ..Default::default()
        };
        for u in 0..params.rings() {
            let sample = params.sample(u);
            assert_abs_diff_eq!(sample.position.coords.norm(), 1.0, epsilon = 1e-12);
            let theta = params.angle(u);
            assert!((sample.normal_angle - theta).sin().abs() < 1e-12);
            assert!((sample.normal_angle - theta).cos() > 0.0);
        }
    }

    #[test]
    fn test_golden_maps_to_log_spiral() {
        let golden = GoldenSpiralParams {
            initial_radius: 2.0,
            ..Default::default()
        };
        let log = LogSpiralParams::from(&golden);
        assert_eq!(log.radius_scaling, GOLDEN_RATIO);
        assert_eq!(log.cross_twist, 0.0);
        assert_eq!(log.cap_fill, CapFill::None);
        assert_eq!(log.thickness_scaling, 0.25);
        assert_eq!(log.initial_radius, 2.0);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let cases: Vec<(&str, LogSpiralParams)> = vec![
            (
                "turns",
                LogSpiralParams {
                    turns: 0,
                    ..Default::default()
                },
            ),
            (
                "resolution",
                LogSpiralParams {
                    resolution: 17,
                    ..Default::default()
                },
            ),
            (
                "initial_radius",
                LogSpiralParams {
                    initial_radius: 0.0,
                    ..Default::default()
                },
            ),
            (
                "radius_scaling",
                LogSpiralParams {
                    radius_scaling: f64::NAN,
                    ..Default::default()
                },
            ),
            (
                "cross_segments",
                LogSpiralParams {
                    cross_segments: 0,
                    ..Default::default()
                },
            ),
            (
                "cross_twist",
                LogSpiralParams {
                    cross_twist: f64::INFINITY,
                    ..Default::default()
                },
            ),
            (
                "thickness_scaling",
                LogSpiralParams {
                    thickness_scaling: 1.5,
                    ..Default::default()
                },
            ),
        ];
        for (field, params) in cases {
            match log_spiral(&params) {
                Err(ToriError::InvalidParameter { name, .. }) => assert_eq!(name, field),
                other => panic!("{field}: expected InvalidParameter, got {other:?}"),
            }
        }
    }
}
