//! Elliptic torus: an elliptic cross-section swept around an elliptic ring.

use std::f64::consts::{FRAC_PI_2, PI};

use serde::{Deserialize, Serialize};
use tori_kernel_curve::{Ellipse, SpacingPolicy};
use tori_kernel_sweep::{
    sweep, CapFill, CrossSection, FrameOptions, PathSample, PolyMesh, SweepOptions, SweepPath,
    ThicknessMode, TwistPolicy, TwistProfile,
};
use tracing::debug;

use crate::error::{check_count, check_min, check_range, Result};
use crate::placement::Placement;

const MAX_AXIS: f64 = 100.0;
const MIN_STEPS: usize = 4;
const MAX_STEPS: usize = 1024;
const MAX_TWISTS: u32 = 256;

/// Parameters for [`elliptic_torus`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EllipticTorusParams {
    /// Ring semi-axes `[major, minor]`, along X and Y.
    pub ring_axes: [f64; 2],
    /// Number of cross-sections around the ring.
    pub ring_steps: usize,
    /// How cross-sections are spaced around the ring.
    pub ring_spacing: SpacingPolicy,
    /// Cross-section semi-axes `[major, minor]`, outward and up.
    pub cross_axes: [f64; 2],
    /// Number of vertices per cross-section.
    pub cross_steps: usize,
    /// How vertices are spaced around the cross-section.
    pub cross_spacing: SpacingPolicy,
    /// Twist profile shape.
    pub twist_policy: TwistPolicy,
    /// Number of twists around the ring.
    pub twist_count: u32,
    /// Angle of one twist (radians).
    pub twist_amplitude: f64,
    /// Rotation of every cross-section before twisting (radians).
    pub initial_rotation: f64,
    /// Cross-section sizing.
    pub thickness: ThicknessMode,
    /// World placement.
    pub placement: Placement,
}

impl Default for EllipticTorusParams {
    fn default() -> Self {
        Self {
            ring_axes: [2.3, 1.05],
            ring_steps: 48,
            ring_spacing: SpacingPolicy::Area,
            cross_axes: [0.2, 0.1],
            cross_steps: 12,
            cross_spacing: SpacingPolicy::Area,
            twist_policy: TwistPolicy::Linear,
            twist_count: 0,
            twist_amplitude: PI,
            initial_rotation: 0.0,
            thickness: ThicknessMode::EqualCrossSections,
            placement: Placement::default(),
        }
    }
}

impl EllipticTorusParams {
    /// Validate parameters.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ToriError::InvalidParameter`] for the first field out of
    /// range.
    pub fn validate(&self) -> Result<()> {
        check_range("ring_axes[0]", self.ring_axes[0], 0.0, MAX_AXIS)?;
        check_range("ring_axes[1]", self.ring_axes[1], 0.0, MAX_AXIS)?;
        check_count("ring_steps", self.ring_steps, MIN_STEPS, MAX_STEPS)?;
        check_range("cross_axes[0]", self.cross_axes[0], 0.0, MAX_AXIS)?;
        check_range("cross_axes[1]", self.cross_axes[1], 0.0, MAX_AXIS)?;
        check_count("cross_steps", self.cross_steps, MIN_STEPS, MAX_STEPS)?;
        check_count(
            "twist_count",
            self.twist_count as usize,
            0,
            MAX_TWISTS as usize,
        )?;
        check_min("twist_amplitude", self.twist_amplitude, 0.0)?;
        check_range(
            "initial_rotation",
            self.initial_rotation,
            -FRAC_PI_2,
            FRAC_PI_2,
        )?;
        self.placement.validate()
    }

    /// The twist profile these parameters describe.
    pub fn twist(&self) -> TwistProfile {
        TwistProfile::new(self.twist_policy, self.twist_count, self.twist_amplitude)
    }
}

/// Generate an elliptic torus.
///
/// The ring lies in the XY plane centred on the origin. Ring `v` holds
/// vertices `v·cross_steps .. (v+1)·cross_steps`, and every face is a quad.
///
/// # Errors
///
/// Returns [`crate::ToriError::InvalidParameter`] if validation fails.
///
/// # Example
///
/// ```
/// use tori::{elliptic_torus, EllipticTorusParams};
///
/// let mesh = elliptic_torus(&EllipticTorusParams::default())?;
/// assert_eq!(mesh.num_vertices(), 48 * 12);
/// assert_eq!(mesh.num_faces(), 48 * 12);
/// # Ok::<(), tori::ToriError>(())
/// ```
pub fn elliptic_torus(params: &EllipticTorusParams) -> Result<PolyMesh> {
    params.validate()?;

    let cross = Ellipse::new(params.cross_axes[0], params.cross_axes[1]);
    let section = CrossSection::new(
        cross
            .parameterize_all(params.cross_steps, params.cross_spacing)?
            .iter()
            .map(|p| cross.point_xz(p.param))
            .collect(),
    );

    let ring = Ellipse::new(params.ring_axes[0], params.ring_axes[1]);
    let path = SweepPath::closed(
        ring.parameterize_all(params.ring_steps, params.ring_spacing)?
            .iter()
            .map(|p| PathSample::new(ring.point_xy(p.param), p.normal_angle))
            .collect(),
    );

    let twist = params.twist().angles(params.ring_steps);
    let options = SweepOptions {
        frame: FrameOptions {
            base_rotation: params.initial_rotation,
            thickness: params.thickness,
        },
        caps: CapFill::None,
    };

    let mut mesh = sweep(&section, &path, &twist, &options)?;
    params.placement.apply(&mut mesh);

    debug!(
        ring_steps = params.ring_steps,
        cross_steps = params.cross_steps,
        faces = mesh.num_faces(),
        "generated elliptic torus"
    );
    Ok(mesh)
}
