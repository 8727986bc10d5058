//! Per-step frames that orient and size the cross-section along a planar path.

use serde::{Deserialize, Serialize};
use tori_kernel_math::{angle_between, Point3, Tolerance, Transform};

use crate::{Result, SweepError};

/// How the cross-section is sized around tight curvature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThicknessMode {
    /// Keep every cross-section the same size.
    #[default]
    EqualCrossSections,
    /// Stretch cross-sections radially to keep the tube wall a constant thickness.
    ConstantTube,
}

/// One sample of the sweep path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    /// Position on the path (in the XY plane).
    pub position: Point3,
    /// Direction of the path's outward normal, measured from +X about +Z.
    pub normal_angle: f64,
    /// Uniform scale applied to the cross-section before anything else.
    pub scale: f64,
}

impl PathSample {
    /// A sample with unit scale.
    pub fn new(position: Point3, normal_angle: f64) -> Self {
        Self {
            position,
            normal_angle,
            scale: 1.0,
        }
    }

    /// Set the uniform cross-section scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
}

/// An ordered sequence of path samples.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPath {
    /// Samples in sweep order.
    pub samples: Vec<PathSample>,
    /// Whether the last sample connects back to the first.
    pub closed: bool,
}

impl SweepPath {
    /// A path whose last sample connects back to the first (a ring).
    pub fn closed(samples: Vec<PathSample>) -> Self {
        Self {
            samples,
            closed: true,
        }
    }

    /// A path with two free ends (a spiral).
    pub fn open(samples: Vec<PathSample>) -> Self {
        Self {
            samples,
            closed: false,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the path has no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Indices of the neighbours of sample `i`, if they exist.
    fn neighbours(&self, i: usize) -> (Option<usize>, Option<usize>) {
        let n = self.samples.len();
        if self.closed {
            (Some((n + i - 1) % n), Some((i + 1) % n))
        } else {
            let prev = i.checked_sub(1);
            let next = (i + 1 < n).then_some(i + 1);
            (prev, next)
        }
    }
}

/// Options shared by every frame of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameOptions {
    /// Rotation of the cross-section about its own tangent axis before any twist.
    pub base_rotation: f64,
    /// Cross-section sizing policy.
    pub thickness: ThicknessMode,
}

/// Orientation and size of the cross-section at one path sample.
///
/// The cross-section is authored in the local XZ plane with the path tangent
/// along +Y and the outward direction along +X.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Path position the cross-section is centred on.
    pub position: Point3,
    /// Linear part: scale, twist, optional thickness stretch, then orientation.
    pub transform: Transform,
}

impl Frame {
    /// Map a cross-section vertex into world space.
    pub fn transform_point(&self, p: &Point3) -> Point3 {
        self.transform.apply_point(p) + self.position.coords
    }
}

/// Build one frame per path sample.
///
/// The transform of sample `v` is
/// `Rz(normal) · [Sx(1/sin α)] · Ry(base + twist[v]) · S(scale)`, where α is
/// half the angle between the edges meeting at `v`. The thickness
/// stretch is skipped where α is undefined: missing or coincident neighbours,
/// or `sin α ≈ 0`.
///
/// # Errors
///
/// Returns [`SweepError::TooFewSamples`] for an empty path and
/// [`SweepError::TwistCountMismatch`] if `twist` is not one angle per sample.
pub fn build_frames(
    path: &SweepPath,
    twist: &[f64],
    options: &FrameOptions,
) -> Result<Vec<Frame>> {
    if path.is_empty() {
        return Err(SweepError::TooFewSamples);
    }
    if twist.len() != path.len() {
        return Err(SweepError::TwistCountMismatch {
            expected: path.len(),
            actual: twist.len(),
        });
    }

    let frames = path
        .samples
        .iter()
        .zip(twist)
        .enumerate()
        .map(|(v, (sample, &twist_angle))| {
            let mut transform = Transform::rotation_y(options.base_rotation + twist_angle)
                .then(&Transform::uniform_scale(sample.scale));

            if options.thickness == ThicknessMode::ConstantTube {
                if let Some(stretch) = thickness_stretch(path, v) {
                    transform = Transform::scale(stretch, 1.0, 1.0).then(&transform);
                }
            }

            Frame {
                position: sample.position,
                transform: Transform::rotation_z(sample.normal_angle).then(&transform),
            }
        })
        .collect();

    Ok(frames)
}

/// Radial stretch `1/sin α` at sample `v`, or `None` where it is undefined.
fn thickness_stretch(path: &SweepPath, v: usize) -> Option<f64> {
    let (prev, next) = path.neighbours(v);
    let this = path.samples[v].position;
    let to_prev = this - path.samples[prev?].position;
    let to_next = this - path.samples[next?].position;

    let half_angle = angle_between(&to_prev, &to_next)? / 2.0;
    let sin = half_angle.sin();
    // Only a fully folded corner is skipped; a near-hairpin keeps its large stretch
    if Tolerance::DEFAULT.is_zero_angle(sin) {
        None
    } else {
        Some(1.0 / sin)
    }
}
