//! Sweep assembly: place the cross-section at every frame and stitch rings.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tori_kernel_math::Point3;
use tracing::debug;

use crate::frame::{build_frames, Frame, FrameOptions, SweepPath};
use crate::mesh::{Face, PolyMesh};
use crate::{Result, SweepError};

/// A closed cross-section polyline in the local XZ plane.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossSection {
    /// Vertices in order; the last connects back to the first.
    pub vertices: Vec<Point3>,
}

impl CrossSection {
    /// Create a cross-section from its vertices.
    pub fn new(vertices: Vec<Point3>) -> Self {
        Self { vertices }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the cross-section has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// How the ends of an open sweep are closed.
///
/// Closed paths have no ends, so caps are ignored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapFill {
    /// Leave the ends open.
    #[default]
    None,
    /// One polygon per end covering the whole ring.
    Ngon,
    /// A triangle fan around a pole vertex at each end of the path.
    Fan,
}

/// Options for [`sweep`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SweepOptions {
    /// Frame construction options.
    pub frame: FrameOptions,
    /// End caps for open paths.
    pub caps: CapFill,
}

/// Index shift applied when bridging from a ring twisted by `from` to one
/// twisted by `to`.
///
/// Rings whose twist differs by more than a quarter turn are connected half
/// a ring apart, so the quads between them do not cross over.
pub fn bridge_offset(from: f64, to: f64, ustep: usize) -> usize {
    if (to - from).cos() < 0.0 {
        ustep / 2
    } else {
        0
    }
}

/// Sweep `section` along `path`, rotating it by `twist[v]` at sample `v`.
///
/// Vertex `u` of ring `v` lands at index `v·ustep + u` (shifted by one when
/// fan caps add a start pole). Body quads come between any caps: the start
/// cap first, the end cap last.
///
/// # Errors
///
/// Returns [`SweepError::EmptyCrossSection`], [`SweepError::TooFewSamples`],
/// or [`SweepError::TwistCountMismatch`] for malformed input.
pub fn sweep(
    section: &CrossSection,
    path: &SweepPath,
    twist: &[f64],
    options: &SweepOptions,
) -> Result<PolyMesh> {
    if section.is_empty() {
        return Err(SweepError::EmptyCrossSection);
    }
    let frames = build_frames(path, twist, &options.frame)?;
    assemble(section, path, &frames, twist, options.caps)
}

/// Assemble a mesh from prebuilt frames.
///
/// `twist` is still needed to pick the bridge offsets between rings.
///
/// # Errors
///
/// As [`sweep`], plus [`SweepError::FrameCountMismatch`] if `frames` is not
/// one frame per path sample.
pub fn assemble(
    section: &CrossSection,
    path: &SweepPath,
    frames: &[Frame],
    twist: &[f64],
    caps: CapFill,
) -> Result<PolyMesh> {
    if section.is_empty() {
        return Err(SweepError::EmptyCrossSection);
    }
    if path.is_empty() {
        return Err(SweepError::TooFewSamples);
    }
    let n = path.len();
    if frames.len() != n {
        return Err(SweepError::FrameCountMismatch {
            expected: n,
            actual: frames.len(),
        });
    }
    if twist.len() != n {
        return Err(SweepError::TwistCountMismatch {
            expected: n,
            actual: twist.len(),
        });
    }

    let caps = if path.closed { CapFill::None } else { caps };
    let us = section.len();
    let base = usize::from(caps == CapFill::Fan);
    let idx = |v: usize, u: usize| (base + v * us + u) as u32;

    // Each ring gets fresh positions; the base cross-section is never mutated
    let rings: Vec<Vec<Point3>> = frames
        .par_iter()
        .map(|frame| {
            section
                .vertices
                .iter()
                .map(|p| frame.transform_point(p))
                .collect()
        })
        .collect();

    let mut vertices = Vec::with_capacity(n * us + 2 * base);
    if caps == CapFill::Fan {
        vertices.push(path.samples[0].position);
    }
    vertices.extend(rings.into_iter().flatten());
    if caps == CapFill::Fan {
        vertices.push(path.samples[n - 1].position);
    }

    let segments = if path.closed { n } else { n - 1 };
    let mut faces = Vec::with_capacity(segments * us + 2 * us);

    match caps {
        CapFill::None => {}
        CapFill::Ngon => faces.push(Face::Polygon((0..us).map(|u| idx(0, u)).collect())),
        CapFill::Fan => {
            for u in 0..us {
                faces.push(Face::Triangle([0, idx(0, u), idx(0, (u + 1) % us)]));
            }
        }
    }

    for v in 0..segments {
        let nv = (v + 1) % n;
        let offset = bridge_offset(twist[v], twist[nv], us);
        for u in 0..us {
            let ub = (u + offset) % us;
            faces.push(Face::Quad([
                idx(v, u),
                idx(nv, ub),
                idx(nv, (ub + 1) % us),
                idx(v, (u + 1) % us),
            ]));
        }
    }

    let last = n - 1;
    match caps {
        CapFill::None => {}
        CapFill::Ngon => {
            faces.push(Face::Polygon((0..us).rev().map(|u| idx(last, u)).collect()));
        }
        CapFill::Fan => {
            let pole = (vertices.len() - 1) as u32;
            for u in 0..us {
                faces.push(Face::Triangle([
                    pole,
                    idx(last, us - 1 - u),
                    idx(last, us - 1 - (u + 1) % us),
                ]));
            }
        }
    }

    debug!(
        vertices = vertices.len(),
        faces = faces.len(),
        closed = path.closed,
        ?caps,
        "swept cross-section"
    );

    Ok(PolyMesh { vertices, faces })
}
