//! Ellipse sampling under the spacing policies.

use std::f64::consts::TAU;

use tori_kernel_math::{wrap_angle, Point2, Point3};
#[cfg(feature = "arc-length")]
use tracing::warn;

#[cfg(feature = "arc-length")]
use crate::arc_length::{circumference, ArcLengthSolver};
use crate::{CurveError, ParamPoint, Result, SpacingPolicy};

/// An axis-aligned ellipse centred at the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Semi-axis along X.
    pub major: f64,
    /// Semi-axis along the second in-plane axis.
    pub minor: f64,
}

impl Ellipse {
    /// Create an ellipse from its semi-axes.
    pub fn new(major: f64, minor: f64) -> Self {
        Self { major, minor }
    }

    /// Whether both semi-axes are equal.
    pub fn is_circle(&self) -> bool {
        self.major == self.minor
    }

    /// Point at parameter `t` in the curve's own plane.
    pub fn point(&self, t: f64) -> Point2 {
        Point2::new(self.major * t.cos(), self.minor * t.sin())
    }

    /// Point at parameter `t` lying in the XY plane (used for sweep paths).
    pub fn point_xy(&self, t: f64) -> Point3 {
        let p = self.point(t);
        Point3::new(p.x, p.y, 0.0)
    }

    /// Point at parameter `t` lying in the XZ plane (used for cross-sections).
    pub fn point_xz(&self, t: f64) -> Point3 {
        let p = self.point(t);
        Point3::new(p.x, 0.0, p.y)
    }

    /// Direction of the outward normal at parameter `t`.
    pub fn normal_angle(&self, t: f64) -> f64 {
        wrap_angle(f64::atan2(self.major * t.sin(), self.minor * t.cos()))
    }

    /// Sample `index` of `steps` under `policy`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidSteps`] for `steps == 0` and
    /// [`CurveError::InvalidAxes`] for negative or non-finite semi-axes.
    pub fn parameterize(
        &self,
        index: usize,
        steps: usize,
        policy: SpacingPolicy,
    ) -> Result<ParamPoint> {
        self.check(steps)?;
        Ok(self.sample(index, steps, policy))
    }

    /// All `steps` samples under `policy`, in index order.
    ///
    /// # Errors
    ///
    /// Same as [`Ellipse::parameterize`].
    pub fn parameterize_all(&self, steps: usize, policy: SpacingPolicy) -> Result<Vec<ParamPoint>> {
        self.check(steps)?;
        Ok((0..steps)
            .map(|index| self.sample(index, steps, policy))
            .collect())
    }

    /// Like [`Ellipse::parameterize`], with a caller-configured arc-length solver.
    ///
    /// # Errors
    ///
    /// Same as [`Ellipse::parameterize`]. Solver non-convergence is not an
    /// error: that index falls back to equal-area spacing.
    #[cfg(feature = "arc-length")]
    pub fn parameterize_with(
        &self,
        index: usize,
        steps: usize,
        policy: SpacingPolicy,
        solver: &ArcLengthSolver,
    ) -> Result<ParamPoint> {
        self.check(steps)?;
        Ok(self.sample_with(index, steps, policy, solver))
    }

    /// Like [`Ellipse::parameterize_all`], with a caller-configured arc-length solver.
    ///
    /// # Errors
    ///
    /// Same as [`Ellipse::parameterize`].
    #[cfg(feature = "arc-length")]
    pub fn parameterize_all_with(
        &self,
        steps: usize,
        policy: SpacingPolicy,
        solver: &ArcLengthSolver,
    ) -> Result<Vec<ParamPoint>> {
        self.check(steps)?;
        Ok((0..steps)
            .map(|index| self.sample_with(index, steps, policy, solver))
            .collect())
    }

    fn check(&self, steps: usize) -> Result<()> {
        if steps == 0 {
            return Err(CurveError::InvalidSteps);
        }
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if !valid(self.major) || !valid(self.minor) {
            return Err(CurveError::InvalidAxes {
                major: self.major,
                minor: self.minor,
            });
        }
        Ok(())
    }

    fn sample(&self, index: usize, steps: usize, policy: SpacingPolicy) -> ParamPoint {
        if index == 0 {
            return ParamPoint::ORIGIN;
        }

        // Every policy agrees on a circle, and the non-area ones are ill-conditioned near it
        let policy = if self.is_circle() {
            SpacingPolicy::Area
        } else {
            policy
        };

        let (a, b) = (self.major, self.minor);
        let step_angle = TAU * index as f64 / steps as f64;

        match policy {
            SpacingPolicy::Area => self.area_sample(step_angle),
            SpacingPolicy::EquiangularNormal => {
                let param = f64::atan2(b * step_angle.sin(), a * step_angle.cos());
                ParamPoint::new(wrap_angle(param), step_angle)
            }
            SpacingPolicy::EquiangularRadius => {
                let param = wrap_angle(f64::atan2(a * step_angle.sin(), b * step_angle.cos()));
                ParamPoint::new(param, self.normal_angle(param))
            }
            #[cfg(feature = "arc-length")]
            SpacingPolicy::ArcLength => {
                self.arc_length_sample(index, steps, &ArcLengthSolver::default())
            }
        }
    }

    #[cfg(feature = "arc-length")]
    fn sample_with(
        &self,
        index: usize,
        steps: usize,
        policy: SpacingPolicy,
        solver: &ArcLengthSolver,
    ) -> ParamPoint {
        match policy {
            SpacingPolicy::ArcLength if index != 0 && !self.is_circle() => {
                self.arc_length_sample(index, steps, solver)
            }
            _ => self.sample(index, steps, policy),
        }
    }

    #[cfg(feature = "arc-length")]
    fn arc_length_sample(
        &self,
        index: usize,
        steps: usize,
        solver: &ArcLengthSolver,
    ) -> ParamPoint {
        let (a, b) = (self.major, self.minor);
        let target = circumference(a, b) * index as f64 / steps as f64;
        match solver.solve(a, b, target) {
            Ok(theta) => {
                let param = wrap_angle(theta);
                ParamPoint::new(param, self.normal_angle(param))
            }
            Err(err) => {
                warn!(index, steps, %err, "falling back to equal-area spacing");
                self.area_sample(TAU * index as f64 / steps as f64)
            }
        }
    }

    fn area_sample(&self, param: f64) -> ParamPoint {
        ParamPoint::new(param, self.normal_angle(param))
    }
}

/// Sample `index` of `steps` on the ellipse with semi-axes `(major, minor)`.
///
/// Shorthand for [`Ellipse::parameterize`].
///
/// # Errors
///
/// Same as [`Ellipse::parameterize`].
pub fn parameterize(
    major: f64,
    minor: f64,
    index: usize,
    steps: usize,
    policy: SpacingPolicy,
) -> Result<ParamPoint> {
    Ellipse::new(major, minor).parameterize(index, steps, policy)
}
