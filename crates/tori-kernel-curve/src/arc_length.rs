//! Arc length on an ellipse: circumference and inverse arc-length lookup.
//!
//! The circumference is `2π·a·₂F₁(−½, ½; 1; 1 − (b/a)²)` with `a ≥ b`,
//! which is `4a·E(k)`. E is evaluated with the arithmetic-geometric mean,
//! which converges quadratically and needs no series truncation.

use std::f64::consts::{PI, TAU};

use crate::{CurveError, Result};

/// Speed of the ellipse parameterization `(major·cos t, minor·sin t)` at `t`.
pub fn arc_speed(major: f64, minor: f64, t: f64) -> f64 {
    let (s, c) = t.sin_cos();
    ((major * s).powi(2) + (minor * c).powi(2)).sqrt()
}

/// Total circumference of an ellipse with the given semi-axes.
///
/// Exact for the degenerate cases: a zero semi-axis gives four times the
/// other one, and two zero semi-axes give zero.
pub fn circumference(major: f64, minor: f64) -> f64 {
    let a = major.max(minor);
    let b = major.min(minor);
    if a == 0.0 {
        return 0.0;
    }
    if b == 0.0 {
        return 4.0 * a;
    }

    // E(k) = K(k)·(1 − Σ 2^(n−1)·c_n²), K(k) = π / (2·AGM(1, b/a))
    let mut an = a;
    let mut bn = b;
    let mut sum = 0.5 * (a * a - b * b);
    let mut weight = 1.0;
    for _ in 0..64 {
        let c = 0.5 * (an - bn);
        let next_a = 0.5 * (an + bn);
        let next_b = (an * bn).sqrt();
        sum += weight * c * c;
        weight *= 2.0;
        an = next_a;
        bn = next_b;
        if c.abs() <= 1e-15 * a {
            break;
        }
    }
    2.0 * PI / an * (a * a - sum)
}

/// Numeric solver for the parameter at a given arc length.
///
/// Finds θ with `∫₀^θ arc_speed = target` using Newton's method on the
/// bracket `[0, 2π]`. A step that leaves the bracket, or a zero speed,
/// falls back to bisection. The integral is evaluated with adaptive
/// Simpson quadrature.
#[derive(Debug, Clone)]
pub struct ArcLengthSolver {
    /// Iteration budget before reporting non-convergence. Default: 100
    pub max_iterations: u32,
    /// Stop when a step moves θ by less than this (radians). Default: 1e-10
    pub tolerance: f64,
    /// Absolute error target for each quadrature. Default: 1e-9
    pub quadrature_tolerance: f64,
}

impl Default for ArcLengthSolver {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            tolerance: 1e-10,
            quadrature_tolerance: 1e-9,
        }
    }
}

const MIN_QUADRATURE_DEPTH: u32 = 4;
const MAX_QUADRATURE_DEPTH: u32 = 48;

impl ArcLengthSolver {
    /// Arc length from parameter `from` to parameter `to`.
    pub fn arc_length(&self, major: f64, minor: f64, from: f64, to: f64) -> f64 {
        if to == from {
            return 0.0;
        }
        adaptive_simpson(
            &|t| arc_speed(major, minor, t),
            from,
            to,
            self.quadrature_tolerance,
        )
    }

    /// Solve for the parameter θ in `[0, 2π)` at arc length `target` from θ = 0.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonConvergence`] if the iteration budget runs out.
    pub fn solve(&self, major: f64, minor: f64, target: f64) -> Result<f64> {
        if target <= 0.0 {
            return Ok(0.0);
        }

        let mut lo = 0.0;
        let mut hi = TAU;
        let mut theta = 0.0;

        for _ in 0..self.max_iterations {
            let residual = self.arc_length(major, minor, 0.0, theta) - target;
            if residual > 0.0 {
                hi = theta;
            } else {
                lo = theta;
            }

            let speed = arc_speed(major, minor, theta);
            let mut next = if speed > f64::MIN_POSITIVE {
                theta - residual / speed
            } else {
                f64::NAN
            };
            // NaN fails both comparisons and bisects too
            if !(next > lo && next < hi) {
                next = 0.5 * (lo + hi);
            }

            if (next - theta).abs() < self.tolerance {
                return Ok(next);
            }
            theta = next;
        }

        Err(CurveError::NonConvergence {
            target,
            iterations: self.max_iterations,
        })
    }
}

fn adaptive_simpson<F: Fn(f64) -> f64>(f: &F, a: f64, b: f64, tol: f64) -> f64 {
    let fa = f(a);
    let fb = f(b);
    let m = 0.5 * (a + b);
    let fm = f(m);
    let whole = (b - a) / 6.0 * (fa + 4.0 * fm + fb);
    simpson_step(f, [a, b], [fa, fm, fb], whole, tol, 0)
}

fn simpson_step<F: Fn(f64) -> f64>(
    f: &F,
    [a, b]: [f64; 2],
    [fa, fm, fb]: [f64; 3],
    whole: f64,
    tol: f64,
    depth: u32,
) -> f64 {
    let m = 0.5 * (a + b);
    let flm = f(0.5 * (a + m));
    let frm = f(0.5 * (m + b));
    let left = (m - a) / 6.0 * (fa + 4.0 * flm + fm);
    let right = (b - m) / 6.0 * (fm + 4.0 * frm + fb);
    let delta = left + right - whole;

    // A minimum depth keeps symmetric integrands from terminating on a lucky first estimate
    if depth >= MAX_QUADRATURE_DEPTH
        || (depth >= MIN_QUADRATURE_DEPTH && delta.abs() <= 15.0 * tol)
    {
        return left + right + delta / 15.0;
    }
    simpson_step(f, [a, m], [fa, flm, fm], left, 0.5 * tol, depth + 1)
        + simpson_step(f, [m, b], [fm, frm, fb], right, 0.5 * tol, depth + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    /// Truncated Gauss series for ₂F₁(a, b; c; z), |z| < 1.
    fn hyp2f1(a: f64, b: f64, c: f64, z: f64) -> f64 {
        let mut term = 1.0;
        let mut sum = 1.0;
        for n in 0..2000 {
            let n = n as f64;
            term *= (a + n) * (b + n) / ((c + n) * (n + 1.0)) * z;
            sum += term;
            if term.abs() < 1e-17 {
                break;
            }
        }
        sum
    }

    #[test]
    fn test_circumference_circle() {
        assert_relative_eq!(circumference(5.0, 5.0), 10.0 * PI, max_relative = 1e-14);
    }

    #[test]
    fn test_circumference_degenerate_axis_is_exact() {
        assert_eq!(circumference(3.0, 0.0), 12.0);
        assert_eq!(circumference(0.0, 0.25), 1.0);
        assert_eq!(circumference(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_circumference_matches_hypergeometric_series() {
        for &(major, minor) in &[(2.3, 1.05), (0.2, 0.1), (1.0, 0.8), (1.0, 2.0)] {
            let a: f64 = f64::max(major, minor);
            let b: f64 = f64::min(major, minor);
            let series = 2.0 * PI * a * hyp2f1(-0.5, 0.5, 1.0, 1.0 - (b / a).powi(2));
            assert_relative_eq!(circumference(major, minor), series, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_circumference_matches_quadrature() {
        let solver = ArcLengthSolver::default();
        let c = circumference(2.3, 1.05);
        assert_relative_eq!(solver.arc_length(2.3, 1.05, 0.0, TAU), c, max_relative = 1e-9);
        // Known reference value
        assert_abs_diff_eq!(c, 10.893964281900, epsilon = 1e-9);
    }

    #[test]
    fn test_arc_speed_at_vertices() {
        assert_abs_diff_eq!(arc_speed(2.0, 1.0, 0.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(arc_speed(2.0, 1.0, PI / 2.0), 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_solve_quarter_arc() {
        // The ellipse is symmetric, so a quarter of the circumference ends at π/2
        let solver = ArcLengthSolver::default();
        let c = circumference(2.3, 1.05);
        let theta = solver.solve(2.3, 1.05, c / 4.0).unwrap();
        assert_abs_diff_eq!(theta, PI / 2.0, epsilon = 1e-8);
        let theta = solver.solve(2.3, 1.05, c / 2.0).unwrap();
        assert_abs_diff_eq!(theta, PI, epsilon = 1e-8);
    }

    #[test]
    fn test_solve_zero_target() {
        let solver = ArcLengthSolver::default();
        assert_eq!(solver.solve(2.3, 1.05, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_solve_flat_ellipse() {
        // minor = 0: the speed vanishes at θ = 0 and θ = π
        let solver = ArcLengthSolver::default();
        let theta = solver.solve(1.0, 0.0, 1.0).unwrap();
        assert_abs_diff_eq!(theta, PI / 2.0, epsilon = 1e-8);
    }

    #[test]
    fn test_solve_reports_non_convergence() {
        let solver = ArcLengthSolver {
            max_iterations: 1,
            ..Default::default()
        };
        let result = solver.solve(2.3, 1.05, 3.0);
        assert!(matches!(
            result,
            Err(CurveError::NonConvergence { iterations: 1, .. })
        ));
    }

    #[test]
    fn test_simpson_polynomial() {
        let integral = adaptive_simpson(&|x| x * x * x, 0.0, 2.0, 1e-12);
        assert_abs_diff_eq!(integral, 4.0, epsilon = 1e-12);
    }
}
