#![warn(missing_docs)]

//! Math types for the tori swept-surface kernel.
//!
//! Thin wrappers around nalgebra providing the types the kernel sweeps
//! with: points, vectors, 4x4 transforms, angle helpers and tolerance
//! constants.

use std::f64::consts::TAU;

use nalgebra::{Matrix4, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point in the plane of a 2D curve.
pub type Point2 = nalgebra::Point2<f64>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Uniform scale by `s` on every axis.
    pub fn uniform_scale(s: f64) -> Self {
        Self::scale(s, s, s)
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Rotation from XYZ Euler angles (radians).
    ///
    /// X is applied first, then Y, then Z: `Rz * Ry * Rx`.
    pub fn euler_xyz(x: f64, y: f64, z: f64) -> Self {
        Self::rotation_z(z)
            .then(&Self::rotation_y(y))
            .then(&Self::rotation_x(x))
    }

    /// Compose: `self` then `other` (self * other).
    ///
    /// The resulting transform applies `other` first, then `self`.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation, applies rotation/scale).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Wrap an angle into `[0, 2π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid rounds tiny negative inputs up to exactly TAU
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Unsigned angle between two vectors in `[0, π]`.
///
/// Returns `None` when either vector has zero length.
pub fn angle_between(a: &Vec3, b: &Vec3) -> Option<f64> {
    let (la, lb) = (a.norm(), b.norm());
    if Tolerance::DEFAULT.is_zero(la) || Tolerance::DEFAULT.is_zero(lb) {
        return None;
    }
    Some((a.dot(b) / (la * lb)).clamp(-1.0, 1.0).acos())
}

/// Tolerance constants for numeric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
    /// Angular tolerance in radians.
    pub angular: f64,
}

impl Tolerance {
    /// Default kernel tolerances (1e-12 linear, 1e-12 rad angular).
    pub const DEFAULT: Self = Self {
        linear: 1e-12,
        angular: 1e-12,
    };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }

    /// Check if an angle (or its sine) is effectively zero.
    pub fn is_zero_angle(&self, a: f64) -> bool {
        a.abs() < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let result = t.apply_point(&Point3::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(result.x, 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.y, 22.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.z, 33.0, epsilon = 1e-12);
    }

    #[test]
    fn test_translation_ignored_by_apply_vec() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let v = t.apply_vec(&Vec3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(v.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_z_90() {
        let t = Transform::rotation_z(FRAC_PI_2);
        let result = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert_abs_diff_eq!(result.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_y_takes_z_to_x() {
        let t = Transform::rotation_y(FRAC_PI_2);
        let result = t.apply_point(&Point3::new(0.0, 0.0, 1.0));
        assert_abs_diff_eq!(result.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scale() {
        let t = Transform::scale(2.0, 3.0, 4.0);
        let result = t.apply_point(&Point3::new(1.0, 1.0, 1.0));
        assert_abs_diff_eq!(result.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.y, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.z, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_compose_applies_right_operand_first() {
        // translate then scale: (0,0,0) -> (1,0,0) -> (2,0,0)
        let composed = Transform::uniform_scale(2.0).then(&Transform::translation(1.0, 0.0, 0.0));
        let result = composed.apply_point(&Point3::origin());
        assert_abs_diff_eq!(result.x, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_euler_xyz_order() {
        // X first: (0,1,0) -> (0,0,1); then Z has no effect on a Z vector.
        let t = Transform::euler_xyz(FRAC_PI_2, 0.0, FRAC_PI_2);
        let result = t.apply_point(&Point3::new(0.0, 1.0, 0.0));
        assert_abs_diff_eq!(result.x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(result.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_angle() {
        assert_abs_diff_eq!(wrap_angle(-FRAC_PI_2), 1.5 * PI, epsilon = 1e-12);
        assert_abs_diff_eq!(wrap_angle(3.0 * PI), PI, epsilon = 1e-12);
        assert_eq!(wrap_angle(-1e-18), 0.0);
        assert_eq!(wrap_angle(0.0), 0.0);
    }

    #[test]
    fn test_angle_between() {
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 2.0, 0.0);
        assert_abs_diff_eq!(angle_between(&a, &b).unwrap(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(angle_between(&a, &(-a)).unwrap(), PI, epsilon = 1e-12);
        assert!(angle_between(&a, &Vec3::zeros()).is_none());
        assert!(angle_between(&Vec3::new(1e-13, 0.0, 0.0), &a).is_none());
    }

    #[test]
    fn test_tolerance() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.is_zero(1e-13));
        assert!(!tol.is_zero(1e-6));
        assert!(tol.is_zero_angle(PI.sin()));
    }
}
