//! Quaternion algebra.
//!
//! A quaternion only represents a rotation when it has unit length, and
//! nothing here normalizes on the caller's behalf.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::vec3::Vec3;
use crate::Real;

/// Quaternion with imaginary part `(x, y, z)` and real part `w`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self { x, y, z, w }
    }

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn to_array(self) -> [Real; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Imaginary part as a vector.
    pub const fn imaginary(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Literal component subtraction over all four components.
    pub fn subtract_componentwise(self, rhs: Self) -> Self {
        Self::new(
            self.x - rhs.x,
            self.y - rhs.y,
            self.z - rhs.z,
            self.w - rhs.w,
        )
    }

    /// Quaternion product.
    ///
    /// ```text
    /// x = ax*bw + aw*bx + az*by - ay*bz
    /// y = ay*bw - az*bx + aw*by + ax*bz
    /// z = az*bw + ay*bx - ax*by + aw*bz
    /// w = aw*bw - ax*bx - ay*by - az*bz
    /// ```
    pub fn multiply(self, b: Self) -> Self {
        let a = self;
        Self::new(
            a.x * b.w + a.w * b.x + a.z * b.y - a.y * b.z,
            a.y * b.w - a.z * b.x + a.w * b.y + a.x * b.z,
            a.z * b.w + a.y * b.x - a.x * b.y + a.w * b.z,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    pub fn length(self) -> Real {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Divides all four components by the length. Zero input yields NaN.
    pub fn normalize(self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// Overwrites the imaginary part and keeps `w`.
    ///
    /// The components are assigned as given; no axis-angle construction or
    /// degree conversion takes place.
    pub fn set_imaginary(self, x: Real, y: Real, z: Real) -> Self {
        Self::new(x, y, z, self.w)
    }
}

impl Add for Quat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.x + rhs.x,
            self.y + rhs.y,
            self.z + rhs.z,
            self.w + rhs.w,
        )
    }
}

impl Sub for Quat {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract_componentwise(rhs)
    }
}

impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_times_identity() {
        assert_eq!(Quat::identity() * Quat::identity(), Quat::identity());
    }

    #[test]
    fn identity_is_two_sided() {
        let q = Quat::new(0.1, -0.2, 0.3, 0.9);
        assert_eq!(Quat::identity().multiply(q), q);
        assert_eq!(q.multiply(Quat::identity()), q);
    }

    #[test]
    fn multiply_follows_component_formulas() {
        let i = Quat::new(1.0, 0.0, 0.0, 0.0);
        let j = Quat::new(0.0, 1.0, 0.0, 0.0);
        // x = ax*bw + aw*bx + az*by - ay*bz etc. with a = i, b = j.
        assert_eq!(i * j, Quat::new(0.0, 0.0, -1.0, 0.0));
        assert_eq!(j * i, Quat::new(0.0, 0.0, 1.0, 0.0));
    }

    #[test]
    fn subtract_is_literal() {
        let a = Quat::new(1.0, 2.0, 3.0, 4.0);
        let b = Quat::new(0.5, 0.5, 0.5, 0.5);
        assert_eq!(a - b, Quat::new(0.5, 1.5, 2.5, 3.5));
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn normalize_gives_unit_length() {
        let q = Quat::new(1.0, 2.0, 2.0, 4.0).normalize();
        assert!((q.length() - 1.0).abs() < 1e-12);
        assert_eq!(q, Quat::new(0.2, 0.4, 0.4, 0.8));
    }

    #[test]
    fn normalize_zero_is_nan() {
        let q = Quat::zero().normalize();
        assert!(q.w.is_nan());
    }

    #[test]
    fn set_imaginary_keeps_w() {
        let q = Quat::new(9.0, 9.0, 9.0, 0.5).set_imaginary(90.0, 0.0, 45.0);
        assert_eq!(q, Quat::new(90.0, 0.0, 45.0, 0.5));
        assert_eq!(q.imaginary(), Vec3::new(90.0, 0.0, 45.0));
    }
}
