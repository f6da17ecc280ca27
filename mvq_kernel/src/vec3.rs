//! 3-component vector algebra.
//!
//! All operations follow IEEE-754 semantics: dividing by a zero component or
//! normalizing a zero-length vector yields infinities or NaN, which propagate
//! into the result untouched.

use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

use crate::mat4::Mat4;
use crate::Real;

/// 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3 {
    pub x: Real,
    pub y: Real,
    pub z: Real,
}

impl Vec3 {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: Real, y: Real, z: Real) -> Self {
        Self { x, y, z }
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    pub const fn to_array(self) -> [Real; 3] {
        [self.x, self.y, self.z]
    }

    /// Component-wise (Hadamard) product. Not the dot product.
    pub fn component_mul(self, rhs: Self) -> Self {
        Self::new(self.x * rhs.x, self.y * rhs.y, self.z * rhs.z)
    }

    /// Component-wise quotient.
    pub fn component_div(self, rhs: Self) -> Self {
        Self::new(self.x / rhs.x, self.y / rhs.y, self.z / rhs.z)
    }

    pub fn dot(self, rhs: Self) -> Real {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    pub fn length(self) -> Real {
        self.dot(self).sqrt()
    }

    /// Angle between two vectors in radians.
    ///
    /// The cosine is clamped to `[-1, 1]` to absorb round-off. A zero-length
    /// input makes the ratio `0/0`, so the result is NaN.
    pub fn angle(self, rhs: Self) -> Real {
        let cos = self.dot(rhs) / (self.length() * rhs.length());
        cos.clamp(-1.0, 1.0).acos()
    }

    pub fn scale(self, s: Real) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    /// Divides every component by `s`.
    pub fn div_scalar(self, s: Real) -> Self {
        Self::new(self.x / s, self.y / s, self.z / s)
    }

    pub fn normalize(self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// Applies the 3x3 linear block of `m`, ignoring translation.
    ///
    /// The vector is treated as a direction rather than a point.
    pub fn transform_linear(self, m: &Mat4) -> Self {
        Self::new(
            m[0] * self.x + m[4] * self.y + m[8] * self.z,
            m[1] * self.x + m[5] * self.y + m[9] * self.z,
            m[2] * self.x + m[6] * self.y + m[10] * self.z,
        )
    }

    /// Transforms every vector in `vs` in place by the linear block of `m`.
    pub fn transform_linear_slice(vs: &mut [Self], m: &Mat4) {
        for v in vs.iter_mut() {
            *v = v.transform_linear(m);
        }
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self + -rhs
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}
