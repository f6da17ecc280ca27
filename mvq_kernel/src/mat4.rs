//! 4x4 homogeneous matrices.
//!
//! Storage is a flat column-major array: logical `(row, col)` lives at index
//! `col * 4 + row`. The upper-left 3x3 block is the linear part, indices
//! 12..=14 hold the translation and row 3 is the homogeneous row.

use std::ops::{Index, IndexMut, Mul};

use serde::{Deserialize, Serialize};

use crate::Real;

/// Converts degrees to radians.
pub const DEG2RAD: Real = std::f64::consts::PI / 180.0;

/// 4x4 matrix (column-major).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mat4 {
    pub m: [Real; 16],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    pub const ZERO: Self = Self { m: [0.0; 16] };

    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Builds a matrix from a column-major array.
    pub const fn from_cols_array(m: [Real; 16]) -> Self {
        Self { m }
    }

    pub const fn to_cols_array(&self) -> [Real; 16] {
        self.m
    }

    /// Full duplicate of `src`.
    pub fn copy(src: &Self) -> Self {
        *src
    }

    #[inline]
    const fn idx(row: usize, col: usize) -> usize {
        col * 4 + row
    }

    pub fn get(&self, row: usize, col: usize) -> Real {
        self.m[Self::idx(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Real) {
        self.m[Self::idx(row, col)] = value;
    }

    /// Standard product `self * rhs`, one output row at a time.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for row in 0..4 {
            let (a0, a1, a2, a3) = (
                self.get(row, 0),
                self.get(row, 1),
                self.get(row, 2),
                self.get(row, 3),
            );
            for col in 0..4 {
                out.set(
                    row,
                    col,
                    a0 * rhs.get(0, col)
                        + a1 * rhs.get(1, col)
                        + a2 * rhs.get(2, col)
                        + a3 * rhs.get(3, col),
                );
            }
        }
        out
    }

    /// Identity with its translation column set to `(dx, dy, dz)`.
    pub fn from_translation(dx: Real, dy: Real, dz: Real) -> Self {
        let mut t = Self::IDENTITY;
        t.m[12] = dx;
        t.m[13] = dy;
        t.m[14] = dz;
        t
    }

    /// Post-multiplies by a translation, moving in this matrix's local frame.
    pub fn translate(&self, dx: Real, dy: Real, dz: Real) -> Self {
        self.multiply(&Self::from_translation(dx, dy, dz))
    }

    /// Scales the three basis columns of the linear block by `s`.
    ///
    /// Translation and the homogeneous row are left as they are.
    pub fn scale_uniform(&self, s: Real) -> Self {
        let mut out = *self;
        for col in 0..3 {
            for row in 0..3 {
                out.set(row, col, self.get(row, col) * s);
            }
        }
        out
    }

    /// Single-axis rotation about X, angle in radians.
    pub fn from_rotation_x(angle: Real) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut r = Self::IDENTITY;
        r.set(1, 1, cos);
        r.set(1, 2, -sin);
        r.set(2, 1, sin);
        r.set(2, 2, cos);
        r
    }

    /// Single-axis rotation about Y, angle in radians.
    pub fn from_rotation_y(angle: Real) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut r = Self::IDENTITY;
        r.set(0, 0, cos);
        r.set(0, 2, sin);
        r.set(2, 0, -sin);
        r.set(2, 2, cos);
        r
    }

    /// Single-axis rotation about Z, angle in radians.
    pub fn from_rotation_z(angle: Real) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut r = Self::IDENTITY;
        r.set(0, 0, cos);
        r.set(0, 1, -sin);
        r.set(1, 0, sin);
        r.set(1, 1, cos);
        r
    }

    /// Rotates about exactly one axis, chosen by the first non-zero
    /// component of `degrees` in the order X, Y, Z.
    ///
    /// Only that component is applied; the others are ignored even when
    /// non-zero. An all-zero input returns the matrix unchanged.
    pub fn rotate_axis_priority(&self, degrees: [Real; 3]) -> Self {
        let [x, y, z] = degrees;
        let rotation = if x != 0.0 {
            Self::from_rotation_x(x * DEG2RAD)
        } else if y != 0.0 {
            Self::from_rotation_y(y * DEG2RAD)
        } else if z != 0.0 {
            Self::from_rotation_z(z * DEG2RAD)
        } else {
            return *self;
        };
        self.multiply(&rotation)
    }
}

impl Index<usize> for Mat4 {
    type Output = Real;

    fn index(&self, i: usize) -> &Real {
        &self.m[i]
    }
}

impl IndexMut<usize> for Mat4 {
    fn index_mut(&mut self, i: usize) -> &mut Real {
        &mut self.m[i]
    }
}

impl Mul for Mat4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}
