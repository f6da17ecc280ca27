//! Conversions between operand representations.
//!
//! - Quaternion to rotation matrix and to rotated basis vectors
//! - Matrix to translation vector
//! - Matrix to quaternion (not available; fails explicitly)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{mat4::Mat4, quat::Quat, vec3::Vec3};

/// Basis axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
            Axis::Z => write!(f, "z"),
        }
    }
}

/// The three basis vectors rotated by a quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisVectors {
    pub x: Vec3,
    pub y: Vec3,
    pub z: Vec3,
}

impl Quat {
    /// Rotation matrix for this quaternion, with zero translation and an
    /// identity homogeneous row.
    ///
    /// The quaternion is used as-is. Normalize first if a proper rotation
    /// is required.
    pub fn to_matrix(self) -> Mat4 {
        let AxisVectors { x, y, z } = self.to_axis_vectors();
        Mat4::from_cols_array([
            x.x, x.y, x.z, 0.0, //
            y.x, y.y, y.z, 0.0, //
            z.x, z.y, z.z, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ])
    }

    /// All three rotated basis vectors (the columns of the linear block of
    /// [`Quat::to_matrix`]).
    pub fn to_axis_vectors(self) -> AxisVectors {
        AxisVectors {
            x: self.axis_vector(Axis::X),
            y: self.axis_vector(Axis::Y),
            z: self.axis_vector(Axis::Z),
        }
    }

    /// A single rotated basis vector.
    pub fn axis_vector(self, axis: Axis) -> Vec3 {
        let Quat { x, y, z, w } = self;
        match axis {
            Axis::X => Vec3::new(
                1.0 - 2.0 * (y * y + z * z),
                2.0 * (x * y + z * w),
                2.0 * (x * z - y * w),
            ),
            Axis::Y => Vec3::new(
                2.0 * (x * y - z * w),
                1.0 - 2.0 * (x * x + z * z),
                2.0 * (y * z + x * w),
            ),
            Axis::Z => Vec3::new(
                2.0 * (x * z + y * w),
                2.0 * (y * z - x * w),
                1.0 - 2.0 * (x * x + y * y),
            ),
        }
    }
}

/// Translation column (indices 12, 13, 14) of `m`.
pub fn translation_of(m: &Mat4) -> Vec3 {
    Vec3::new(m[12], m[13], m[14])
}

/// Matrix to quaternion conversion.
///
/// Always returns [`ConvertError::NotImplemented`].
pub fn matrix_to_quaternion(_m: &Mat4) -> Result<Quat, ConvertError> {
    Err(ConvertError::NotImplemented {
        conversion: "matrix to quaternion",
    })
}

/// Conversion errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    NotImplemented { conversion: &'static str },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::NotImplemented { conversion } => {
                write!(f, "{} conversion is not implemented", conversion)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Real;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-12
    }

    #[test]
    fn identity_quat_to_identity_matrix() {
        assert_eq!(Quat::identity().to_matrix(), Mat4::identity());
    }

    #[test]
    fn quarter_turn_about_z() {
        let half: Real = std::f64::consts::FRAC_PI_4;
        let q = Quat::new(0.0, 0.0, half.sin(), half.cos());
        let axes = q.to_axis_vectors();
        assert!(close(axes.x, Vec3::new(0.0, 1.0, 0.0)));
        assert!(close(axes.y, Vec3::new(-1.0, 0.0, 0.0)));
        assert!(close(axes.z, Vec3::new(0.0, 0.0, 1.0)));

        let m = q.to_matrix();
        assert_eq!(m.get(3, 3), 1.0);
        assert_eq!(translation_of(&m), Vec3::ZERO);
        assert!((m.get(0, 1) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn axis_vectors_match_matrix_columns() {
        let q = Quat::new(0.3, -0.1, 0.5, 0.8).normalize();
        let m = q.to_matrix();
        assert_eq!(q.axis_vector(Axis::X), Vec3::new(m[0], m[1], m[2]));
        assert_eq!(q.axis_vector(Axis::Y), Vec3::new(m[4], m[5], m[6]));
        assert_eq!(q.axis_vector(Axis::Z), Vec3::new(m[8], m[9], m[10]));
    }

    #[test]
    fn translation_column() {
        let m = Mat4::identity().translate(1.0, -2.0, 3.5);
        assert_eq!(translation_of(&m), Vec3::new(1.0, -2.0, 3.5));
    }

    #[test]
    fn matrix_to_quaternion_fails() {
        let err = matrix_to_quaternion(&Mat4::identity()).unwrap_err();
        assert_eq!(
            err,
            ConvertError::NotImplemented {
                conversion: "matrix to quaternion"
            }
        );
        assert_eq!(err.to_string(), "matrix to quaternion conversion is not implemented");
    }
}
