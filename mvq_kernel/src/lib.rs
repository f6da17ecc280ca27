//! `mvq_kernel`
//!
//! Numeric kernel of the vector/matrix/quaternion calculator.
//!
//! Design goals:
//! - Plain `Copy` value types; no allocation, no shared state.
//! - IEEE-754 semantics throughout. Degenerate inputs (zero divisors,
//!   zero-length normalization) produce infinities or NaN instead of errors.
//! - Column-major `Mat4` storage, addressed as `col * 4 + row`.
//! - No `unsafe`.

pub mod convert;
pub mod mat4;
pub mod quat;
pub mod vec3;

/// Scalar type used by every aggregate.
pub type Real = f64;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::convert::*;
    pub use crate::mat4::*;
    pub use crate::quat::*;
    pub use crate::vec3::*;
    pub use crate::Real;
}
