//! Operation dispatch.
//!
//! [`evaluate`] maps a mode snapshot and an operation onto exactly one kernel
//! call. It is a pure function: registers are read by the caller and the
//! result is handed back for the caller to store.

use mvq_kernel::prelude::*;

use crate::{
    error::CalcError,
    mode::{MathMode, Operation},
    operand::Operand,
};

/// Outcome of a dispatched operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// A new value for the result register.
    Result(Operand),
    /// The operands exchanged; `a` and `b` are the new values of A and B.
    Swapped { a: Operand, b: Operand },
}

/// Evaluates `op` on `a` and `b` under `mode`.
pub fn evaluate(
    mode: MathMode,
    op: Operation,
    a: &Operand,
    b: &Operand,
) -> Result<Evaluation, CalcError> {
    if MathMode::from_kinds(a.kind(), b.kind()) != Some(mode) {
        return Err(CalcError::KindMismatch {
            mode,
            a: a.kind(),
            b: b.kind(),
        });
    }
    if !mode.allows(op) {
        return Err(CalcError::Unsupported { op, mode });
    }

    use Operand::*;
    let result = match (op, *a, *b) {
        (Operation::Swap, a, b) => return Ok(Evaluation::Swapped { a: b, b: a }),

        (Operation::Multiply, Matrix(a), Matrix(b)) => Matrix(a.multiply(&b)),
        (Operation::Transform, Matrix(a), Vector(b)) => Vector(b.transform_linear(&a)),

        (Operation::Add, Vector(a), Vector(b)) => Vector(a + b),
        (Operation::Subtract, Vector(a), Vector(b)) => Vector(a - b),
        (Operation::Multiply, Vector(a), Vector(b)) => Vector(a.component_mul(b)),
        (Operation::Divide, Vector(a), Vector(b)) => Vector(a.component_div(b)),
        (Operation::Dot, Vector(a), Vector(b)) => Scalar(a.dot(b)),
        (Operation::Cross, Vector(a), Vector(b)) => Vector(a.cross(b)),
        (Operation::Angle, Vector(a), Vector(b)) => Scalar(a.angle(b)),

        (Operation::Translate, Vector(a), Matrix(b)) => Matrix(b.translate(a.x, a.y, a.z)),
        (Operation::Rotate, Vector(a), Matrix(b)) => Matrix(b.rotate_axis_priority(a.to_array())),
        (Operation::Rotate, Vector(a), Quaternion(b)) => Quaternion(b.set_imaginary(a.x, a.y, a.z)),

        (Operation::Add, Quaternion(a), Quaternion(b)) => Quaternion(a + b),
        (Operation::Subtract, Quaternion(a), Quaternion(b)) => {
            Quaternion(a.subtract_componentwise(b))
        }
        (Operation::Multiply, Quaternion(a), Quaternion(b)) => Quaternion(a.multiply(b)),

        (Operation::Scale, Scalar(s), Matrix(b)) => Matrix(b.scale_uniform(s)),
        (Operation::Multiply | Operation::Scale, Scalar(s), Vector(b)) => Vector(b.scale(s)),
        // B is divided by A.
        (Operation::Divide, Scalar(s), Vector(b)) => Vector(b.div_scalar(s)),

        _ => return Err(CalcError::Unsupported { op, mode }),
    };
    Ok(Evaluation::Result(result))
}
