//! Session errors.

use std::fmt;

use mvq_kernel::convert::ConvertError;

use crate::{
    mode::{MathMode, Operation},
    operand::{OperandKind, RegisterId},
};

/// Errors raised by the calculator session.
///
/// Numeric degeneracies (division by zero, NaN) are never errors; they show
/// up as IEEE-754 values in the result.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The kinds of A and B do not form a mode.
    NoMode { a: OperandKind, b: OperandKind },
    /// The operation is not enabled in this mode.
    Unsupported { op: Operation, mode: MathMode },
    /// The operands handed to dispatch do not match the mode.
    KindMismatch { mode: MathMode, a: OperandKind, b: OperandKind },
    /// A toolbar action does not apply to this operand kind.
    Unavailable { action: &'static str, kind: OperandKind },
    /// The register cannot be the target of this action.
    InvalidTarget { action: &'static str, register: RegisterId },
    SlotOutOfRange { slot: usize },
    SlotEmpty { kind: OperandKind, slot: usize },
    Convert(ConvertError),
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::NoMode { a, b } => write!(f, "no operations for {} and {}", a, b),
            CalcError::Unsupported { op, mode } => {
                write!(f, "{} is not available in {} mode", op, mode)
            }
            CalcError::KindMismatch { mode, a, b } => {
                write!(f, "{} mode cannot take {} and {} operands", mode, a, b)
            }
            CalcError::Unavailable { action, kind } => {
                write!(f, "{} is not available for {} operands", action, kind)
            }
            CalcError::InvalidTarget { action, register } => {
                write!(f, "{} cannot target register {}", action, register)
            }
            CalcError::SlotOutOfRange { slot } => write!(f, "memory slot {} out of range", slot),
            CalcError::SlotEmpty { kind, slot } => {
                write!(f, "{} memory slot {} is empty", kind, slot)
            }
            CalcError::Convert(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Convert(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConvertError> for CalcError {
    fn from(e: ConvertError) -> Self {
        CalcError::Convert(e)
    }
}
