//! Operand-kind modes.
//!
//! A [`MathMode`] is a snapshot computed from the kinds of registers A and B.
//! It decides which operations are enabled and which page the result lands
//! on. Nothing here is global: the calculator recomputes the snapshot on
//! every call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::operand::OperandKind;

bitflags::bitflags! {
    /// Set of operations enabled in a mode.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Operations: u16 {
        const ADD = 1 << 0;
        const SUBTRACT = 1 << 1;
        const MULTIPLY = 1 << 2;
        const DIVIDE = 1 << 3;
        const DOT = 1 << 4;
        const CROSS = 1 << 5;
        const ANGLE = 1 << 6;
        const TRANSFORM = 1 << 7;
        const SCALE = 1 << 8;
        const TRANSLATE = 1 << 9;
        const ROTATE = 1 << 10;
        const SWAP = 1 << 11;
    }
}

/// Binary operation requested by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Dot,
    Cross,
    Angle,
    Transform,
    Scale,
    Translate,
    Rotate,
    Swap,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Dot,
        Operation::Cross,
        Operation::Angle,
        Operation::Transform,
        Operation::Scale,
        Operation::Translate,
        Operation::Rotate,
        Operation::Swap,
    ];

    pub fn flag(self) -> Operations {
        match self {
            Operation::Add => Operations::ADD,
            Operation::Subtract => Operations::SUBTRACT,
            Operation::Multiply => Operations::MULTIPLY,
            Operation::Divide => Operations::DIVIDE,
            Operation::Dot => Operations::DOT,
            Operation::Cross => Operations::CROSS,
            Operation::Angle => Operations::ANGLE,
            Operation::Transform => Operations::TRANSFORM,
            Operation::Scale => Operations::SCALE,
            Operation::Translate => Operations::TRANSLATE,
            Operation::Rotate => Operations::ROTATE,
            Operation::Swap => Operations::SWAP,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Dot => "dot",
            Operation::Cross => "cross",
            Operation::Angle => "angle",
            Operation::Transform => "transform",
            Operation::Scale => "scale",
            Operation::Translate => "translate",
            Operation::Rotate => "rotate",
            Operation::Swap => "swap",
        };
        f.write_str(name)
    }
}

/// Kind combination of registers A and B.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MathMode {
    MatrixMatrix,
    MatrixVector,
    VectorVector,
    VectorMatrix,
    VectorQuat,
    QuatQuat,
    ScalarMatrix,
    ScalarVector,
}

impl MathMode {
    /// Mode for the given kinds of A and B, if that pair has one.
    pub fn from_kinds(a: OperandKind, b: OperandKind) -> Option<Self> {
        use OperandKind::*;
        match (a, b) {
            (Matrix, Matrix) => Some(MathMode::MatrixMatrix),
            (Matrix, Vector) => Some(MathMode::MatrixVector),
            (Vector, Vector) => Some(MathMode::VectorVector),
            (Vector, Matrix) => Some(MathMode::VectorMatrix),
            (Vector, Quaternion) => Some(MathMode::VectorQuat),
            (Quaternion, Quaternion) => Some(MathMode::QuatQuat),
            (Scalar, Matrix) => Some(MathMode::ScalarMatrix),
            (Scalar, Vector) => Some(MathMode::ScalarVector),
            _ => None,
        }
    }

    /// Operand kinds of A and B in this mode.
    pub fn kinds(self) -> (OperandKind, OperandKind) {
        use OperandKind::*;
        match self {
            MathMode::MatrixMatrix => (Matrix, Matrix),
            MathMode::MatrixVector => (Matrix, Vector),
            MathMode::VectorVector => (Vector, Vector),
            MathMode::VectorMatrix => (Vector, Matrix),
            MathMode::VectorQuat => (Vector, Quaternion),
            MathMode::QuatQuat => (Quaternion, Quaternion),
            MathMode::ScalarMatrix => (Scalar, Matrix),
            MathMode::ScalarVector => (Scalar, Vector),
        }
    }

    pub fn enabled(self) -> Operations {
        match self {
            MathMode::MatrixMatrix => Operations::MULTIPLY | Operations::SWAP,
            MathMode::MatrixVector => Operations::TRANSFORM,
            MathMode::VectorVector => {
                Operations::ADD
                    | Operations::SUBTRACT
                    | Operations::MULTIPLY
                    | Operations::DIVIDE
                    | Operations::DOT
                    | Operations::CROSS
                    | Operations::ANGLE
                    | Operations::SWAP
            }
            MathMode::VectorMatrix => Operations::TRANSLATE | Operations::ROTATE,
            MathMode::VectorQuat => Operations::ROTATE,
            MathMode::QuatQuat => {
                Operations::ADD | Operations::SUBTRACT | Operations::MULTIPLY | Operations::SWAP
            }
            MathMode::ScalarMatrix => Operations::SCALE,
            MathMode::ScalarVector => {
                Operations::MULTIPLY | Operations::DIVIDE | Operations::SCALE
            }
        }
    }

    pub fn allows(self, op: Operation) -> bool {
        self.enabled().contains(op.flag())
    }

    /// Page the result register shows once the mode is selected.
    pub fn result_kind(self) -> OperandKind {
        match self {
            MathMode::MatrixMatrix | MathMode::VectorMatrix | MathMode::ScalarMatrix => {
                OperandKind::Matrix
            }
            MathMode::MatrixVector | MathMode::VectorVector | MathMode::ScalarVector => {
                OperandKind::Vector
            }
            MathMode::VectorQuat | MathMode::QuatQuat => OperandKind::Quaternion,
        }
    }
}

impl fmt::Display for MathMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b) = self.kinds();
        write!(f, "{}/{}", a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_b_has_no_mode() {
        assert_eq!(MathMode::from_kinds(OperandKind::Vector, OperandKind::Scalar), None);
        assert_eq!(MathMode::from_kinds(OperandKind::Quaternion, OperandKind::Matrix), None);
    }

    #[test]
    fn kinds_roundtrip_through_from_kinds() {
        for mode in [
            MathMode::MatrixMatrix,
            MathMode::MatrixVector,
            MathMode::VectorVector,
            MathMode::VectorMatrix,
            MathMode::VectorQuat,
            MathMode::QuatQuat,
            MathMode::ScalarMatrix,
            MathMode::ScalarVector,
        ] {
            let (a, b) = mode.kinds();
            assert_eq!(MathMode::from_kinds(a, b), Some(mode));
        }
    }

    #[test]
    fn vector_vector_enables_eight_operations() {
        let ops = MathMode::VectorVector.enabled();
        assert_eq!(ops.bits().count_ones(), 8);
        assert!(!ops.contains(Operations::TRANSFORM));
        assert!(MathMode::VectorVector.allows(Operation::Cross));
        assert!(!MathMode::QuatQuat.allows(Operation::Cross));
    }

    #[test]
    fn display_names() {
        assert_eq!(MathMode::ScalarVector.to_string(), "scalar/vector");
        assert_eq!(Operation::Translate.to_string(), "translate");
    }
}
