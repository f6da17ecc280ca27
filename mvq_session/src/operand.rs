//! Operand kinds, tagged operand values and the A/B/C registers.

use std::fmt;

use mvq_kernel::prelude::*;
use serde::{Deserialize, Serialize};

/// Operand kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperandKind {
    Scalar,
    Vector,
    Matrix,
    Quaternion,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Scalar => write!(f, "scalar"),
            OperandKind::Vector => write!(f, "vector"),
            OperandKind::Matrix => write!(f, "matrix"),
            OperandKind::Quaternion => write!(f, "quaternion"),
        }
    }
}

/// A value of one of the four operand kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    Scalar(Real),
    Vector(Vec3),
    Matrix(Mat4),
    Quaternion(Quat),
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Scalar(_) => OperandKind::Scalar,
            Operand::Vector(_) => OperandKind::Vector,
            Operand::Matrix(_) => OperandKind::Matrix,
            Operand::Quaternion(_) => OperandKind::Quaternion,
        }
    }
}

/// Register name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegisterId {
    A,
    B,
    /// Result register.
    C,
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterId::A => write!(f, "A"),
            RegisterId::B => write!(f, "B"),
            RegisterId::C => write!(f, "C"),
        }
    }
}

/// Holds one value per operand kind plus the page currently shown.
///
/// Switching pages keeps the values of the other kinds, so flipping from
/// matrix to vector and back restores the matrix that was there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Register {
    pub page: OperandKind,
    pub scalar: Real,
    pub vector: Vec3,
    pub matrix: Mat4,
    pub quat: Quat,
}

impl Default for Register {
    fn default() -> Self {
        Self {
            page: OperandKind::Matrix,
            scalar: 0.0,
            vector: Vec3::zero(),
            matrix: Mat4::identity(),
            quat: Quat::identity(),
        }
    }
}

impl Register {
    /// Operand on the active page.
    pub fn active(&self) -> Operand {
        self.get(self.page)
    }

    /// Stored operand of the given kind, whichever page is active.
    pub fn get(&self, kind: OperandKind) -> Operand {
        match kind {
            OperandKind::Scalar => Operand::Scalar(self.scalar),
            OperandKind::Vector => Operand::Vector(self.vector),
            OperandKind::Matrix => Operand::Matrix(self.matrix),
            OperandKind::Quaternion => Operand::Quaternion(self.quat),
        }
    }

    /// Stores `operand` and switches the page to its kind.
    pub fn set(&mut self, operand: Operand) {
        match operand {
            Operand::Scalar(s) => self.scalar = s,
            Operand::Vector(v) => self.vector = v,
            Operand::Matrix(m) => self.matrix = m,
            Operand::Quaternion(q) => self.quat = q,
        }
        self.page = operand.kind();
    }
}
