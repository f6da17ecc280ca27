//! Calculator session.
//!
//! The session maintains:
//! - Operand registers A and B and the result register C
//! - Mode snapshot derived from the pages of A and B
//! - Memory stores (four slots per storable kind)
//! - Scrollback log with optional worked steps

use anyhow::Context;
use mvq_kernel::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    config::CalcConfig,
    dispatch::{evaluate, Evaluation},
    error::CalcError,
    explain,
    memory::MemoryBank,
    mode::{MathMode, Operation, Operations},
    operand::{Operand, OperandKind, Register, RegisterId},
    scrollback::Scrollback,
};

/// Conversions offered by the operand toolbars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Quaternion to rotation matrix.
    QuatToMatrix,
    /// Quaternion to one rotated basis vector.
    QuatToAxis(Axis),
    /// Matrix translation column to vector.
    MatrixToVector,
    MatrixToQuat,
}

/// Headless calculator.
pub struct Calculator {
    a: Register,
    b: Register,
    c: Register,
    pub memory: MemoryBank,
    log: Scrollback,
    config: CalcConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}

impl Calculator {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            a: Register::default(),
            b: Register::default(),
            c: Register::default(),
            memory: MemoryBank::default(),
            log: Scrollback::new(config.scrollback_lines),
            config,
        }
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    pub fn register(&self, id: RegisterId) -> &Register {
        match id {
            RegisterId::A => &self.a,
            RegisterId::B => &self.b,
            RegisterId::C => &self.c,
        }
    }

    fn register_mut(&mut self, id: RegisterId) -> &mut Register {
        match id {
            RegisterId::A => &mut self.a,
            RegisterId::B => &mut self.b,
            RegisterId::C => &mut self.c,
        }
    }

    /// Active operand of a register.
    pub fn operand(&self, id: RegisterId) -> Operand {
        self.register(id).active()
    }

    /// Stores a value in a register and shows its page.
    pub fn set_operand(&mut self, id: RegisterId, operand: Operand) {
        let reg = self.register_mut(id);
        let before = reg.page;
        reg.set(operand);
        if id != RegisterId::C && before != operand.kind() {
            self.refresh_result_page();
        }
    }

    /// Shows a page of a register without changing any values.
    pub fn select_page(&mut self, id: RegisterId, kind: OperandKind) {
        self.register_mut(id).page = kind;
        if id != RegisterId::C {
            self.refresh_result_page();
        }
    }

    /// Moves C to the result page of the current mode. Pairs without a
    /// mode leave C where it is.
    fn refresh_result_page(&mut self) {
        if let Some(mode) = self.mode() {
            self.c.page = mode.result_kind();
        }
    }

    pub fn log(&self) -> &Scrollback {
        &self.log
    }

    /// Current mode snapshot.
    pub fn mode(&self) -> Option<MathMode> {
        MathMode::from_kinds(self.a.page, self.b.page)
    }

    /// Operations enabled for the current pages.
    pub fn enabled(&self) -> Operations {
        self.mode()
            .map(MathMode::enabled)
            .unwrap_or_else(Operations::empty)
    }

    /// Runs one operation on A and B.
    ///
    /// Results go to C; a swap writes back into A and B instead.
    pub fn apply(&mut self, op: Operation) -> Result<Evaluation, CalcError> {
        let mode = self.mode().ok_or(CalcError::NoMode {
            a: self.a.page,
            b: self.b.page,
        })?;
        let (a, b) = (self.a.active(), self.b.active());

        let evaluation = match evaluate(mode, op, &a, &b) {
            Ok(ev) => ev,
            Err(e) => {
                warn!(op = %op, mode = %mode, error = %e, "Operation rejected");
                self.log.push(format!("ERROR: {}", e));
                return Err(e);
            }
        };

        info!(op = %op, mode = %mode, "Applied operation");
        self.log.push(format!(">>> {} ({})", op, mode));
        if self.config.explain_steps {
            self.explain(op, &a, &b, &evaluation);
        }

        match evaluation {
            Evaluation::Result(result) => self.c.set(result),
            Evaluation::Swapped { a, b } => {
                self.a.set(a);
                self.b.set(b);
            }
        }
        Ok(evaluation)
    }

    fn explain(&mut self, op: Operation, a: &Operand, b: &Operand, evaluation: &Evaluation) {
        let lines = match (op, a, b, evaluation) {
            (Operation::Cross, Operand::Vector(a), Operand::Vector(b), _) => {
                explain::cross(*a, *b)
            }
            (Operation::Multiply, Operand::Matrix(a), Operand::Matrix(b), _) => {
                explain::matrix_product(a, b)
            }
            (Operation::Multiply, Operand::Quaternion(a), Operand::Quaternion(b), _) => {
                explain::quat_product(*a, *b)
            }
            (Operation::Angle, _, _, Evaluation::Result(Operand::Scalar(c))) => explain::angle(*c),
            (Operation::Rotate, _, Operand::Matrix(_), _) => {
                vec![
                    "rotating about the first non-zero axis of A (x, then y, then z), degrees"
                        .to_string(),
                ]
            }
            _ => return,
        };
        self.log.extend(lines);
    }

    /// Runs a sequence of operations, stopping at the first failure.
    pub fn exec_batch(&mut self, ops: &[Operation]) -> anyhow::Result<Vec<Evaluation>> {
        let mut out = Vec::with_capacity(ops.len());
        for (step, op) in ops.iter().enumerate() {
            let ev = self
                .apply(*op)
                .with_context(|| format!("step {} ({})", step + 1, op))?;
            out.push(ev);
        }
        Ok(out)
    }

    /// Loads zero into the active page of a register.
    pub fn zero(&mut self, id: RegisterId) {
        debug!(register = %id, "Zero");
        let reg = self.register_mut(id);
        let zero = match reg.page {
            OperandKind::Scalar => Operand::Scalar(0.0),
            OperandKind::Vector => Operand::Vector(Vec3::zero()),
            OperandKind::Matrix => Operand::Matrix(Mat4::zero()),
            OperandKind::Quaternion => Operand::Quaternion(Quat::zero()),
        };
        reg.set(zero);
    }

    /// Loads the identity matrix or quaternion.
    pub fn identity(&mut self, id: RegisterId) -> Result<(), CalcError> {
        let reg = self.register_mut(id);
        let identity = match reg.page {
            OperandKind::Matrix => Operand::Matrix(Mat4::identity()),
            OperandKind::Quaternion => Operand::Quaternion(Quat::identity()),
            kind => {
                return Err(CalcError::Unavailable {
                    action: "identity",
                    kind,
                })
            }
        };
        reg.set(identity);
        debug!(register = %id, "Identity");
        Ok(())
    }

    /// Normalizes the active vector or quaternion in place.
    pub fn unitize(&mut self, id: RegisterId) -> Result<Operand, CalcError> {
        let reg = self.register_mut(id);
        let unit = match reg.active() {
            Operand::Vector(v) => Operand::Vector(v.normalize()),
            Operand::Quaternion(q) => Operand::Quaternion(q.normalize()),
            other => {
                return Err(CalcError::Unavailable {
                    action: "unitize",
                    kind: other.kind(),
                })
            }
        };
        reg.set(unit);
        self.log.push(format!(">>> unitizing {} {}", unit.kind(), id));
        Ok(unit)
    }

    /// Length of the vector in a register, written to C.
    pub fn length(&mut self, id: RegisterId) -> Result<Real, CalcError> {
        let v = match self.register(id).active() {
            Operand::Vector(v) => v,
            other => {
                return Err(CalcError::Unavailable {
                    action: "length",
                    kind: other.kind(),
                })
            }
        };
        let len = v.length();
        self.log.push(format!(">>> length of vector {}", id));
        if self.config.explain_steps {
            self.log.extend(explain::length(v));
        }
        self.c.set(Operand::Scalar(len));
        Ok(len)
    }

    /// Converts a register's value in place and shows the new page.
    pub fn convert(
        &mut self,
        id: RegisterId,
        conversion: Conversion,
    ) -> Result<Operand, CalcError> {
        if id == RegisterId::C {
            return Err(CalcError::InvalidTarget {
                action: "convert",
                register: id,
            });
        }
        let reg = *self.register(id);
        let converted = match conversion {
            Conversion::QuatToMatrix => Operand::Matrix(reg.quat.to_matrix()),
            Conversion::QuatToAxis(axis) => Operand::Vector(reg.quat.axis_vector(axis)),
            Conversion::MatrixToVector => Operand::Vector(translation_of(&reg.matrix)),
            Conversion::MatrixToQuat => match matrix_to_quaternion(&reg.matrix) {
                Ok(q) => Operand::Quaternion(q),
                Err(e) => {
                    warn!(register = %id, error = %e, "Conversion failed");
                    self.log.push(format!("ERROR: {}", e));
                    return Err(e.into());
                }
            },
        };
        debug!(register = %id, ?conversion, "Converted");
        self.set_operand(id, converted);
        Ok(converted)
    }

    /// Copies the result into A or B.
    pub fn copy_result(&mut self, to: RegisterId) -> Result<(), CalcError> {
        if to == RegisterId::C {
            return Err(CalcError::InvalidTarget {
                action: "copy result",
                register: to,
            });
        }
        let result = self.c.active();
        self.set_operand(to, result);
        self.log.push(format!(">>> copying result {} to {}", result.kind(), to));
        Ok(())
    }

    /// Captures the active operand of a register into a memory slot.
    pub fn store(&mut self, id: RegisterId, slot: usize) -> Result<(), CalcError> {
        let operand = self.register(id).active();
        self.memory.capture(slot, operand)?;
        self.log.push(format!(">>> {} store M{}", operand.kind(), slot));
        Ok(())
    }

    /// Restores a memory slot of `kind` into a register.
    pub fn recall(
        &mut self,
        id: RegisterId,
        kind: OperandKind,
        slot: usize,
    ) -> Result<(), CalcError> {
        let operand = self.memory.restore(kind, slot)?;
        self.set_operand(id, operand);
        self.log.push(format!(">>> {} recall M{}", kind, slot));
        Ok(())
    }

    /// Restores every register, memory slot and the scrollback to defaults.
    pub fn reset(&mut self) {
        self.a = Register::default();
        self.b = Register::default();
        self.c = Register::default();
        self.memory.clear();
        self.log.clear();
        info!("Calculator reset");
    }
}
