//! Memory slots.
//!
//! Each storable kind (vector, matrix, quaternion) has its own four-slot
//! store. Slots hold owned copies, so later edits to a register never leak
//! into a stored value.

use mvq_kernel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    error::CalcError,
    operand::{Operand, OperandKind},
};

/// Number of slots per store.
pub const MEMORY_SLOTS: usize = 4;

/// A captured value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum StoredValue {
    Vector(Vec3),
    Matrix(Mat4),
    Quaternion(Quat),
}

impl StoredValue {
    pub fn kind(&self) -> OperandKind {
        match self {
            StoredValue::Vector(_) => OperandKind::Vector,
            StoredValue::Matrix(_) => OperandKind::Matrix,
            StoredValue::Quaternion(_) => OperandKind::Quaternion,
        }
    }

    /// Captures an operand. Scalars have no memory store.
    pub fn from_operand(operand: Operand) -> Result<Self, CalcError> {
        match operand {
            Operand::Vector(v) => Ok(v.capture()),
            Operand::Matrix(m) => Ok(m.capture()),
            Operand::Quaternion(q) => Ok(q.capture()),
            Operand::Scalar(_) => Err(CalcError::Unavailable {
                action: "memory store",
                kind: OperandKind::Scalar,
            }),
        }
    }

    pub fn into_operand(self) -> Operand {
        match self {
            StoredValue::Vector(v) => Operand::Vector(v),
            StoredValue::Matrix(m) => Operand::Matrix(m),
            StoredValue::Quaternion(q) => Operand::Quaternion(q),
        }
    }
}

/// A value type that can live in a memory slot.
pub trait Memorable: Copy {
    const KIND: OperandKind;

    fn capture(self) -> StoredValue;

    fn restore(value: StoredValue) -> Option<Self>;
}

impl Memorable for Vec3 {
    const KIND: OperandKind = OperandKind::Vector;

    fn capture(self) -> StoredValue {
        StoredValue::Vector(self)
    }

    fn restore(value: StoredValue) -> Option<Self> {
        match value {
            StoredValue::Vector(v) => Some(v),
            _ => None,
        }
    }
}

impl Memorable for Mat4 {
    const KIND: OperandKind = OperandKind::Matrix;

    fn capture(self) -> StoredValue {
        StoredValue::Matrix(self)
    }

    fn restore(value: StoredValue) -> Option<Self> {
        match value {
            StoredValue::Matrix(m) => Some(m),
            _ => None,
        }
    }
}

impl Memorable for Quat {
    const KIND: OperandKind = OperandKind::Quaternion;

    fn capture(self) -> StoredValue {
        StoredValue::Quaternion(self)
    }

    fn restore(value: StoredValue) -> Option<Self> {
        match value {
            StoredValue::Quaternion(q) => Some(q),
            _ => None,
        }
    }
}

/// Four slots for one operand kind. Slots are numbered from 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryStore {
    kind: OperandKind,
    slots: [Option<StoredValue>; MEMORY_SLOTS],
}

impl MemoryStore {
    pub fn new(kind: OperandKind) -> Self {
        Self {
            kind,
            slots: [None; MEMORY_SLOTS],
        }
    }

    pub fn kind(&self) -> OperandKind {
        self.kind
    }

    fn index(slot: usize) -> Result<usize, CalcError> {
        if (1..=MEMORY_SLOTS).contains(&slot) {
            Ok(slot - 1)
        } else {
            Err(CalcError::SlotOutOfRange { slot })
        }
    }

    /// Stores a value of this store's kind.
    pub fn store<T: Memorable>(&mut self, slot: usize, value: T) -> Result<(), CalcError> {
        self.store_value(slot, value.capture())
    }

    pub fn store_value(&mut self, slot: usize, value: StoredValue) -> Result<(), CalcError> {
        let i = Self::index(slot)?;
        if value.kind() != self.kind {
            return Err(CalcError::Unavailable {
                action: "memory store",
                kind: value.kind(),
            });
        }
        self.slots[i] = Some(value);
        Ok(())
    }

    /// Recalls a typed value.
    pub fn recall<T: Memorable>(&self, slot: usize) -> Result<T, CalcError> {
        let value = self.recall_value(slot)?;
        T::restore(value).ok_or(CalcError::Unavailable {
            action: "memory recall",
            kind: T::KIND,
        })
    }

    pub fn recall_value(&self, slot: usize) -> Result<StoredValue, CalcError> {
        let i = Self::index(slot)?;
        self.slots[i].ok_or(CalcError::SlotEmpty {
            kind: self.kind,
            slot,
        })
    }

    /// Whether a slot holds a value (and so can be recalled).
    pub fn is_active(&self, slot: usize) -> bool {
        Self::index(slot)
            .map(|i| self.slots[i].is_some())
            .unwrap_or(false)
    }

    /// Active flags for slots 1..=4.
    pub fn active_slots(&self) -> [bool; MEMORY_SLOTS] {
        std::array::from_fn(|i| self.slots[i].is_some())
    }

    pub fn clear(&mut self) {
        self.slots = [None; MEMORY_SLOTS];
    }
}

/// One store per storable kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemoryBank {
    pub vector: MemoryStore,
    pub matrix: MemoryStore,
    pub quat: MemoryStore,
}

impl Default for MemoryBank {
    fn default() -> Self {
        Self {
            vector: MemoryStore::new(OperandKind::Vector),
            matrix: MemoryStore::new(OperandKind::Matrix),
            quat: MemoryStore::new(OperandKind::Quaternion),
        }
    }
}

impl MemoryBank {
    pub fn store_for(&self, kind: OperandKind) -> Option<&MemoryStore> {
        match kind {
            OperandKind::Vector => Some(&self.vector),
            OperandKind::Matrix => Some(&self.matrix),
            OperandKind::Quaternion => Some(&self.quat),
            OperandKind::Scalar => None,
        }
    }

    pub fn store_for_mut(&mut self, kind: OperandKind) -> Option<&mut MemoryStore> {
        match kind {
            OperandKind::Vector => Some(&mut self.vector),
            OperandKind::Matrix => Some(&mut self.matrix),
            OperandKind::Quaternion => Some(&mut self.quat),
            OperandKind::Scalar => None,
        }
    }

    /// Captures `operand` into the matching store.
    pub fn capture(&mut self, slot: usize, operand: Operand) -> Result<(), CalcError> {
        let value = StoredValue::from_operand(operand)?;
        let store = self
            .store_for_mut(value.kind())
            .ok_or(CalcError::Unavailable {
                action: "memory store",
                kind: value.kind(),
            })?;
        store.store_value(slot, value)
    }

    /// Restores the value of `kind` held in `slot`.
    pub fn restore(&self, kind: OperandKind, slot: usize) -> Result<Operand, CalcError> {
        let store = self.store_for(kind).ok_or(CalcError::Unavailable {
            action: "memory recall",
            kind,
        })?;
        Ok(store.recall_value(slot)?.into_operand())
    }

    pub fn clear(&mut self) {
        self.vector.clear();
        self.matrix.clear();
        self.quat.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_recall_typed() {
        let mut store = MemoryStore::new(OperandKind::Vector);
        assert!(!store.is_active(2));
        store.store(2, Vec3::new(1.0, 2.0, 3.0)).unwrap();
        assert!(store.is_active(2));
        assert_eq!(store.active_slots(), [false, true, false, false]);
        let v: Vec3 = store.recall(2).unwrap();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn slot_bounds() {
        let mut store = MemoryStore::new(OperandKind::Matrix);
        assert_eq!(
            store.store(0, Mat4::identity()),
            Err(CalcError::SlotOutOfRange { slot: 0 })
        );
        assert_eq!(
            store.store(5, Mat4::identity()),
            Err(CalcError::SlotOutOfRange { slot: 5 })
        );
        assert!(!store.is_active(9));
    }

    #[test]
    fn empty_slot_and_wrong_kind() {
        let mut store = MemoryStore::new(OperandKind::Quaternion);
        assert_eq!(
            store.recall::<Quat>(1),
            Err(CalcError::SlotEmpty {
                kind: OperandKind::Quaternion,
                slot: 1
            })
        );
        assert!(store.store(1, Vec3::zero()).is_err());
    }

    #[test]
    fn bank_rejects_scalars() {
        let mut bank = MemoryBank::default();
        assert!(bank.capture(1, Operand::Scalar(3.0)).is_err());
        assert!(bank.restore(OperandKind::Scalar, 1).is_err());
    }

    #[test]
    fn bank_clear_empties_every_store() {
        let mut bank = MemoryBank::default();
        bank.capture(1, Operand::Matrix(Mat4::zero())).unwrap();
        bank.capture(4, Operand::Quaternion(Quat::zero())).unwrap();
        bank.clear();
        assert_eq!(bank.matrix.active_slots(), [false; MEMORY_SLOTS]);
        assert_eq!(bank.quat.active_slots(), [false; MEMORY_SLOTS]);
    }
}
