//! Fixed-capacity slot arrays shared by items and Froglins.
//!
//! A slot whose id is zero is empty. Inserts take the first empty slot and
//! removals overwrite the slot with the empty sentinel, so slot positions of
//! other entries never move (the circuit sees the same layout).

use crate::error::{ErrorSeverity, GameError};
use crate::field::Field;

use super::{Froglin, Item};

/// An entry that can live in a slot array.
pub trait Slot: Copy {
    const KIND: &'static str;

    fn slot_id(&self) -> Field;

    fn sentinel() -> Self;

    fn is_sentinel(&self) -> bool {
        self.slot_id() == Field::from(0u64)
    }
}

impl Slot for Item {
    const KIND: &'static str = "item";

    fn slot_id(&self) -> Field {
        self.id
    }

    fn sentinel() -> Self {
        Item::empty()
    }
}

impl Slot for Froglin {
    const KIND: &'static str = "froglin";

    fn slot_id(&self) -> Field {
        self.id
    }

    fn sentinel() -> Self {
        Froglin::empty()
    }
}

/// Index the next insert of `entry` would use, without mutating.
pub fn free_slot<T: Slot>(slots: &[T], entry: &T) -> Result<usize, InventoryError> {
    let id = entry.slot_id();
    if entry.is_sentinel() {
        return Err(InventoryError::SentinelId { kind: T::KIND });
    }
    if slots.iter().any(|slot| slot.slot_id() == id) {
        return Err(InventoryError::DuplicateId { kind: T::KIND, id });
    }
    slots
        .iter()
        .position(Slot::is_sentinel)
        .ok_or(InventoryError::Full {
            kind: T::KIND,
            capacity: slots.len(),
        })
}

pub fn insert<T: Slot>(slots: &mut [T], entry: T) -> Result<usize, InventoryError> {
    let index = free_slot(slots, &entry)?;
    slots[index] = entry;
    Ok(index)
}

pub fn find<T: Slot>(slots: &[T], id: Field) -> Option<&T> {
    position(slots, id).map(|index| &slots[index])
}

pub fn position<T: Slot>(slots: &[T], id: Field) -> Option<usize> {
    if id == Field::from(0u64) {
        return None;
    }
    slots.iter().position(|slot| slot.slot_id() == id)
}

/// Empties the slot holding `id` and returns its previous content.
pub fn take<T: Slot>(slots: &mut [T], id: Field) -> Result<T, InventoryError> {
    let index = position(slots, id).ok_or(InventoryError::NotFound { kind: T::KIND, id })?;
    Ok(core::mem::replace(&mut slots[index], T::sentinel()))
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("{kind} inventory is full ({capacity} slots), deposit one first")]
    Full { kind: &'static str, capacity: usize },

    #[error("no {kind} with id {id} in inventory")]
    NotFound { kind: &'static str, id: Field },

    #[error("{kind} id 0 is reserved for empty slots")]
    SentinelId { kind: &'static str },

    #[error("{kind} with id {id} is already in inventory")]
    DuplicateId { kind: &'static str, id: Field },
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "INVENTORY_FULL",
            Self::NotFound { .. } => "INVENTORY_NOT_FOUND",
            Self::SentinelId { .. } => "INVENTORY_SENTINEL_ID",
            Self::DuplicateId { .. } => "INVENTORY_DUPLICATE_ID",
        }
    }
}
