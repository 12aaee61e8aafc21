use crate::circuit_input::CircuitInput;
use crate::commitment::Commit;
use crate::config::GameConfig;
use crate::field::{EncodingError, Field};

/// Stackable item held in an inventory slot. `id == 0` marks an empty slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Item {
    pub id: Field,
    pub quantity: Field,
}

impl Item {
    pub fn new(id: Field, quantity: Field) -> Self {
        Self { id, quantity }
    }

    /// Sentinel for an empty slot.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.id == Field::from(0u64)
    }

    /// Inverse of [`Commit::serialize`].
    pub fn import(fields: &[Field]) -> Result<Self, EncodingError> {
        match fields {
            [id, quantity] => Ok(Self::new(*id, *quantity)),
            _ => Err(EncodingError::Length {
                expected: GameConfig::ITEM_SIZE,
                actual: fields.len(),
            }),
        }
    }

    pub fn to_circuit_input(&self) -> CircuitInput {
        CircuitInput::record()
            .with_scalar("id", &self.id)
            .with_scalar("quantity", &self.quantity)
    }
}

impl Commit for Item {
    fn serialize(&self) -> Vec<Field> {
        vec![self.id, self.quantity]
    }
}
