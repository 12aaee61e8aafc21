use crate::catalog::Catalog;
use crate::circuit_input::CircuitInput;
use crate::commitment::Commit;
use crate::config::GameConfig;
use crate::field::{EncodingError, Field};

use super::{Froglin, Item};

/// Public state of a player: everything committed except the secret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub mana: Field,
    pub claimed_mana: Field,
    pub level: Field,
    pub stash_root: Field,
    pub inventory: [Item; GameConfig::ITEM_MAX],
    pub froglins: [Froglin; GameConfig::FROGLIN_MAX],
}

impl PlayerSnapshot {
    /// Decodes `[mana, claimed_mana, level, stash_root, items.., froglins..]`.
    pub fn decode(catalog: &Catalog, fields: &[Field]) -> Result<Self, EncodingError> {
        if fields.len() != GameConfig::PLAYER_SIZE {
            return Err(EncodingError::Length {
                expected: GameConfig::PLAYER_SIZE,
                actual: fields.len(),
            });
        }
        let (header, rest) = fields.split_at(GameConfig::PLAYER_HEADER);
        let (items, froglins) = rest.split_at(GameConfig::ITEM_SIZE * GameConfig::ITEM_MAX);

        let mut inventory = [Item::empty(); GameConfig::ITEM_MAX];
        for (slot, chunk) in inventory
            .iter_mut()
            .zip(items.chunks_exact(GameConfig::ITEM_SIZE))
        {
            *slot = Item::import(chunk)?;
        }
        let mut decoded = [Froglin::empty(); GameConfig::FROGLIN_MAX];
        for (slot, chunk) in decoded
            .iter_mut()
            .zip(froglins.chunks_exact(GameConfig::FROGLIN_SIZE))
        {
            *slot = Froglin::import(catalog, chunk)?;
        }

        Ok(Self {
            mana: header[0],
            claimed_mana: header[1],
            level: header[2],
            stash_root: header[3],
            inventory,
            froglins: decoded,
        })
    }

    pub fn to_circuit_input(&self, catalog: &Catalog) -> CircuitInput {
        CircuitInput::record()
            .with_scalar("mana", &self.mana)
            .with_scalar("claimed_mana", &self.claimed_mana)
            .with_scalar("level", &self.level)
            .with_scalar("stash_root", &self.stash_root)
            .with(
                "inventory",
                CircuitInput::list(self.inventory.iter().map(Item::to_circuit_input)),
            )
            .with(
                "froglins",
                CircuitInput::list(self.froglins.iter().map(|f| f.to_circuit_input(catalog))),
            )
    }
}

impl Commit for PlayerSnapshot {
    fn serialize(&self) -> Vec<Field> {
        let mut fields = Vec::with_capacity(GameConfig::PLAYER_SIZE);
        fields.extend([self.mana, self.claimed_mana, self.level, self.stash_root]);
        fields.extend(self.inventory.iter().flat_map(Commit::serialize));
        fields.extend(self.froglins.iter().flat_map(Commit::serialize));
        fields
    }
}
