use std::sync::Arc;

use crate::catalog::{Catalog, FroglinType};
use crate::circuit_input::CircuitInput;
use crate::commitment::{self, Commit, Identity};
use crate::config::GameConfig;
use crate::context::GameContext;
use crate::error::{ErrorSeverity, GameError};
use crate::field::Field;
use crate::hash::Hasher;
use crate::mana::{ManaError, ManaLedger};
use crate::stash::{MerkleProof, Stash, StashError};

use super::inventory::{self, InventoryError};
use super::{Froglin, Item, PlayerSnapshot};

/// Private player state, owned by the session holding `secret`.
///
/// Every mutation validates first and writes second: a returned error means
/// nothing changed.
#[derive(Clone)]
pub struct Player {
    secret: Field,
    ledger: ManaLedger,
    level: Field,
    inventory: [Item; GameConfig::ITEM_MAX],
    froglins: [Froglin; GameConfig::FROGLIN_MAX],
    stash: Stash,
    hasher: Hasher,
    catalog: Arc<Catalog>,
}

impl Player {
    pub fn new(secret: Field, context: &GameContext) -> Self {
        Self {
            secret,
            ledger: ManaLedger::new(),
            level: Field::from(0u64),
            inventory: [Item::empty(); GameConfig::ITEM_MAX],
            froglins: [Froglin::empty(); GameConfig::FROGLIN_MAX],
            stash: Stash::new(context.hasher, context.config.stash_depth),
            hasher: context.hasher,
            catalog: Arc::clone(&context.catalog),
        }
    }

    // ===== read access =====

    /// The private key. Needed only to build prover inputs.
    pub fn secret(&self) -> Field {
        self.secret
    }

    pub fn mana(&self) -> Field {
        self.ledger.mana()
    }

    pub fn claimed_mana(&self) -> Field {
        self.ledger.claimed()
    }

    pub fn level(&self) -> Field {
        self.level
    }

    /// Mirrors the stash tree root.
    pub fn stash_root(&self) -> Field {
        self.stash.root()
    }

    pub fn inventory(&self) -> &[Item] {
        &self.inventory
    }

    pub fn froglins(&self) -> &[Froglin] {
        &self.froglins
    }

    pub fn stash(&self) -> &Stash {
        &self.stash
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn hasher(&self) -> &Hasher {
        &self.hasher
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            mana: self.ledger.mana(),
            claimed_mana: self.ledger.claimed(),
            level: self.level,
            stash_root: self.stash.root(),
            inventory: self.inventory,
            froglins: self.froglins,
        }
    }

    // ===== commitment & identity =====

    /// `H(serialize() ‖ secret)`.
    pub fn commitment(&self) -> Field {
        self.commit(&self.hasher, self.secret)
    }

    pub fn generate_identity(&self) -> Identity {
        commitment::generate_identity(&self.hasher, self, self.secret)
    }

    pub fn to_circuit_input(&self) -> CircuitInput {
        self.snapshot().to_circuit_input(&self.catalog)
    }

    // ===== mana =====

    /// Claims the cumulative entitlement `total`. Returns the credited amount.
    pub fn add_mana(&mut self, total: Field) -> Result<Field, PlayerError> {
        Ok(self.ledger.add_mana(total)?)
    }

    pub fn remove_mana(&mut self, amount: Field) -> Result<(), PlayerError> {
        Ok(self.ledger.remove_mana(amount)?)
    }

    // ===== froglins =====

    pub fn get_froglin(&self, id: Field) -> Option<&Froglin> {
        inventory::find(&self.froglins, id)
    }

    /// Places `froglin` in the first empty slot and returns the slot index.
    pub fn add_froglin(&mut self, froglin: Froglin) -> Result<usize, PlayerError> {
        let index = inventory::insert(&mut self.froglins, froglin)?;
        tracing::debug!(id = %froglin.id, slot = index, "froglin added");
        Ok(index)
    }

    /// Instantiates a species from the catalog and adds it.
    pub fn capture_froglin(&mut self, kind: FroglinType, id: Field) -> Result<Froglin, PlayerError> {
        let froglin = Froglin::new(&self.catalog, kind, id);
        self.add_froglin(froglin)?;
        Ok(froglin)
    }

    pub fn remove_froglin(&mut self, id: Field) -> Result<Froglin, PlayerError> {
        Ok(inventory::take(&mut self.froglins, id)?)
    }

    pub fn level_up_froglin(&mut self, id: Field) -> Result<&Froglin, PlayerError> {
        let index = inventory::position(&self.froglins, id).ok_or(InventoryError::NotFound {
            kind: "froglin",
            id,
        })?;
        let froglin = &mut self.froglins[index];
        froglin.level_up();
        tracing::debug!(%id, level = %froglin.level, "froglin levelled up");
        Ok(froglin)
    }

    // ===== items =====

    pub fn get_item(&self, id: Field) -> Option<&Item> {
        inventory::find(&self.inventory, id)
    }

    pub fn add_item(&mut self, item: Item) -> Result<usize, PlayerError> {
        Ok(inventory::insert(&mut self.inventory, item)?)
    }

    pub fn remove_item(&mut self, id: Field) -> Result<Item, PlayerError> {
        Ok(inventory::take(&mut self.inventory, id)?)
    }

    // ===== stash =====

    /// Moves a held Froglin into the stash. Returns its stash key.
    pub fn deposit_to_stash(&mut self, id: Field) -> Result<Field, PlayerError> {
        let froglin = *self
            .get_froglin(id)
            .ok_or(InventoryError::NotFound { kind: "froglin", id })?;
        let key = self.stash.insert(froglin, self.secret)?;
        self.remove_froglin(id)?;
        tracing::info!(%id, root = %self.stash.root(), "deposited to stash");
        Ok(key)
    }

    /// Moves a stashed Froglin back into the inventory.
    pub fn withdraw_from_stash(&mut self, id: Field) -> Result<Froglin, PlayerError> {
        let record = *self.stash.record(id).ok_or(StashError::NotFound { id })?;
        inventory::free_slot(&self.froglins, &record)?;
        let froglin = self.stash.remove(id, self.secret)?;
        self.add_froglin(froglin)?;
        tracing::info!(%id, root = %self.stash.root(), "withdrew from stash");
        Ok(froglin)
    }

    /// Membership proof for a stashed Froglin against the current root.
    pub fn stash_proof(&self, id: Field) -> Result<MerkleProof, PlayerError> {
        Ok(self.stash.proof_for(id, self.secret)?)
    }
}

impl Commit for Player {
    fn serialize(&self) -> Vec<Field> {
        self.snapshot().serialize()
    }
}

impl core::fmt::Debug for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Player")
            .field("ledger", &self.ledger)
            .field("level", &self.level)
            .field("inventory", &self.inventory)
            .field("froglins", &self.froglins)
            .field("stash_root", &self.stash.root())
            .finish_non_exhaustive()
    }
}

/// Errors surfaced by [`Player`] operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PlayerError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Mana(#[from] ManaError),

    #[error(transparent)]
    Stash(#[from] StashError),
}

impl GameError for PlayerError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Inventory(e) => e.severity(),
            Self::Mana(e) => e.severity(),
            Self::Stash(e) => e.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Inventory(e) => e.error_code(),
            Self::Mana(e) => e.error_code(),
            Self::Stash(e) => e.error_code(),
        }
    }
}
