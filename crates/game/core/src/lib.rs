//! Private, provable player state.
//!
//! `froglin-core` is the host-side reference model of the game circuits: the
//! field codec, Poseidon2 hash engine, Baby Jubjub identity derivation, entity
//! serialization, the mana ledger, and the stash sparse Merkle tree. Every
//! value computed here must match what the circuit recomputes, so all
//! operations are pure and deterministic.
//!
//! Sessions build one [`GameContext`] and hand it to each [`Player`]; nothing
//! in this crate relies on global state.
pub mod catalog;
pub mod circuit_input;
pub mod commitment;
pub mod config;
pub mod context;
pub mod curve;
pub mod error;
pub mod field;
pub mod hash;
pub mod mana;
pub mod stash;
pub mod state;

pub use catalog::{
    Catalog, CatalogError, CatalogSpec, FroglinType, QUAD, Species, SpeciesSpec, Zone, ZoneId,
    ZoneSpec,
};
pub use circuit_input::CircuitInput;
pub use commitment::{Commit, Identity, generate_identity};
pub use config::{ConfigError, GameConfig};
pub use context::GameContext;
pub use curve::{BASE8, BabyJubjubConfig, Point, derive_public_key};
pub use error::{ErrorSeverity, GameError};
pub use field::{EncodingError, Field};
pub use hash::Hasher;
pub use mana::{ManaError, ManaLedger};
pub use stash::{MerkleProof, SparseMerkleTree, Stash, StashError};
pub use state::{Froglin, InventoryError, Item, Player, PlayerError, PlayerSnapshot};
