//! Entity model: items, Froglins, and the player that owns them.
//!
//! Entities serialize to field elements in circuit order through
//! [`Commit`](crate::commitment::Commit). Slots with id `0` are empty.
mod froglin;
pub mod inventory;
mod item;
mod player;
mod snapshot;

pub use froglin::Froglin;
pub use inventory::{InventoryError, Slot};
pub use item::Item;
pub use player::{Player, PlayerError};
pub use snapshot::PlayerSnapshot;
