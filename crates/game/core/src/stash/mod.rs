//! Player stash: a sparse Merkle tree of Froglin commitments plus a local
//! database of the full records.
//!
//! Each deposited Froglin is stored as `key = H(commitment)`,
//! `value = commitment`. The tree root is the only value that leaves the
//! process; the database exists so the owner can rebuild a withdrawal proof.
//! Every occupied leaf has exactly one database record and vice versa.

mod proof;
mod tree;

pub use proof::MerkleProof;
pub use tree::SparseMerkleTree;

use crate::commitment::Commit;
use crate::error::{ErrorSeverity, GameError};
use crate::field::Field;
use crate::hash::Hasher;
use crate::state::Froglin;

#[derive(Clone, Debug)]
pub struct Stash {
    tree: SparseMerkleTree,
    db: Vec<Froglin>,
}

impl Stash {
    pub fn new(hasher: Hasher, depth: usize) -> Self {
        Self {
            tree: SparseMerkleTree::new(hasher, depth),
            db: Vec::new(),
        }
    }

    pub fn root(&self) -> Field {
        self.tree.root()
    }

    pub fn tree(&self) -> &SparseMerkleTree {
        &self.tree
    }

    pub fn records(&self) -> &[Froglin] {
        &self.db
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Stash key of a commitment.
    pub fn key_for(&self, commitment: Field) -> Field {
        self.tree.hasher().hash_one(commitment)
    }

    /// First record with this Froglin id.
    pub fn record(&self, id: Field) -> Option<&Froglin> {
        self.db.iter().find(|froglin| froglin.id == id)
    }

    pub fn position(&self, id: Field) -> Option<usize> {
        self.db.iter().position(|froglin| froglin.id == id)
    }

    /// Commits `froglin` under `secret` and inserts it. Returns the key.
    ///
    /// The tree is written first, so a collision leaves the database as is.
    pub fn insert(&mut self, froglin: Froglin, secret: Field) -> Result<Field, StashError> {
        let commitment = froglin.commit(self.tree.hasher(), secret);
        let key = self.key_for(commitment);
        self.tree.add(key, commitment)?;
        self.db.push(froglin);
        tracing::debug!(id = %froglin.id, %key, root = %self.root(), "froglin stashed");
        Ok(key)
    }

    /// Removes the record with `id` and its leaf, returning the record.
    pub fn remove(&mut self, id: Field, secret: Field) -> Result<Froglin, StashError> {
        let index = self.position(id).ok_or(StashError::NotFound { id })?;
        let key = self.key_for(self.db[index].commit(self.tree.hasher(), secret));
        self.tree.delete(key)?;
        let froglin = self.db.remove(index);
        tracing::debug!(%id, %key, root = %self.root(), "froglin unstashed");
        Ok(froglin)
    }

    /// Proof for the record with `id`, against the current root.
    pub fn proof_for(&self, id: Field, secret: Field) -> Result<MerkleProof, StashError> {
        let froglin = self.record(id).ok_or(StashError::NotFound { id })?;
        let key = self.key_for(froglin.commit(self.tree.hasher(), secret));
        self.tree.create_proof(key)
    }

    pub fn create_proof(&self, key: Field) -> Result<MerkleProof, StashError> {
        self.tree.create_proof(key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StashError {
    #[error("stash key {key} is already occupied")]
    KeyCollision { key: Field },

    #[error("stash key {key} is not present")]
    KeyNotFound { key: Field },

    #[error("no stashed froglin with id {id}")]
    NotFound { id: Field },

    #[error("stash node {hash} is missing from the node store")]
    MissingNode { hash: Field },

    #[error("stash path exceeds the maximum depth {depth}")]
    DepthExceeded { depth: usize },
}

impl GameError for StashError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::KeyCollision { .. } | Self::KeyNotFound { .. } | Self::NotFound { .. } => {
                ErrorSeverity::Validation
            }
            Self::MissingNode { .. } | Self::DepthExceeded { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::KeyCollision { .. } => "STASH_KEY_COLLISION",
            Self::KeyNotFound { .. } => "STASH_KEY_NOT_FOUND",
            Self::NotFound { .. } => "STASH_NOT_FOUND",
            Self::MissingNode { .. } => "STASH_MISSING_NODE",
            Self::DepthExceeded { .. } => "STASH_DEPTH_EXCEEDED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, FroglinType};

    fn stash() -> Stash {
        Stash::new(Hasher::default(), 254)
    }

    fn froglin(kind: FroglinType, id: u64) -> Froglin {
        Froglin::new(&Catalog::builtin(), kind, Field::from(id))
    }

    #[test]
    fn insert_then_remove_round_trips() {
        let mut stash = stash();
        let secret = Field::from(123u64);
        let desert = froglin(FroglinType::DesertFroglin, 1);

        stash.insert(desert, secret).expect("insert should succeed");
        assert_eq!(stash.len(), 1);
        assert_eq!(stash.record(desert.id), Some(&desert));

        let removed = stash.remove(desert.id, secret).expect("remove should succeed");
        assert_eq!(removed, desert);
        assert!(stash.is_empty());
        assert_eq!(stash.root(), Field::from(0u64));
    }

    #[test]
    fn identical_commitment_collides_without_touching_db() {
        let mut stash = stash();
        let secret = Field::from(5u64);
        let tree_froglin = froglin(FroglinType::TreeFroglin, 2);
        let key = stash.insert(tree_froglin, secret).expect("insert should succeed");

        assert_eq!(
            stash.insert(tree_froglin, secret),
            Err(StashError::KeyCollision { key })
        );
        assert_eq!(stash.len(), 1);
    }

    #[test]
    fn remove_unknown_id_fails() {
        let mut stash = stash();
        assert_eq!(
            stash.remove(Field::from(4u64), Field::from(1u64)),
            Err(StashError::NotFound {
                id: Field::from(4u64)
            })
        );
    }

    #[test]
    fn wrong_secret_cannot_remove() {
        let mut stash = stash();
        let desert = froglin(FroglinType::DesertFroglin, 1);
        stash.insert(desert, Field::from(1u64)).expect("insert should succeed");
        assert!(matches!(
            stash.remove(desert.id, Field::from(2u64)),
            Err(StashError::KeyNotFound { .. })
        ));
        assert_eq!(stash.len(), 1);
    }
}
