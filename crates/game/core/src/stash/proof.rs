use crate::field::{self, Field};
use crate::hash::Hasher;

use super::StashError;
use super::tree::fold_path;

/// Membership or non-membership proof for one key.
///
/// A non-membership proof either ends in an empty subtree or carries the
/// leaf (`matching_entry`) that occupies the key's path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleProof {
    pub root: Field,
    pub key: Field,
    /// Stored value when `membership` is true.
    pub value: Option<Field>,
    pub matching_entry: Option<(Field, Field)>,
    /// Sibling hashes from the root downwards.
    pub siblings: Vec<Field>,
    pub membership: bool,
}

impl MerkleProof {
    /// Checks the proof against the root it was created for.
    pub fn verify(&self, hasher: &Hasher) -> bool {
        self.verify_against(hasher, self.root)
    }

    /// Checks the proof against an arbitrary root, e.g. the one published on
    /// chain.
    pub fn verify_against(&self, hasher: &Hasher, root: Field) -> bool {
        let one = Field::from(1u64);
        let (start, path_key) = match (self.value, self.matching_entry) {
            (Some(value), None) if self.membership => (hasher.hash(&[self.key, value, one]), self.key),
            (None, Some((other, other_value))) if !self.membership => {
                let shares_path = (0..self.siblings.len())
                    .all(|level| field::bit(&other, level) == field::bit(&self.key, level));
                if other == self.key || !shares_path {
                    return false;
                }
                (hasher.hash(&[other, other_value, one]), other)
            }
            (None, None) if !self.membership => (Field::from(0u64), self.key),
            _ => return false,
        };
        fold_path(hasher, start, path_key, &self.siblings) == root
    }

    /// Siblings padded with empty nodes to `depth`, for fixed-size circuit
    /// arrays.
    pub fn padded_siblings(&self, depth: usize) -> Result<Vec<Field>, StashError> {
        if self.siblings.len() > depth {
            return Err(StashError::DepthExceeded { depth });
        }
        let mut padded = self.siblings.clone();
        padded.resize(depth, Field::from(0u64));
        Ok(padded)
    }
}
