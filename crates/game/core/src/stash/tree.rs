//! Compact sparse Merkle tree with Poseidon2 nodes.
//!
//! A subtree holding a single leaf collapses to that leaf, so a key sits at
//! the shallowest depth where its path diverges from every other key. Paths
//! follow the key's bits, least significant first (bit `i` set = right child
//! at depth `i`).
//!
//! ```text
//! leaf      = H(key, value, 1)
//! internal  = H(left, right)
//! empty     = 0
//! ```
//!
//! Nodes are content-addressed. Each add/delete rewrites only the nodes on the
//! affected path.

use std::collections::BTreeMap;

use crate::field::{self, Field};
use crate::hash::Hasher;

use super::{MerkleProof, StashError};

const ZERO: Field = ark_ff::MontFp!("0");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Node {
    Internal { left: Field, right: Field },
    Leaf { key: Field, value: Field },
}

/// Result of walking a key's path from the root.
#[derive(Debug, Default)]
struct PathLookup {
    /// Leaf reached on the path, if any (may hold a different key).
    entry: Option<(Field, Field)>,
    /// Sibling hashes from the root downwards.
    siblings: Vec<Field>,
}

#[derive(Clone, Debug)]
pub struct SparseMerkleTree {
    hasher: Hasher,
    depth: usize,
    root: Field,
    nodes: BTreeMap<Field, Node>,
}

impl SparseMerkleTree {
    pub fn new(hasher: Hasher, depth: usize) -> Self {
        Self {
            hasher,
            depth,
            root: ZERO,
            nodes: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> Field {
        self.root
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn hasher(&self) -> &Hasher {
        &self.hasher
    }

    /// Value stored under `key`.
    pub fn get(&self, key: Field) -> Result<Option<Field>, StashError> {
        Ok(match self.lookup(key)?.entry {
            Some((found, value)) if found == key => Some(value),
            _ => None,
        })
    }

    pub fn contains(&self, key: Field) -> Result<bool, StashError> {
        self.get(key).map(|value| value.is_some())
    }

    /// Inserts a new leaf. Fails if `key` is already present.
    pub fn add(&mut self, key: Field, value: Field) -> Result<(), StashError> {
        let PathLookup {
            entry,
            mut siblings,
        } = self.lookup(key)?;

        let displaced = match entry {
            Some((found, _)) if found == key => return Err(StashError::KeyCollision { key }),
            Some((found, found_value)) => {
                // Push the resident leaf down until its path splits from ours.
                let mut level = siblings.len();
                while level < self.depth && field::bit(&found, level) == field::bit(&key, level) {
                    level += 1;
                }
                if level >= self.depth {
                    return Err(StashError::DepthExceeded { depth: self.depth });
                }
                Some((self.leaf_hash(found, found_value), level))
            }
            None => None,
        };

        let start = displaced.map_or(ZERO, |(hash, _)| hash);
        self.remove_path(start, key, &siblings);
        if let Some((hash, level)) = displaced {
            siblings.resize(level, ZERO);
            siblings.push(hash);
        }

        let leaf = self.leaf_hash(key, value);
        self.nodes.insert(leaf, Node::Leaf { key, value });
        self.root = self.insert_path(leaf, key, &siblings);
        Ok(())
    }

    /// Removes a leaf, returning its value. Fails if `key` is absent.
    pub fn delete(&mut self, key: Field) -> Result<Field, StashError> {
        let PathLookup {
            entry,
            mut siblings,
        } = self.lookup(key)?;
        let value = match entry {
            Some((found, value)) if found == key => value,
            _ => return Err(StashError::KeyNotFound { key }),
        };

        let leaf = self.leaf_hash(key, value);
        self.nodes.remove(&leaf);
        self.remove_path(leaf, key, &siblings);

        let last_is_leaf = siblings
            .last()
            .is_some_and(|hash| matches!(self.nodes.get(hash), Some(Node::Leaf { .. })));

        self.root = if last_is_leaf {
            // A lone neighbour leaf moves up to the first non-empty level.
            let (neighbour, rest) = match siblings.split_last() {
                Some((neighbour, rest)) => (*neighbour, rest),
                None => return Err(StashError::MissingNode { hash: leaf }),
            };
            let keep = rest.iter().rposition(|s| *s != ZERO).map_or(0, |i| i + 1);
            siblings.truncate(keep);
            self.insert_path(neighbour, key, &siblings)
        } else {
            self.insert_path(ZERO, key, &siblings)
        };
        Ok(value)
    }

    /// Membership or non-membership proof against the current root.
    pub fn create_proof(&self, key: Field) -> Result<MerkleProof, StashError> {
        let PathLookup { entry, siblings } = self.lookup(key)?;
        let (value, matching_entry) = match entry {
            Some((found, value)) if found == key => (Some(value), None),
            Some(other) => (None, Some(other)),
            None => (None, None),
        };
        Ok(MerkleProof {
            root: self.root,
            key,
            value,
            matching_entry,
            membership: value.is_some(),
            siblings,
        })
    }

    /// Number of leaves currently stored.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .values()
            .filter(|node| matches!(node, Node::Leaf { .. }))
            .count()
    }

    fn leaf_hash(&self, key: Field, value: Field) -> Field {
        self.hasher.hash(&[key, value, Field::from(1u64)])
    }

    fn lookup(&self, key: Field) -> Result<PathLookup, StashError> {
        let mut siblings = Vec::new();
        let mut hash = self.root;

        loop {
            if hash == ZERO {
                return Ok(PathLookup {
                    entry: None,
                    siblings,
                });
            }
            match self.nodes.get(&hash) {
                Some(Node::Leaf { key: found, value }) => {
                    return Ok(PathLookup {
                        entry: Some((*found, *value)),
                        siblings,
                    });
                }
                Some(Node::Internal { left, right }) => {
                    if siblings.len() >= self.depth {
                        return Err(StashError::DepthExceeded { depth: self.depth });
                    }
                    if field::bit(&key, siblings.len()) {
                        siblings.push(*left);
                        hash = *right;
                    } else {
                        siblings.push(*right);
                        hash = *left;
                    }
                }
                None => return Err(StashError::MissingNode { hash }),
            }
        }
    }

    /// Drops the internal nodes on `key`'s path above `start`.
    fn remove_path(&mut self, start: Field, key: Field, siblings: &[Field]) {
        let mut hash = start;
        for (level, sibling) in siblings.iter().enumerate().rev() {
            let (left, right) = children(hash, *sibling, field::bit(&key, level));
            hash = self.hasher.hash_two(left, right);
            self.nodes.remove(&hash);
        }
    }

    /// Stores the internal nodes on `key`'s path above `start`, returning the
    /// new root.
    fn insert_path(&mut self, start: Field, key: Field, siblings: &[Field]) -> Field {
        let mut hash = start;
        for (level, sibling) in siblings.iter().enumerate().rev() {
            let (left, right) = children(hash, *sibling, field::bit(&key, level));
            hash = self.hasher.hash_two(left, right);
            self.nodes.insert(hash, Node::Internal { left, right });
        }
        hash
    }
}

#[inline]
fn children(node: Field, sibling: Field, is_right: bool) -> (Field, Field) {
    if is_right {
        (sibling, node)
    } else {
        (node, sibling)
    }
}

/// Folds `start` up along `key`'s path. Shared with proof verification.
pub(super) fn fold_path(hasher: &Hasher, start: Field, key: Field, siblings: &[Field]) -> Field {
    siblings
        .iter()
        .enumerate()
        .rev()
        .fold(start, |hash, (level, sibling)| {
            let (left, right) = children(hash, *sibling, field::bit(&key, level));
            hasher.hash_two(left, right)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> SparseMerkleTree {
        SparseMerkleTree::new(Hasher::default(), 254)
    }

    fn f(value: u64) -> Field {
        Field::from(value)
    }

    #[test]
    fn empty_tree_has_zero_root() {
        assert_eq!(tree().root(), ZERO);
    }

    #[test]
    fn single_leaf_is_the_root() {
        let mut tree = tree();
        tree.add(f(5), f(50)).expect("add should succeed");
        assert_eq!(tree.root(), tree.leaf_hash(f(5), f(50)));
        assert_eq!(tree.get(f(5)), Ok(Some(f(50))));
    }

    #[test]
    fn sibling_leaves_split_at_first_differing_bit() {
        let mut tree = tree();
        // 0b01 and 0b11 share bit 0, differ at bit 1.
        tree.add(f(1), f(10)).expect("add should succeed");
        tree.add(f(3), f(30)).expect("add should succeed");

        let hasher = Hasher::default();
        let low = tree.leaf_hash(f(1), f(10));
        let high = tree.leaf_hash(f(3), f(30));
        let expected = hasher.hash_two(ZERO, hasher.hash_two(low, high));
        assert_eq!(tree.root(), expected);

        let proof = tree.create_proof(f(3)).expect("proof should succeed");
        assert_eq!(proof.siblings, vec![ZERO, low]);
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let mut tree = tree();
        tree.add(f(7), f(1)).expect("add should succeed");
        let root = tree.root();
        assert_eq!(
            tree.add(f(7), f(2)),
            Err(StashError::KeyCollision { key: f(7) })
        );
        assert_eq!(tree.root(), root);
    }

    #[test]
    fn delete_restores_previous_root() {
        let mut tree = tree();
        tree.add(f(2), f(20)).expect("add should succeed");
        tree.add(f(6), f(60)).expect("add should succeed");
        let before = tree.root();

        tree.add(f(14), f(140)).expect("add should succeed");
        assert_ne!(tree.root(), before);
        assert_eq!(tree.delete(f(14)), Ok(f(140)));
        assert_eq!(tree.root(), before);
        assert_eq!(tree.leaf_count(), 2);
    }

    #[test]
    fn deleting_last_leaf_empties_tree() {
        let mut tree = tree();
        tree.add(f(9), f(90)).expect("add should succeed");
        tree.delete(f(9)).expect("delete should succeed");
        assert_eq!(tree.root(), ZERO);
        assert_eq!(tree.leaf_count(), 0);
    }

    #[test]
    fn delete_absent_key_fails() {
        let mut tree = tree();
        tree.add(f(1), f(1)).expect("add should succeed");
        assert_eq!(
            tree.delete(f(3)),
            Err(StashError::KeyNotFound { key: f(3) })
        );
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let keys = [f(4), f(12), f(5), f(1023), f(8)];
        let mut forward = tree();
        for key in keys {
            forward.add(key, key + f(1)).expect("add should succeed");
        }
        let mut backward = tree();
        for key in keys.iter().rev() {
            backward.add(*key, *key + f(1)).expect("add should succeed");
        }
        assert_eq!(forward.root(), backward.root());
    }

    #[test]
    fn proofs_verify_against_current_root() {
        let mut tree = tree();
        for key in [f(3), f(10), f(17)] {
            tree.add(key, key * f(2)).expect("add should succeed");
        }
        let hasher = Hasher::default();
        let member = tree.create_proof(f(10)).expect("proof should succeed");
        assert!(member.membership);
        assert!(member.verify(&hasher));

        let absent = tree.create_proof(f(11)).expect("proof should succeed");
        assert!(!absent.membership);
        assert!(absent.verify(&hasher));

        tree.delete(f(17)).expect("delete should succeed");
        assert!(!member.verify_against(&hasher, tree.root()));
    }
}
