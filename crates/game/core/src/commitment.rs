//! Commitment and identity scheme.
//!
//! ```text
//! commitment = H(serialize(entity) ‖ secret)
//! identity   = H(commitment, pk.x, pk.y)      pk = secret · Base8
//! ```
//!
//! Identical state under an identical secret yields identical values. Only
//! the secret tells otherwise-equal actors apart.

use crate::curve::{self, Point};
use crate::field::Field;
use crate::hash::Hasher;

/// Canonical field serialization plus the commitment built on top of it.
///
/// `serialize` order is part of the circuit layout.
pub trait Commit {
    fn serialize(&self) -> Vec<Field>;

    fn commit(&self, hasher: &Hasher, secret: Field) -> Field {
        let mut preimage = self.serialize();
        preimage.push(secret);
        hasher.hash(&preimage)
    }
}

/// Published pair binding a state commitment to the secret's public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Identity {
    pub commitment: Field,
    pub identity: Field,
}

impl Identity {
    /// Binds an existing commitment to `secret · Base8`.
    pub fn derive(hasher: &Hasher, commitment: Field, secret: Field) -> Self {
        let Point { x, y } = curve::derive_public_key(&secret);
        Self {
            commitment,
            identity: hasher.hash(&[commitment, x, y]),
        }
    }
}

/// Commits `entity` under `secret` and derives its identity.
pub fn generate_identity<T: Commit + ?Sized>(hasher: &Hasher, entity: &T, secret: Field) -> Identity {
    let commitment = entity.commit(hasher, secret);
    Identity::derive(hasher, commitment, secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair(Field, Field);

    impl Commit for Pair {
        fn serialize(&self) -> Vec<Field> {
            vec![self.0, self.1]
        }
    }

    #[test]
    fn commitment_appends_secret() {
        let hasher = Hasher::default();
        let pair = Pair(Field::from(1u64), Field::from(2u64));
        let secret = Field::from(123u64);
        assert_eq!(
            pair.commit(&hasher, secret),
            hasher.hash(&[Field::from(1u64), Field::from(2u64), secret])
        );
    }

    #[test]
    fn identity_is_deterministic() {
        let hasher = Hasher::default();
        let pair = Pair(Field::from(1u64), Field::from(2u64));
        let secret = Field::from(123u64);
        assert_eq!(
            generate_identity(&hasher, &pair, secret),
            generate_identity(&hasher, &pair, secret)
        );
    }

    #[test]
    fn secret_changes_both_values() {
        let hasher = Hasher::default();
        let pair = Pair(Field::from(1u64), Field::from(2u64));
        let a = generate_identity(&hasher, &pair, Field::from(123u64));
        let b = generate_identity(&hasher, &pair, Field::from(124u64));
        assert_ne!(a.commitment, b.commitment);
        assert_ne!(a.identity, b.identity);
    }

    #[test]
    fn identity_binds_public_key() {
        let hasher = Hasher::default();
        let commitment = Field::from(77u64);
        let a = Identity::derive(&hasher, commitment, Field::from(1u64));
        let b = Identity::derive(&hasher, commitment, Field::from(2u64));
        assert_eq!(a.commitment, b.commitment);
        assert_ne!(a.identity, b.identity);
    }
}
