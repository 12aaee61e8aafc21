//! Poseidon2 hash engine over the BN254 scalar field.
//!
//! Provides native (non-circuit) hashing for:
//! - Entity and player commitments
//! - Identity derivation
//! - Stash keys and sparse Merkle tree nodes
//!
//! # Parameters
//!
//! - Field: BN254 (254-bit prime)
//! - State width 4 (rate 3, capacity 1)
//! - External rounds: 8
//! - Internal rounds: 56
//! - S-box: x^5
//!
//! The sponge is the one of Noir's `std::hash::poseidon2` and Barretenberg's
//! `Poseidon2::hash`: the capacity element starts at `len · 2^64`, inputs are
//! added three at a time with a permutation after each chunk, and the digest
//! is `state[0]`. Digests therefore equal what the circuits compute.
//!
//! # Arity
//!
//! The length is bound through the capacity IV, so `[a]` and `[a, 0]` hash
//! differently. Callers still fix one arity per logical use (stash keys hash
//! 1 element, nodes 2, leaves and identities 3).

mod constants;

use constants::{EXTERNAL_ROUNDS, INTERNAL_DIAGONAL, INTERNAL_ROUNDS, ROUND_CONSTANTS, WIDTH};

use crate::field::Field;

const RATE: usize = WIDTH - 1;

/// `2^64`, the multiplier of the length in the capacity IV.
const TWO_POW_64: Field = ark_ff::MontFp!("18446744073709551616");

/// Hashing capability handed to every component that commits or hashes.
///
/// The round constants are compiled in, so the handle is free to copy; it
/// exists so that every hashing call site receives the engine explicitly.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Hasher {
    _private: (),
}

impl Hasher {
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Hashes a sequence of field elements to a single element.
    pub fn hash(&self, elements: &[Field]) -> Field {
        let mut state = [Field::from(0u64); WIDTH];
        state[RATE] = Field::from(elements.len() as u64) * TWO_POW_64;

        if elements.is_empty() {
            permute(&mut state);
        }
        for chunk in elements.chunks(RATE) {
            for (lane, input) in state.iter_mut().zip(chunk) {
                *lane += input;
            }
            permute(&mut state);
        }
        state[0]
    }

    #[inline]
    pub fn hash_one(&self, input: Field) -> Field {
        self.hash(&[input])
    }

    /// Order matters: `hash_two(a, b) != hash_two(b, a)`.
    #[inline]
    pub fn hash_two(&self, left: Field, right: Field) -> Field {
        self.hash(&[left, right])
    }

    /// The raw width-4 permutation, exposed for cross-checks against the
    /// circuit's `poseidon2_permutation` black box.
    pub fn permutation(&self, mut state: [Field; WIDTH]) -> [Field; WIDTH] {
        permute(&mut state);
        state
    }
}

impl core::fmt::Debug for Hasher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Hasher")
            .field("permutation", &"poseidon2-bn254-t4")
            .finish()
    }
}

fn permute(state: &mut [Field; WIDTH]) {
    let half = EXTERNAL_ROUNDS / 2;

    external_matrix(state);
    for round in &ROUND_CONSTANTS[..half] {
        external_round(state, round);
    }
    for round in &ROUND_CONSTANTS[half..half + INTERNAL_ROUNDS] {
        state[0] = sbox(state[0] + round[0]);
        internal_matrix(state);
    }
    for round in &ROUND_CONSTANTS[half + INTERNAL_ROUNDS..] {
        external_round(state, round);
    }
}

fn external_round(state: &mut [Field; WIDTH], constants: &[Field; WIDTH]) {
    for (lane, constant) in state.iter_mut().zip(constants) {
        *lane = sbox(*lane + constant);
    }
    external_matrix(state);
}

#[inline]
fn sbox(x: Field) -> Field {
    let square = x * x;
    square * square * x
}

/// Barretenberg's 4x4 MDS multiplication, rows
/// `[5 7 1 3] [4 6 1 1] [1 3 5 7] [1 1 4 6]`.
fn external_matrix(state: &mut [Field; WIDTH]) {
    let [a, b, c, d] = *state;
    let t0 = a + b;
    let t1 = c + d;
    let t2 = b + b + t1;
    let t3 = d + d + t0;
    let t4 = (t1 + t1) + (t1 + t1) + t3;
    let t5 = (t0 + t0) + (t0 + t0) + t2;
    let t6 = t3 + t5;
    let t7 = t2 + t4;
    *state = [t6, t5, t7, t4];
}

fn internal_matrix(state: &mut [Field; WIDTH]) {
    let sum: Field = state.iter().sum();
    for (lane, diagonal) in state.iter_mut().zip(INTERNAL_DIAGONAL) {
        *lane = *lane * diagonal + sum;
    }
}
