//! Universal prover interface for zero-knowledge proof generation.
//!
//! Defines the common interface implemented by all proving backends.

use crate::request::{CircuitKind, ProofRequest};

/// ZK proof data container.
///
/// Contains serialized proof bytes, the circuit they prove, and the backend
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ProofData {
    pub circuit: CircuitKind,
    pub bytes: Vec<u8>,
    pub backend: ProofBackend,
}

impl ProofData {
    /// Encodes the proof for storage or submission.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ProofError> {
        bincode::serialize(self).map_err(|e| ProofError::SerializationError(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ProofError> {
        bincode::deserialize(bytes).map_err(|e| ProofError::SerializationError(e.to_string()))
    }

    /// Lowercase hex of the raw proof bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

/// Identifies which proving backend generated a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ProofBackend {
    #[cfg(feature = "stub")]
    Stub,

    /// Out-of-process prover supplied by the embedder.
    External,
}

/// Errors that can occur during proof generation or verification.
#[derive(Debug, thiserror::Error)]
pub enum ProofError {
    #[error("Proving backend failed: {0}")]
    BackendError(String),

    #[error("Proof is for circuit {actual}, expected {expected}")]
    CircuitMismatch {
        expected: CircuitKind,
        actual: CircuitKind,
    },

    #[error("Backend {backend:?} cannot verify this proof")]
    UnsupportedBackend { backend: ProofBackend },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Universal prover interface for all proving backends.
///
/// Backends receive the request already laid out for the named circuit; they
/// never see player state directly.
pub trait Prover: Send + Sync {
    /// Generate a proof for `request`.
    fn prove(&self, request: &ProofRequest) -> Result<ProofData, ProofError>;

    /// Verify a proof locally against the request it claims to prove.
    ///
    /// Note: This is host-side verification. On-chain verification happens
    /// in the contract collaborators.
    fn verify(&self, request: &ProofRequest, proof: &ProofData) -> Result<bool, ProofError>;
}
