//! Stub prover for testing and development.

use sha2::{Digest, Sha256};

use crate::prover::{ProofBackend, ProofData, ProofError, Prover};
use crate::request::ProofRequest;

/// Returns `SHA-256(circuit ‖ json inputs)` instead of a proof.
///
/// Proofs are deterministic and bound to their request, which is enough to
/// exercise session plumbing. Use this for:
/// - Fast iteration during development
/// - Testing without the circuit toolchain
///
/// # Warning
///
/// Do not use in production - provides no cryptographic guarantees.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubProver;

impl StubProver {
    /// Creates a new stub prover instance.
    pub fn new() -> Self {
        Self
    }

    fn digest(request: &ProofRequest) -> Result<Vec<u8>, ProofError> {
        let mut hasher = Sha256::new();
        hasher.update(request.circuit.as_str().as_bytes());
        hasher.update(request.to_json()?.as_bytes());
        Ok(hasher.finalize().to_vec())
    }
}

impl Prover for StubProver {
    fn prove(&self, request: &ProofRequest) -> Result<ProofData, ProofError> {
        Ok(ProofData {
            circuit: request.circuit,
            bytes: Self::digest(request)?,
            backend: ProofBackend::Stub,
        })
    }

    fn verify(&self, request: &ProofRequest, proof: &ProofData) -> Result<bool, ProofError> {
        // Only verify stub proofs
        if proof.backend != ProofBackend::Stub {
            return Err(ProofError::UnsupportedBackend {
                backend: proof.backend,
            });
        }
        if proof.circuit != request.circuit {
            return Err(ProofError::CircuitMismatch {
                expected: request.circuit,
                actual: proof.circuit,
            });
        }
        Ok(proof.bytes == Self::digest(request)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::CircuitKind;
    use froglin_core::{CircuitInput, Field};

    fn request(value: u64) -> ProofRequest {
        ProofRequest {
            circuit: CircuitKind::ManaBoost,
            inputs: CircuitInput::record().with_scalar("total_mana", &Field::from(value)),
        }
    }

    #[test]
    fn proofs_bind_to_their_request() {
        let prover = StubProver::new();
        let proof = prover.prove(&request(1)).expect("prove");
        assert_eq!(proof.bytes.len(), 32);
        assert!(prover.verify(&request(1), &proof).expect("verify"));
        assert!(!prover.verify(&request(2), &proof).expect("verify"));
    }

    #[test]
    fn rejects_foreign_backends() {
        let prover = StubProver::new();
        let mut proof = prover.prove(&request(1)).expect("prove");
        proof.backend = ProofBackend::External;
        assert!(matches!(
            prover.verify(&request(1), &proof),
            Err(ProofError::UnsupportedBackend { .. })
        ));
    }

    #[test]
    fn rejects_wrong_circuit() {
        let prover = StubProver::new();
        let mut proof = prover.prove(&request(1)).expect("prove");
        proof.circuit = CircuitKind::StashDeposit;
        assert!(matches!(
            prover.verify(&request(1), &proof),
            Err(ProofError::CircuitMismatch { .. })
        ));
    }
}
