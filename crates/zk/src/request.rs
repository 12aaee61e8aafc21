//! Proof requests: one per provable transition.
//!
//! Each request names the external circuit and carries its inputs in the
//! circuit's declared layout. Player projections are always taken from the
//! state *before* the transition, and `old_identity` is that state's identity,
//! so the circuit can tie the proof to the previously published value.

use froglin_core::{CircuitInput, Field, Froglin, GameConfig, Player, PlayerError};

use crate::prover::ProofError;

/// External circuits this crate builds inputs for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CircuitKind {
    ManaBoost,
    StashDeposit,
    StashWithdraw,
    CaptureFroglin,
}

impl CircuitKind {
    /// Circuit package name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ManaBoost => "mana_boost",
            Self::StashDeposit => "stash_deposit",
            Self::StashWithdraw => "stash_withdraw",
            Self::CaptureFroglin => "capture_froglin",
        }
    }
}

impl core::fmt::Display for CircuitKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProofRequest {
    pub circuit: CircuitKind,
    pub inputs: CircuitInput,
}

impl ProofRequest {
    /// Claiming `total_mana` from the pre-claim player.
    pub fn mana_boost(pre: &Player, total_mana: Field) -> Self {
        Self {
            circuit: CircuitKind::ManaBoost,
            inputs: player_inputs(pre).with_scalar("total_mana", &total_mana),
        }
    }

    /// Depositing `froglin`, with the stash root after the deposit.
    pub fn stash_deposit(pre: &Player, froglin: &Froglin, new_root: Field) -> Self {
        Self {
            circuit: CircuitKind::StashDeposit,
            inputs: player_inputs(pre)
                .with("froglin", froglin.to_circuit_input(pre.catalog()))
                .with_scalar("new_root", &new_root),
        }
    }

    /// Withdrawing `id`; the membership proof is taken from the pre-withdraw
    /// stash and padded to the circuit's fixed depth.
    pub fn stash_withdraw(pre: &Player, id: Field) -> Result<Self, PlayerError> {
        let proof = pre.stash_proof(id)?;
        let siblings = proof.padded_siblings(GameConfig::STASH_DEPTH)?;
        Ok(Self {
            circuit: CircuitKind::StashWithdraw,
            inputs: CircuitInput::record()
                .with_scalar("id", &id)
                .with("siblings", CircuitInput::scalars(&siblings))
                .with_scalar("secret", &pre.secret())
                .with_scalar("old_root", &proof.root),
        })
    }

    /// Capturing `froglin` into the pre-capture player's inventory.
    pub fn capture_froglin(pre: &Player, froglin: &Froglin) -> Self {
        Self {
            circuit: CircuitKind::CaptureFroglin,
            inputs: player_inputs(pre).with("froglin", froglin.to_circuit_input(pre.catalog())),
        }
    }

    /// Inputs as the JSON object the prover consumes.
    pub fn to_json(&self) -> Result<String, ProofError> {
        serde_json::to_string(&self.inputs)
            .map_err(|e| ProofError::SerializationError(e.to_string()))
    }
}

/// `player`, `secret`, and `old_identity` of the pre-state.
fn player_inputs(pre: &Player) -> CircuitInput {
    CircuitInput::record()
        .with("player", pre.to_circuit_input())
        .with_scalar("secret", &pre.secret())
        .with_scalar("old_identity", &pre.generate_identity().identity)
}
