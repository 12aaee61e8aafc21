//! Proving session: applies player transitions together with their proofs.
//!
//! Every transition runs on a copy of the player. The copy replaces the
//! session's player only after the request was built and, when proving is
//! enabled, the backend returned a proof. A failure at any step leaves the
//! session's player untouched.

use froglin_core::{
    Field, Froglin, FroglinType, Identity, InventoryError, Player, PlayerError,
};

use crate::config::ProverConfig;
use crate::prover::{ProofData, ProofError, Prover};
use crate::request::ProofRequest;

/// Result of one applied transition.
#[derive(Clone, Debug)]
pub struct Transition<T> {
    /// Operation-specific result (credited mana, stash key, moved Froglin).
    pub outcome: T,
    pub request: ProofRequest,
    /// `None` in dry-run mode.
    pub proof: Option<ProofData>,
    /// Identity of the state after the transition, to publish on chain.
    pub identity: Identity,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error(transparent)]
    Proof(#[from] ProofError),
}

pub struct ProvingSession<P: Prover> {
    player: Player,
    prover: P,
    config: ProverConfig,
}

impl<P: Prover> ProvingSession<P> {
    pub fn new(player: Player, prover: P, config: ProverConfig) -> Self {
        Self {
            player,
            prover,
            config,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn prover(&self) -> &P {
        &self.prover
    }

    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    pub fn into_player(self) -> Player {
        self.player
    }

    /// Claims the cumulative mana entitlement `total`.
    pub fn claim_mana(&mut self, total: Field) -> Result<Transition<Field>, SessionError> {
        let mut next = self.player.clone();
        let credited = next.add_mana(total)?;
        let request = ProofRequest::mana_boost(&self.player, total);
        self.apply(next, credited, request)
    }

    /// Captures a new Froglin of `kind` under `id`.
    pub fn capture(
        &mut self,
        kind: FroglinType,
        id: Field,
    ) -> Result<Transition<Froglin>, SessionError> {
        let mut next = self.player.clone();
        let froglin = next.capture_froglin(kind, id)?;
        let request = ProofRequest::capture_froglin(&self.player, &froglin);
        self.apply(next, froglin, request)
    }

    /// Deposits a held Froglin. The outcome is its stash key.
    pub fn deposit(&mut self, id: Field) -> Result<Transition<Field>, SessionError> {
        let mut next = self.player.clone();
        let key = next.deposit_to_stash(id)?;
        let froglin = self
            .player
            .get_froglin(id)
            .copied()
            .ok_or(PlayerError::from(InventoryError::NotFound {
                kind: "froglin",
                id,
            }))?;
        let request = ProofRequest::stash_deposit(&self.player, &froglin, next.stash_root());
        self.apply(next, key, request)
    }

    /// Withdraws a stashed Froglin back into the inventory.
    pub fn withdraw(&mut self, id: Field) -> Result<Transition<Froglin>, SessionError> {
        let mut next = self.player.clone();
        let froglin = next.withdraw_from_stash(id)?;
        let request = ProofRequest::stash_withdraw(&self.player, id)?;
        self.apply(next, froglin, request)
    }

    fn apply<T>(
        &mut self,
        next: Player,
        outcome: T,
        request: ProofRequest,
    ) -> Result<Transition<T>, SessionError> {
        let proof = if self.config.enable_proving {
            Some(self.prover.prove(&request)?)
        } else {
            tracing::debug!(circuit = %request.circuit, "proving disabled, dry run");
            None
        };

        let identity = next.generate_identity();
        self.player = next;
        tracing::info!(
            circuit = %request.circuit,
            proved = proof.is_some(),
            stash_root = %self.player.stash_root(),
            "transition applied"
        );

        Ok(Transition {
            outcome,
            request,
            proof,
            identity,
        })
    }
}
