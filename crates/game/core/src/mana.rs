//! Claimed vs. spendable mana.
//!
//! `claimed` is the cumulative entitlement the player has already converted
//! into spendable `mana`. Claiming a new total credits only the difference.
//! Both values live in the field, so every subtraction is checked against the
//! integer order before it happens.

use crate::error::{ErrorSeverity, GameError};
use crate::field::Field;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManaLedger {
    mana: Field,
    claimed: Field,
}

impl ManaLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a ledger from decoded public state.
    pub fn from_parts(mana: Field, claimed: Field) -> Self {
        Self { mana, claimed }
    }

    pub fn mana(&self) -> Field {
        self.mana
    }

    pub fn claimed(&self) -> Field {
        self.claimed
    }

    /// Amount `add_mana(total)` would credit, without mutating.
    pub fn unclaimed(&self, total: Field) -> Result<Field, ManaError> {
        if total < self.claimed {
            return Err(ManaError::ClaimRegression {
                total,
                claimed: self.claimed,
            });
        }
        Ok(total - self.claimed)
    }

    /// Claims the entitlement `total`, crediting `total - claimed`.
    ///
    /// Returns the credited amount.
    pub fn add_mana(&mut self, total: Field) -> Result<Field, ManaError> {
        let unclaimed = self.unclaimed(total)?;
        let mana = self.mana + unclaimed;
        if mana < self.mana {
            return Err(ManaError::Overflow);
        }
        self.mana = mana;
        self.claimed = total;
        tracing::debug!(%unclaimed, %total, "mana claimed");
        Ok(unclaimed)
    }

    pub fn remove_mana(&mut self, amount: Field) -> Result<(), ManaError> {
        if amount > self.mana {
            return Err(ManaError::Insufficient {
                requested: amount,
                available: self.mana,
            });
        }
        self.mana -= amount;
        tracing::debug!(%amount, remaining = %self.mana, "mana spent");
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ManaError {
    #[error("cannot spend {requested} mana, only {available} available")]
    Insufficient { requested: Field, available: Field },

    #[error("claimed total {total} is below the already claimed {claimed}")]
    ClaimRegression { total: Field, claimed: Field },

    #[error("mana balance would exceed the field modulus")]
    Overflow,
}

impl GameError for ManaError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Insufficient { .. } => ErrorSeverity::Recoverable,
            Self::ClaimRegression { .. } | Self::Overflow => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Insufficient { .. } => "MANA_INSUFFICIENT",
            Self::ClaimRegression { .. } => "MANA_CLAIM_REGRESSION",
            Self::Overflow => "MANA_OVERFLOW",
        }
    }
}
