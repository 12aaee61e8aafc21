//! Common error infrastructure for froglin-core.
//!
//! This module provides the shared severity classification and the trait every
//! error enum implements. Domain-specific errors (e.g. `ManaError`,
//! `StashError`) are defined in their respective modules alongside the
//! operations they guard.
//!
//! # Design Principles
//!
//! - **Checked before mutation**: every error is raised before any state is
//!   written, so a failed operation leaves the player untouched
//! - **Severity Classification**: errors are categorized for recovery strategies
//! - **Deterministic**: no error depends on wall-clock or global state

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller can change state (free a slot, claim mana) and retry
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency that requires investigation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - retry after changing state.
    ///
    /// Examples: inventory full, insufficient mana
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: froglin not found, value outside the field
    Validation,

    /// Internal error - local data structure out of sync.
    ///
    /// Examples: stash node missing from the node store
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all froglin-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_helpers() {
        assert!(ErrorSeverity::Recoverable.is_recoverable());
        assert!(!ErrorSeverity::Validation.is_recoverable());
        assert!(ErrorSeverity::Internal.is_internal());
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
    }
}
