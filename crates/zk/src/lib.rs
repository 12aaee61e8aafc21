//! Proof requests and the prover seam.
//!
//! This crate turns player transitions into inputs for the external circuits:
//! - **Requests**: one [`ProofRequest`] per provable transition
//! - **Prover**: the [`Prover`] trait implemented by proving backends
//! - **Stub**: digest prover for fast development iteration
//! - **Session**: [`ProvingSession`] applies a transition and proves it
//!
//! # Feature Flags
//!
//! - `stub` (default): Stub prover returning request digests
//!
//! # Examples
//!
//! ```toml
//! # Default: stub backend
//! froglin-zk = { workspace = true }
//!
//! # Bring your own backend
//! froglin-zk = { workspace = true, default-features = false }
//! ```

pub mod config;
pub mod prover;
pub mod request;
pub mod session;

#[cfg(feature = "stub")]
pub mod stub;

pub use config::ProverConfig;
pub use prover::{ProofBackend, ProofData, ProofError, Prover};
pub use request::{CircuitKind, ProofRequest};
pub use session::{ProvingSession, SessionError, Transition};

#[cfg(feature = "stub")]
pub use stub::StubProver;

// Re-export commonly used types from froglin-core
pub use froglin_core::{CircuitInput, Field, Identity, Player};
