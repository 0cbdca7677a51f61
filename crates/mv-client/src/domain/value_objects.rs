//! # Domain Value Objects
//!
//! Immutable result types for the validity client.

use serde::{Deserialize, Serialize};

/// Outcome of verifying one transaction. Produced once per transaction
/// per session, never mutated after creation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The fetched path folds to the known root.
    Valid,
    /// The authority answered, but the path does not fold to the known
    /// root (or the transaction is unknown to the authority).
    Invalid,
    /// The proof could not be fetched; carries the reason. The
    /// transaction is accounted for, never silently dropped.
    Errored(String),
}

impl VerificationOutcome {
    /// Create an errored outcome from any displayable reason.
    pub fn errored(reason: impl Into<String>) -> Self {
        Self::Errored(reason.into())
    }

    /// Is this outcome `Valid`?
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}
