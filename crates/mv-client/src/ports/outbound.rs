//! # Outbound Ports
//!
//! The proof-channel dependency the orchestrator drives, plus a mock
//! implementation for testing.

use std::collections::HashMap;

use async_trait::async_trait;
use shared_types::ProofResponse;

use crate::domain::ClientError;

/// Proof channel - outbound port.
///
/// One call fetches one transaction's proof over its own connection;
/// implementations do not pipeline or reuse connections.
#[async_trait]
pub trait ProofFetcher: Send + Sync {
    /// Fetch the proof response for a transaction.
    async fn fetch_proof(&self, transaction: &str) -> Result<ProofResponse, ClientError>;

    /// Human-readable endpoint identifier (for logging).
    fn endpoint(&self) -> String;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Mock proof fetcher for orchestrator tests.
#[derive(Clone, Default)]
pub struct MockProofFetcher {
    /// Canned responses per transaction id.
    responses: HashMap<String, ProofResponse>,
    /// Transactions that should fail with a connection error.
    failing: HashMap<String, ClientError>,
}

impl MockProofFetcher {
    /// Create an empty mock; unknown transactions get `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response for a transaction.
    pub fn with_response(mut self, transaction: &str, response: ProofResponse) -> Self {
        self.responses.insert(transaction.to_string(), response);
        self
    }

    /// Register a failure for a transaction.
    pub fn with_failure(mut self, transaction: &str, error: ClientError) -> Self {
        self.failing.insert(transaction.to_string(), error);
        self
    }
}

#[async_trait]
impl ProofFetcher for MockProofFetcher {
    async fn fetch_proof(&self, transaction: &str) -> Result<ProofResponse, ClientError> {
        if let Some(error) = self.failing.get(transaction) {
            return Err(error.clone());
        }

        Ok(self
            .responses
            .get(transaction)
            .cloned()
            .unwrap_or(ProofResponse::NotFound))
    }

    fn endpoint(&self) -> String {
        "mock".to_string()
    }
}
