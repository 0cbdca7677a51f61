//! # Request Orchestrator
//!
//! Drives one verification pass: for every transaction, fetch its
//! proof over the channel and evaluate it with the root verifier.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_types::{Hash, ProofResponse};

use crate::algorithms::verify_root;
use crate::config::ClientConfig;
use crate::domain::VerificationOutcome;
use crate::ports::ProofFetcher;

/// One verification session: an immutable (fetcher endpoint, known
/// root, transaction list) triple that performs exactly one pass.
///
/// Transactions are verified independently and concurrently; each task
/// produces its own `(transaction, outcome)` pair and the result map is
/// assembled from joined tasks, so every entry is written exactly once.
/// Dropping the `verify_all` future aborts in-flight fetches.
pub struct ValidityRequest<F: ProofFetcher + 'static> {
    config: ClientConfig,
    known_root: Hash,
    transactions: Vec<String>,
    fetcher: Arc<F>,
}

impl<F: ProofFetcher + 'static> ValidityRequest<F> {
    /// Create a session. The triple is fixed for its lifetime.
    pub fn new(
        config: ClientConfig,
        known_root: Hash,
        transactions: Vec<String>,
        fetcher: Arc<F>,
    ) -> Self {
        Self {
            config,
            known_root,
            transactions,
            fetcher,
        }
    }

    /// Number of transactions this session will verify.
    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Run the verification pass.
    ///
    /// Every input transaction is accounted for in the result, in one
    /// of `Valid`, `Invalid`, or `Errored(reason)`; a fetch failure for
    /// one transaction never aborts the others. No retries.
    pub async fn verify_all(&self) -> BTreeMap<String, VerificationOutcome> {
        let session = Uuid::new_v4();
        info!(
            %session,
            endpoint = %self.fetcher.endpoint(),
            transactions = self.transactions.len(),
            "Verification pass started"
        );

        let limiter = Arc::new(Semaphore::new(self.config.max_in_flight));
        let mut tasks = JoinSet::new();

        for transaction in self.transactions.iter().cloned() {
            let fetcher = Arc::clone(&self.fetcher);
            let limiter = Arc::clone(&limiter);
            let known_root = self.known_root;

            tasks.spawn(async move {
                let permit = limiter.acquire_owned().await;
                if permit.is_err() {
                    // Semaphore closed: the pass is being torn down.
                    return (transaction, VerificationOutcome::errored("cancelled"));
                }
                let outcome = verify_one(fetcher.as_ref(), &known_root, &transaction).await;
                (transaction, outcome)
            });
        }

        let mut results = BTreeMap::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((transaction, outcome)) => {
                    debug!(%session, transaction, ?outcome, "Transaction resolved");
                    results.insert(transaction, outcome);
                }
                Err(e) => {
                    // verify_one never panics; this arm is join
                    // machinery failure only. Log loudly regardless.
                    warn!(%session, error = %e, "Verification task failed to join");
                }
            }
        }

        let valid = results.values().filter(|o| o.is_valid()).count();
        info!(
            %session,
            valid,
            total = results.len(),
            "Verification pass finished"
        );

        results
    }
}

/// Verify a single transaction: fetch, fold, compare.
async fn verify_one<F: ProofFetcher + ?Sized>(
    fetcher: &F,
    known_root: &Hash,
    transaction: &str,
) -> VerificationOutcome {
    match fetcher.fetch_proof(transaction).await {
        Ok(ProofResponse::Path(path)) => {
            if verify_root(known_root, transaction, &path) {
                VerificationOutcome::Valid
            } else {
                VerificationOutcome::Invalid
            }
        }
        // The authority answered: it cannot attest inclusion. That is
        // a definitive negative, not a transport failure.
        Ok(ProofResponse::NotFound) => VerificationOutcome::Invalid,
        Err(e) => VerificationOutcome::errored(e.to_string()),
    }
}
