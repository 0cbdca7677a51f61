//! # End-to-End Verification Tests
//!
//! Tests the complete validity flow against a real authority:
//!
//! ```text
//! [ProofService] ──tree──→ [ProofServer] ──TCP──→ [TcpProofChannel]
//!                                                       │
//!                                                       ↓
//!                                               [ValidityRequest]
//!                                                       │
//!                                                       ↓
//!                                        Valid / Invalid / Errored
//! ```
//!
//! ## Test Categories
//!
//! 1. **Happy Path**: Every known transaction verifies against the root
//! 2. **Unknown Transactions**: `NOT_FOUND` maps to `Invalid`
//! 3. **Wrong Root**: Real paths folded against the wrong root
//! 4. **Unreachable Authority**: Connection failures map to `Errored`
//! 5. **Concurrency**: Many one-shot connections in flight at once

// =============================================================================
// TEST FIXTURES (only compiled during tests)
// =============================================================================

#[cfg(test)]
use std::net::SocketAddr;

#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use mv_authority::{AuthorityConfig, ProofServer, ProofService};

#[cfg(test)]
use mv_client::{ClientConfig, TcpProofChannel, ValidityRequest};

#[cfg(test)]
use shared_types::Hash;

/// Start an authority over the given transactions on an ephemeral
/// port; returns its address and advertised root.
#[cfg(test)]
async fn start_authority(transactions: &[&str]) -> (SocketAddr, Hash) {
    let service = Arc::new(
        ProofService::new(transactions.iter().map(|s| s.to_string()).collect())
            .expect("tree source must build"),
    );
    let root = service.root();

    let server = ProofServer::new(service, AuthorityConfig::for_testing());
    let listener = server.bind().await.expect("ephemeral bind must succeed");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(server.serve(listener));

    (addr, root)
}

#[cfg(test)]
fn client_session(
    addr: SocketAddr,
    root: Hash,
    transactions: &[&str],
) -> ValidityRequest<TcpProofChannel> {
    let config = ClientConfig::for_testing();
    let channel = Arc::new(TcpProofChannel::new(
        addr.ip().to_string(),
        addr.port(),
        &config,
    ));
    ValidityRequest::new(
        config,
        root,
        transactions.iter().map(|s| s.to_string()).collect(),
        channel,
    )
}

/// A bound-then-dropped listener leaves a port with no one listening.
#[cfg(test)]
async fn dead_endpoint() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

// =============================================================================
// INTEGRATION TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mv_client::{ProofFetcher, VerificationOutcome};
    use shared_types::ProofResponse;

    /// Test: every known transaction round-trips to Valid (happy path)
    #[tokio::test]
    async fn test_every_known_transaction_verifies() {
        let transactions = ["tx1", "tx2", "tx3", "tx4", "tx5"];
        let (addr, root) = start_authority(&transactions).await;

        let results = client_session(addr, root, &transactions).verify_all().await;

        assert_eq!(results.len(), transactions.len());
        for tx in transactions {
            assert_eq!(results[tx], VerificationOutcome::Valid, "{tx} must verify");
        }
    }

    /// Test: a one-transaction tree still produces a foldable path
    #[tokio::test]
    async fn test_single_transaction_tree_verifies() {
        let (addr, root) = start_authority(&["only"]).await;
        let results = client_session(addr, root, &["only"]).verify_all().await;
        assert_eq!(results["only"], VerificationOutcome::Valid);
    }

    /// Test: an unknown transaction is a definitive Invalid, not an error
    #[tokio::test]
    async fn test_unknown_transaction_is_invalid_not_errored() {
        let (addr, root) = start_authority(&["tx1", "tx2"]).await;

        let results = client_session(addr, root, &["tx1", "ghost"])
            .verify_all()
            .await;

        assert_eq!(results["tx1"], VerificationOutcome::Valid);
        assert_eq!(results["ghost"], VerificationOutcome::Invalid);
    }

    /// Test: genuine paths folded against the wrong root come out Invalid
    #[tokio::test]
    async fn test_wrong_root_makes_everything_invalid() {
        let (addr, _root) = start_authority(&["tx1", "tx2"]).await;

        let wrong_root: Hash = [0xEE; 32];
        let results = client_session(addr, wrong_root, &["tx1", "tx2"])
            .verify_all()
            .await;

        assert_eq!(results["tx1"], VerificationOutcome::Invalid);
        assert_eq!(results["tx2"], VerificationOutcome::Invalid);
    }

    /// Test: connection refusal surfaces as Errored, never Valid/Invalid
    #[tokio::test]
    async fn test_unreachable_authority_is_errored() {
        let addr = dead_endpoint().await;

        let results = client_session(addr, [0u8; 32], &["tx1"]).verify_all().await;
        assert!(matches!(results["tx1"], VerificationOutcome::Errored(_)));
    }

    /// Test: a failing fetch for one transaction leaves the rest of the
    /// batch untouched
    #[tokio::test]
    async fn test_fetch_failure_is_isolated_within_batch() {
        let (addr, root) = start_authority(&["tx1", "tx2"]).await;
        let config = ClientConfig::for_testing();
        let live = TcpProofChannel::new(addr.ip().to_string(), addr.port(), &config);
        let dead = {
            let addr = dead_endpoint().await;
            TcpProofChannel::new(addr.ip().to_string(), addr.port(), &config)
        };

        let proof_tx1 = live.fetch_proof("tx1").await.unwrap();
        let failure = dead.fetch_proof("tx2").await.unwrap_err();

        let mock = mv_client::MockProofFetcher::new()
            .with_response("tx1", proof_tx1)
            .with_failure("tx2", failure);

        let session = ValidityRequest::new(
            config,
            root,
            vec!["tx1".to_string(), "tx2".to_string()],
            Arc::new(mock),
        );
        let results = session.verify_all().await;

        assert_eq!(results["tx1"], VerificationOutcome::Valid);
        assert!(matches!(results["tx2"], VerificationOutcome::Errored(_)));
    }

    /// Test: paths are derived per transaction from the real tree, not
    /// served from a fixed template
    #[tokio::test]
    async fn test_paths_are_transaction_specific() {
        let (addr, _root) = start_authority(&["tx1", "tx2", "tx3", "tx4"]).await;
        let config = ClientConfig::for_testing();
        let channel = TcpProofChannel::new(addr.ip().to_string(), addr.port(), &config);

        let p1 = channel.fetch_proof("tx1").await.unwrap();
        let p2 = channel.fetch_proof("tx2").await.unwrap();
        let p3 = channel.fetch_proof("tx3").await.unwrap();

        assert_ne!(p1, p2);
        assert_ne!(p2, p3);
        // Four leaves means two tree levels above the leaves.
        assert!(matches!(&p1, ProofResponse::Path(path) if path.len() == 2));
    }

    /// Test: many transactions over many simultaneous one-shot connections
    #[tokio::test]
    async fn test_concurrent_batch_against_one_authority() {
        let ids: Vec<String> = (0..20).map(|i| format!("tx{i:02}")).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let (addr, root) = start_authority(&refs).await;

        let results = client_session(addr, root, &refs).verify_all().await;

        assert_eq!(results.len(), ids.len());
        assert!(results.values().all(VerificationOutcome::is_valid));
    }
}
