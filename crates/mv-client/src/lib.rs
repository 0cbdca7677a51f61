//! # Validity Client
//!
//! The client side of the validity protocol: confirm that specific
//! transactions are included in a Merkle tree whose root is known in
//! advance, without transferring the tree.
//!
//! ## Flow
//!
//! For each transaction, independently: open one connection to the
//! authority, send the transaction id, read the sibling-hash path until
//! the authority closes the stream, fold the path from the leaf hash
//! and compare against the known root. Every transaction ends up in
//! exactly one of `Valid`, `Invalid`, or `Errored(reason)`.
//!
//! ## Module Structure
//!
//! ```text
//! mv-client/
//! ├── domain/          # VerificationOutcome, ClientError
//! ├── algorithms/      # Root verifier (the pure fold)
//! ├── ports/           # ProofFetcher outbound port + mock
//! ├── adapters/        # One-shot TCP proof channel
//! ├── application/     # ValidityRequest orchestrator
//! └── config.rs        # ClientConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::TcpProofChannel;
pub use algorithms::{fold_path, verify_root};
pub use application::ValidityRequest;
pub use config::ClientConfig;
pub use domain::{ClientError, VerificationOutcome};
pub use ports::{MockProofFetcher, ProofFetcher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
