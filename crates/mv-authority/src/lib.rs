//! # Authority Proof Server
//!
//! The authority side of the validity protocol: the process that owns
//! the Merkle tree and answers proof requests.
//!
//! ## Purpose
//!
//! Given a transaction identifier, produce the ordered sibling-hash
//! path a client needs to recompute the tree root from that
//! transaction's leaf — without shipping the tree.
//!
//! ## Module Structure
//!
//! ```text
//! mv-authority/
//! ├── domain/      # Array-backed Merkle tree, proof-path extraction, errors
//! ├── service.rs   # ProofService: transaction id → leaf index → ProofResponse
//! ├── server.rs    # TCP accept loop, one bounded task per connection
//! └── config.rs    # AuthorityConfig
//! ```
//!
//! ## Protocol
//!
//! One request per connection: read a transaction id line, write the
//! proof path one sibling token per line (or `NOT_FOUND`), close. The
//! close is the end-of-path marker.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod server;
pub mod service;

// Re-exports
pub use config::AuthorityConfig;
pub use domain::{AuthorityError, MerkleTree, SENTINEL_HASH};
pub use server::ProofServer;
pub use service::ProofService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
