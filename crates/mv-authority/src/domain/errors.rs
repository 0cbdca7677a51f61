//! # Domain Errors
//!
//! Error types for the authority subsystem.

use thiserror::Error;

/// Authority error types.
#[derive(Debug, Error)]
pub enum AuthorityError {
    /// The tree was built with no transactions.
    #[error("Authority tree has no transactions")]
    EmptyTree,

    /// The same transaction identifier appears twice in the tree source.
    #[error("Duplicate transaction in tree source: {0:?}")]
    DuplicateTransaction(String),

    /// A leaf index outside the tree was requested.
    #[error("Leaf index {index} out of range ({max} leaves)")]
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Number of leaves in the tree.
        max: usize,
    },

    /// The request line could not be read as a transaction identifier.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// A connection stalled past the configured read timeout.
    #[error("Connection timed out")]
    Timeout,

    /// I/O failure while servicing a connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
