//! # Domain Errors
//!
//! Error types for the validity client.
//!
//! A proof that folds to the wrong root is NOT an error: that is the
//! normal `Invalid` outcome. Errors here mean the proof could not be
//! fetched at all.

use thiserror::Error;

/// Client error types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The channel could not be established, dropped mid-exchange, or
    /// exceeded a timeout.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The peer sent data that cannot be parsed as proof lines.
    #[error("Protocol error: {0}")]
    Protocol(String),
}
