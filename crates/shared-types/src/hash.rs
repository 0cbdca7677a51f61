//! # Hash Type
//!
//! The 32-byte hash value used throughout the workspace, plus the hex
//! encoding it wears whenever it crosses the wire or a config boundary.

use thiserror::Error;

/// Hash type alias (32-byte SHA-256 output).
pub type Hash = [u8; 32];

/// Length of a hex-encoded hash (64 lowercase hex characters).
pub const HASH_HEX_LEN: usize = 64;

/// Errors raised when parsing a hex-encoded hash.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashParseError {
    /// Input is not the expected number of hex characters.
    #[error("Hash must be {expected} hex chars, got {got}")]
    BadLength {
        /// Expected character count.
        expected: usize,
        /// Actual character count.
        got: usize,
    },

    /// Input contains non-hex characters.
    #[error("Invalid hex in hash: {0}")]
    BadHex(String),
}

/// Encode a hash as 64 lowercase hex characters.
pub fn encode_hash(hash: &Hash) -> String {
    hex::encode(hash)
}

/// Decode a 64-character hex string into a hash.
pub fn decode_hash(text: &str) -> Result<Hash, HashParseError> {
    if text.len() != HASH_HEX_LEN {
        return Err(HashParseError::BadLength {
            expected: HASH_HEX_LEN,
            got: text.len(),
        });
    }

    let bytes = hex::decode(text).map_err(|e| HashParseError::BadHex(e.to_string()))?;
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&bytes);
    Ok(hash)
}
