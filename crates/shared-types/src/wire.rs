//! # Wire Format
//!
//! The line-oriented text encoding spoken on the proof channel.
//!
//! ## Protocol
//!
//! Plain UTF-8 lines over TCP, `\n`-terminated:
//!
//! - Client → authority: one line carrying the transaction identifier.
//! - Authority → client, known transaction: zero or more sibling-hash
//!   tokens, one per line, leaf-to-root order, then the authority
//!   closes its write side. End-of-stream is the terminator; there is
//!   no count and no end marker.
//! - Authority → client, unknown transaction: exactly one
//!   [`NOT_FOUND_LINE`] line, then close.
//!
//! A sibling-hash token is a fixed-format string `L:<64-hex>` or
//! `R:<64-hex>`; the prefix records the sibling's tree position, which
//! the fold needs to concatenate in tree order.

use thiserror::Error;

use crate::hash::{decode_hash, encode_hash, HashParseError};
use crate::proof::{ProofStep, SiblingPosition};

/// Response line sent for a transaction absent from the tree.
pub const NOT_FOUND_LINE: &str = "NOT_FOUND";

/// Prefix for a sibling that is the left child.
const LEFT_PREFIX: &str = "L:";
/// Prefix for a sibling that is the right child.
const RIGHT_PREFIX: &str = "R:";

/// Errors raised when a peer sends a line that is not valid wire data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// Line does not start with a recognized token prefix.
    #[error("Unrecognized wire token: {0:?}")]
    UnknownToken(String),

    /// Token prefix is valid but the hash payload is not.
    #[error("Malformed hash in wire token: {0}")]
    MalformedHash(#[from] HashParseError),
}

/// One parsed line of an authority response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseLine {
    /// A sibling-hash token.
    Step(ProofStep),
    /// The not-found flag.
    NotFound,
}

/// Encode one proof step as a wire token.
pub fn encode_step(step: &ProofStep) -> String {
    let prefix = match step.position {
        SiblingPosition::Left => LEFT_PREFIX,
        SiblingPosition::Right => RIGHT_PREFIX,
    };
    format!("{}{}", prefix, encode_hash(&step.hash))
}

/// Parse one line of an authority response.
pub fn parse_response_line(line: &str) -> Result<ResponseLine, WireError> {
    let line = line.trim_end_matches('\r');

    if line == NOT_FOUND_LINE {
        return Ok(ResponseLine::NotFound);
    }

    let (position, payload) = if let Some(rest) = line.strip_prefix(LEFT_PREFIX) {
        (SiblingPosition::Left, rest)
    } else if let Some(rest) = line.strip_prefix(RIGHT_PREFIX) {
        (SiblingPosition::Right, rest)
    } else {
        return Err(WireError::UnknownToken(line.to_string()));
    };

    let hash = decode_hash(payload)?;
    Ok(ResponseLine::Step(ProofStep { hash, position }))
}
