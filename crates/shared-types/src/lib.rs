//! # Shared Types
//!
//! Domain types shared by the authority and client subsystems.
//!
//! This crate is the Single Source of Truth for the vocabulary both
//! sides of the validity protocol speak:
//!
//! - [`Hash`] — the 32-byte hash value, with hex helpers
//! - [`ProofStep`] / [`SiblingPosition`] — one step of a leaf-to-root
//!   proof path
//! - [`ProofResponse`] — the authority's answer to a proof request
//! - [`wire`] — the line-oriented text encoding used on the TCP channel

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hash;
pub mod proof;
pub mod wire;

pub use hash::{decode_hash, encode_hash, Hash, HashParseError};
pub use proof::{ProofResponse, ProofStep, SiblingPosition};
pub use wire::{ResponseLine, WireError, NOT_FOUND_LINE};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
