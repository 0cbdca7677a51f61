//! # Shared Crypto
//!
//! The deterministic hash primitive underpinning the validity protocol.
//!
//! The protocol treats the hash function as an external collaborator:
//! any deterministic fixed-output hash will do, as long as both sides
//! agree. This workspace fixes SHA-256.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;

pub use hashing::{hash_leaf, hash_pair};
