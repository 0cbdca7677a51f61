//! # Domain Module
//!
//! Core domain types for the authority: the Merkle tree and its errors.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
