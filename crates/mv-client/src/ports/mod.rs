//! # Ports
//!
//! Outbound dependency traits for the validity client.

pub mod outbound;

pub use outbound::{MockProofFetcher, ProofFetcher};
