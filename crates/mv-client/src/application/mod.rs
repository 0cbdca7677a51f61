//! # Application Module
//!
//! The request orchestrator driving channel and verifier.

pub mod service;

pub use service::ValidityRequest;
