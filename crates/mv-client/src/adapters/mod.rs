//! # Adapters
//!
//! Concrete implementations of the outbound ports.

pub mod tcp_channel;

pub use tcp_channel::TcpProofChannel;
