//! # Merkle-Validity Test Suite
//!
//! Unified test crate for cross-crate scenarios.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Client ↔ authority over real TCP
//!     └── end_to_end.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p mv-tests
//!
//! # Integration only
//! cargo test -p mv-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
