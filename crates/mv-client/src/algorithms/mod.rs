//! # Algorithms
//!
//! Pure computations: the root-recomputation fold.

pub mod root_verifier;

pub use root_verifier::{fold_path, verify_root};
