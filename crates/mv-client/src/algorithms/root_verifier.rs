//! # Root Verifier
//!
//! Recompute a Merkle root from a leaf value and an ordered sibling
//! path, and compare it to the known root.

use shared_crypto::{hash_leaf, hash_pair};
use shared_types::{Hash, ProofStep, SiblingPosition};

/// Fold a leaf hash up a sibling path to a candidate root.
///
/// # Algorithm
///
/// 1. Start with the leaf hash as the current hash
/// 2. For each step, in order:
///    - sibling on the left: current = H(sibling || current)
///    - sibling on the right: current = H(current || sibling)
///
/// The fold is strictly left-to-right over the given order; reordering
/// the path changes the result, since each step's position encodes the
/// leaf's location at that tree level.
///
/// # Time Complexity: O(path length)
pub fn fold_path(leaf_hash: &Hash, path: &[ProofStep]) -> Hash {
    let mut current = *leaf_hash;

    for step in path {
        current = match step.position {
            SiblingPosition::Left => hash_pair(&step.hash, &current),
            SiblingPosition::Right => hash_pair(&current, &step.hash),
        };
    }

    current
}

/// Verify that a transaction's proof path folds to the known root.
///
/// Pure and side-effect-free. An empty path is valid input: it claims
/// the transaction's hash equals the root directly.
pub fn verify_root(known_root: &Hash, transaction: &str, path: &[ProofStep]) -> bool {
    let leaf = hash_leaf(transaction.as_bytes());
    fold_path(&leaf, path) == *known_root
}
