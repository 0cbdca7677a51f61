//! # SHA-256 Hashing
//!
//! The two hash operations the protocol needs: hashing a single leaf
//! value, and hashing two node hashes concatenated (parent derivation).

use sha2::{Digest, Sha256};
use shared_types::Hash;

/// Hash a leaf value (a transaction identifier's bytes).
pub fn hash_leaf(data: &[u8]) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash two node hashes together: parent = H(left || right).
///
/// This is the core operation for both building the tree and folding a
/// proof path back up to the root.
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    hasher.finalize().into()
}
