//! # Domain Entities
//!
//! The array-backed binary Merkle tree the authority serves proofs from.

use serde::{Deserialize, Serialize};
use shared_crypto::hash_pair;
use shared_types::{Hash, ProofStep, SiblingPosition};

use super::errors::AuthorityError;

/// Sentinel hash used for padding tree leaves (all zeros).
///
/// When padding leaves to a power of two, empty slots are filled with
/// this value.
pub const SENTINEL_HASH: Hash = [0u8; 32];

/// A binary Merkle tree built from leaf hashes.
///
/// ALGORITHM: binary hash tree where each non-leaf node is the hash of
/// its two children concatenated: H(left || right).
///
/// ## Invariants
///
/// - Leaves are padded to the nearest power of two with [`SENTINEL_HASH`]
///   (a single leaf pads to two, so every non-empty tree has a root
///   distinct from its leaves).
/// - Same leaves always produce the same root.
/// - Every proof path this tree emits folds back to its root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleTree {
    /// All nodes, stored level by level with the root at index 0.
    /// Children of node `i` sit at `2i+1` and `2i+2`.
    nodes: Vec<Hash>,
    /// Number of actual leaves (before padding).
    leaf_count: usize,
    /// Number of leaves after padding to a power of two.
    padded_leaf_count: usize,
    /// The computed root hash.
    root: Hash,
}

impl MerkleTree {
    /// Build a Merkle tree from leaf hashes.
    ///
    /// 1. Pad leaves to a power of two with [`SENTINEL_HASH`]
    /// 2. Build bottom-up: each parent = H(left_child || right_child)
    /// 3. Root lands at index 0
    pub fn build(leaf_hashes: Vec<Hash>) -> Self {
        let leaf_count = leaf_hashes.len();

        if leaf_count == 0 {
            return Self {
                nodes: vec![SENTINEL_HASH],
                leaf_count: 0,
                padded_leaf_count: 0,
                root: SENTINEL_HASH,
            };
        }

        // A single leaf still pads to 2 so the tree has real structure.
        let padded_leaf_count = if leaf_count == 1 {
            2
        } else {
            leaf_count.next_power_of_two()
        };
        let mut leaves = leaf_hashes;
        leaves.resize(padded_leaf_count, SENTINEL_HASH);

        // Complete binary tree: 2n - 1 nodes for n leaves.
        let total_nodes = 2 * padded_leaf_count - 1;
        let mut nodes = vec![SENTINEL_HASH; total_nodes];

        let leaf_start = padded_leaf_count - 1;
        for (i, hash) in leaves.iter().enumerate() {
            nodes[leaf_start + i] = *hash;
        }

        for i in (0..leaf_start).rev() {
            let left_child = 2 * i + 1;
            let right_child = 2 * i + 2;
            nodes[i] = hash_pair(&nodes[left_child], &nodes[right_child]);
        }

        let root = nodes[0];

        Self {
            nodes,
            leaf_count,
            padded_leaf_count,
            root,
        }
    }

    /// Get the root hash of this tree.
    pub fn root(&self) -> Hash {
        self.root
    }

    /// Get the number of actual leaves (before padding).
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Get the number of leaves after padding.
    pub fn padded_leaf_count(&self) -> usize {
        self.padded_leaf_count
    }

    /// Extract the leaf-to-root sibling path for the leaf at `leaf_index`.
    ///
    /// Each step records the sibling's hash and which side of the path
    /// it sits on, which is exactly what a verifier needs to fold the
    /// leaf hash back up to the root.
    pub fn proof_path(&self, leaf_index: usize) -> Result<Vec<ProofStep>, AuthorityError> {
        if leaf_index >= self.leaf_count {
            return Err(AuthorityError::InvalidIndex {
                index: leaf_index,
                max: self.leaf_count,
            });
        }

        let leaf_start = self.padded_leaf_count - 1;
        let mut current_idx = leaf_start + leaf_index;
        let mut path = Vec::new();

        while current_idx > 0 {
            // Odd index = left child, so the sibling is on the right.
            let (sibling_idx, position) = if current_idx % 2 == 1 {
                (current_idx + 1, SiblingPosition::Right)
            } else {
                (current_idx - 1, SiblingPosition::Left)
            };

            let sibling_hash =
                self.nodes
                    .get(sibling_idx)
                    .copied()
                    .ok_or(AuthorityError::InvalidIndex {
                        index: sibling_idx,
                        max: self.nodes.len(),
                    })?;

            path.push(ProofStep {
                hash: sibling_hash,
                position,
            });

            current_idx = (current_idx - 1) / 2;
        }

        Ok(path)
    }

    /// Fold a leaf hash up a path and compare against this tree's root.
    ///
    /// Used by tests and by the startup sanity pass; the client side
    /// has its own independent implementation of the same fold.
    pub fn path_matches_root(&self, leaf_hash: &Hash, path: &[ProofStep]) -> bool {
        let mut current = *leaf_hash;
        for step in path {
            current = match step.position {
                SiblingPosition::Left => hash_pair(&step.hash, &current),
                SiblingPosition::Right => hash_pair(&current, &step.hash),
            };
        }
        current == self.root
    }
}
