//! # Proof Path Types
//!
//! Immutable value types describing a Merkle proof path: the ordered
//! sequence of sibling hashes needed to fold a leaf hash up to the root.

use serde::{Deserialize, Serialize};

use crate::hash::Hash;

/// Position of a sibling in the Merkle tree (left or right child).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum SiblingPosition {
    /// Sibling is the left child; fold as H(sibling || current).
    Left,
    /// Sibling is the right child; fold as H(current || sibling).
    Right,
}

/// One step of a proof path: a sibling hash and its tree position.
///
/// Paths are ordered leaf-to-root. Order is significant: the sequence
/// of positions encodes the leaf's location at each tree level, and
/// folding is order-dependent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofStep {
    /// Hash of the sibling node.
    pub hash: Hash,
    /// Position of the sibling relative to the path.
    pub position: SiblingPosition,
}

impl ProofStep {
    /// Create a step whose sibling is the left child.
    pub fn left(hash: Hash) -> Self {
        Self {
            hash,
            position: SiblingPosition::Left,
        }
    }

    /// Create a step whose sibling is the right child.
    pub fn right(hash: Hash) -> Self {
        Self {
            hash,
            position: SiblingPosition::Right,
        }
    }
}

/// The authority's answer to a proof request.
///
/// `NotFound` is deliberately distinct from `Path(vec![])`: an empty
/// path is a real claim (the transaction's leaf hash IS the root),
/// while `NotFound` means the authority does not know the transaction.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProofResponse {
    /// The transaction is known; here is its leaf-to-root path.
    Path(Vec<ProofStep>),
    /// The transaction is not in the authority's tree.
    NotFound,
}
