//! # Proof Service
//!
//! Maps transaction identifiers to their sibling paths in the
//! authority's tree. Built once at startup, read-only while serving.

use std::collections::HashMap;

use shared_crypto::hash_leaf;
use shared_types::{Hash, ProofResponse};
use tracing::debug;

use crate::domain::{AuthorityError, MerkleTree};

/// The authority's lookup structure: a Merkle tree over the known
/// transactions plus an index from transaction id to leaf position.
///
/// Leaf order is the order the transactions were supplied in (for the
/// binary, the order of lines in the tree file).
pub struct ProofService {
    /// The tree; leaf `i` holds `hash_leaf(transactions[i])`.
    tree: MerkleTree,
    /// Transaction id → leaf index.
    index: HashMap<String, usize>,
}

impl ProofService {
    /// Build the service from an ordered list of transaction ids.
    ///
    /// Rejects an empty list and duplicate ids: every leaf must be
    /// attributable to exactly one transaction.
    pub fn new(transactions: Vec<String>) -> Result<Self, AuthorityError> {
        if transactions.is_empty() {
            return Err(AuthorityError::EmptyTree);
        }

        let mut index = HashMap::with_capacity(transactions.len());
        let mut leaves = Vec::with_capacity(transactions.len());

        for (i, tx) in transactions.into_iter().enumerate() {
            leaves.push(hash_leaf(tx.as_bytes()));
            if index.insert(tx.clone(), i).is_some() {
                return Err(AuthorityError::DuplicateTransaction(tx));
            }
        }

        let tree = MerkleTree::build(leaves);
        Ok(Self { tree, index })
    }

    /// The root hash this service's proofs fold to. Advertised
    /// out-of-band to clients.
    pub fn root(&self) -> Hash {
        self.tree.root()
    }

    /// Number of transactions in the tree.
    pub fn transaction_count(&self) -> usize {
        self.index.len()
    }

    /// Look up the proof response for a transaction.
    ///
    /// Unknown ids get an explicit `NotFound`, never some unrelated
    /// default path: every returned path is derived from the real tree
    /// position of the requested transaction.
    pub fn lookup(&self, transaction: &str) -> Result<ProofResponse, AuthorityError> {
        match self.index.get(transaction) {
            Some(&leaf_index) => {
                let path = self.tree.proof_path(leaf_index)?;
                debug!(transaction, leaf_index, steps = path.len(), "Proof path served");
                Ok(ProofResponse::Path(path))
            }
            None => {
                debug!(transaction, "Unknown transaction requested");
                Ok(ProofResponse::NotFound)
            }
        }
    }
}
