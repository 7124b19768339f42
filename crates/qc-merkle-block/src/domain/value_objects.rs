//! # Domain Value Objects
//!
//! Immutable results produced by building and reconstructing proofs.

use bitvec::prelude::*;

use super::entities::MerkleBlockProof;
use super::errors::Hash;

/// Pruned tree emitted by a depth-first walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialTree {
    /// Pruned subtree roots and matched leaves, in emission order.
    pub hashes: Vec<Hash>,
    /// One bit per visited node, in emission order.
    pub flags: BitVec<u8, Lsb0>,
    /// Positions of matched leaves, ascending.
    pub matched_positions: Vec<usize>,
}

impl PartialTree {
    /// Flag bits packed LSB first, zero padded to a whole byte.
    pub fn flag_bytes(&self) -> Vec<u8> {
        let mut bits = self.flags.clone();
        bits.set_uninitialized(false);
        bits.into_vec()
    }
}

/// Output of a merkle block build.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildResult {
    /// Serializable proof.
    pub proof: MerkleBlockProof,
    /// Positions of the transactions the predicate selected, ascending.
    pub matched_positions: Vec<usize>,
}

impl BuildResult {
    /// Split into proof and matched positions.
    pub fn into_parts(self) -> (MerkleBlockProof, Vec<usize>) {
        (self.proof, self.matched_positions)
    }
}

/// What a verifier learns from a proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedMatches {
    /// Recomputed Merkle root.
    pub root: Hash,
    /// Hashes of the matched transactions, in block order.
    pub matched_hashes: Vec<Hash>,
    /// Positions of the matched transactions, ascending.
    pub matched_positions: Vec<usize>,
}
