//! # Inbound Ports
//!
//! API trait defining what the merkle block engine can do.

use crate::domain::{Block, BuildResult, ExtractedMatches, MerkleBlockError, MerkleBlockProof};
use crate::predicates::MatchPredicate;

/// Merkle Block API - inbound port.
pub trait MerkleBlockApi {
    /// Build a proof for the transactions of `block` selected by `predicate`.
    ///
    /// The predicate is evaluated exactly once per transaction, in block
    /// order. A predicate that selects nothing is not an error.
    fn build_proof<P: MatchPredicate>(
        &self,
        block: &Block,
        predicate: &P,
    ) -> Result<BuildResult, MerkleBlockError>;

    /// Serialize a proof to its wire form.
    fn encode_proof(&self, proof: &MerkleBlockProof) -> Vec<u8>;

    /// Parse and structurally validate a proof from its wire form.
    fn decode_proof(&self, bytes: &[u8]) -> Result<MerkleBlockProof, MerkleBlockError>;

    /// Recompute the root and matched transactions of a proof.
    fn extract_matches(
        &self,
        proof: &MerkleBlockProof,
    ) -> Result<ExtractedMatches, MerkleBlockError>;
}
