//! # Merkle Block Builder
//!
//! Application service orchestrating proof construction and decoding.

use rayon::prelude::*;

use crate::algorithms::HashTree;
use crate::codec::ProofCodec;
use crate::config::MerkleBlockConfig;
use crate::domain::{
    invariant_matched_count, invariant_matched_positions, Block, BuildResult, ExtractedMatches,
    Hash, MerkleBlockError, MerkleBlockProof,
};
use crate::ports::{MembershipOracle, MerkleBlockApi};
use crate::predicates::{BloomMatch, ExactSetMatch, MatchPredicate};

/// Merkle Block Builder - orchestrates predicate, hash tree and codec.
///
/// Holds no per-build state, so one builder can serve many threads.
#[derive(Clone, Debug)]
pub struct MerkleBlockBuilder {
    /// Configuration.
    config: MerkleBlockConfig,
    /// Wire codec using the configured limits.
    codec: ProofCodec,
}

impl Default for MerkleBlockBuilder {
    fn default() -> Self {
        let config = MerkleBlockConfig::default();
        let codec = ProofCodec::from_config(&config);
        Self { config, codec }
    }
}

impl MerkleBlockBuilder {
    /// Create a builder, validating the configuration.
    pub fn new(config: MerkleBlockConfig) -> Result<Self, MerkleBlockError> {
        config.validate()?;
        let codec = ProofCodec::from_config(&config);
        Ok(Self { config, codec })
    }

    /// Active configuration.
    pub fn config(&self) -> &MerkleBlockConfig {
        &self.config
    }

    /// Evaluate `predicate` once per transaction, in block order.
    pub fn match_bitmap<P: MatchPredicate>(
        &self,
        block: &Block,
        predicate: &P,
    ) -> Result<Vec<bool>, MerkleBlockError> {
        block
            .tx_hashes
            .iter()
            .enumerate()
            .map(|(position, hash)| {
                predicate
                    .matches(hash, position)
                    .map_err(|e| MerkleBlockError::Predicate(Box::new(e)))
            })
            .collect()
    }

    /// Build proofs for independent blocks in parallel.
    ///
    /// Results are returned in input order; one failing block does not
    /// affect the others.
    pub fn build_batch<P>(
        &self,
        blocks: &[Block],
        predicate: &P,
    ) -> Vec<Result<BuildResult, MerkleBlockError>>
    where
        P: MatchPredicate + Sync,
    {
        blocks
            .par_iter()
            .map(|block| self.build_proof(block, predicate))
            .collect()
    }

    /// Internal: enforce transaction count bounds.
    fn check_transaction_count(&self, block: &Block) -> Result<u32, MerkleBlockError> {
        let count = block.transaction_count();
        if count == 0 {
            return Err(MerkleBlockError::EmptyBlock);
        }
        if count > self.config.max_transactions as usize {
            return Err(MerkleBlockError::TooManyTransactions {
                count,
                max: self.config.max_transactions as usize,
            });
        }
        Ok(count as u32)
    }
}

impl MerkleBlockApi for MerkleBlockBuilder {
    fn build_proof<P: MatchPredicate>(
        &self,
        block: &Block,
        predicate: &P,
    ) -> Result<BuildResult, MerkleBlockError> {
        let total_transactions = self.check_transaction_count(block)?;

        let bitmap = self.match_bitmap(block, predicate)?;
        let tree = HashTree::new(&block.tx_hashes, &bitmap)?;
        let partial = tree.build();

        debug_assert!(invariant_matched_positions(
            &partial.matched_positions,
            block.transaction_count()
        ));
        debug_assert!(invariant_matched_count(&partial.matched_positions, &bitmap));

        tracing::debug!(
            "Built merkle block for {:?}: {}/{} txs matched, {} hashes, {} flag bits",
            block.header,
            partial.matched_positions.len(),
            total_transactions,
            partial.hashes.len(),
            partial.flags.len()
        );

        let flags = partial.flag_bytes();
        Ok(BuildResult {
            proof: MerkleBlockProof {
                header: block.header,
                total_transactions,
                hashes: partial.hashes,
                flags,
            },
            matched_positions: partial.matched_positions,
        })
    }

    fn encode_proof(&self, proof: &MerkleBlockProof) -> Vec<u8> {
        self.codec.encode(proof)
    }

    fn decode_proof(&self, bytes: &[u8]) -> Result<MerkleBlockProof, MerkleBlockError> {
        Ok(self.codec.decode(bytes)?)
    }

    fn extract_matches(
        &self,
        proof: &MerkleBlockProof,
    ) -> Result<ExtractedMatches, MerkleBlockError> {
        Ok(proof.extract_matches(self.config.reject_duplicate_subtrees)?)
    }
}

/// Build a merkle block revealing the transactions a bloom filter matches.
pub fn new_merkle_block_with_filter<F: MembershipOracle>(
    block: &Block,
    filter: F,
) -> Result<BuildResult, MerkleBlockError> {
    MerkleBlockBuilder::default().build_proof(block, &BloomMatch::new(filter))
}

/// Build a merkle block revealing the listed transactions.
///
/// Txids not in the block are ignored; compare the matched position count
/// against `txids.len()` to detect them.
pub fn new_merkle_block_with_txn_set(
    block: &Block,
    txids: &[Hash],
) -> Result<BuildResult, MerkleBlockError> {
    let predicate = ExactSetMatch::new(txids.iter().copied());
    MerkleBlockBuilder::default().build_proof(block, &predicate)
}
