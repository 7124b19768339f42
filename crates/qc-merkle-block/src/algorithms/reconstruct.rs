//! # Partial Merkle Tree Reconstruction
//!
//! Verifier side of a merkle block: consume the flag bits and hashes in
//! the same depth-first order they were emitted, recompute the root and
//! collect the matched leaves.
//!
//! A pruned subtree is represented only by its hash, so one real leaf and
//! two identical duplicated leaves are indistinguishable here. Rejecting
//! identical sibling subtrees is opt-in (`reject_duplicates`) because the
//! reference encoding accepts them.

use bitvec::prelude::*;

use super::hash_tree::{tree_height, tree_width};
use super::hashing::hash_pair;
use crate::domain::{
    invariant_proof_size, DecodeError, ExtractedMatches, Hash, ProofDefect,
};

/// Recompute the root of a partial Merkle tree and list its matches.
pub fn extract_matches(
    total_transactions: u32,
    hashes: &[Hash],
    flags: &[u8],
    reject_duplicates: bool,
) -> Result<ExtractedMatches, DecodeError> {
    if total_transactions == 0 {
        return Err(DecodeError::EmptyBlock);
    }

    let bits = flags.view_bits::<Lsb0>();
    invariant_proof_size(total_transactions as usize, hashes.len(), bits.len())?;

    let mut walker = Walker {
        leaf_count: total_transactions as usize,
        bits,
        hashes,
        bits_used: 0,
        hashes_used: 0,
        reject_duplicates,
        matched_hashes: Vec::new(),
        matched_positions: Vec::new(),
    };
    let root = walker.traverse(tree_height(walker.leaf_count), 0)?;

    // Only the final byte may carry padding.
    if walker.bits_used.div_ceil(8) != flags.len() {
        return Err(ProofDefect::UnusedFlagBytes.into());
    }
    if walker.hashes_used != hashes.len() {
        return Err(ProofDefect::UnusedHashes.into());
    }

    Ok(ExtractedMatches {
        root,
        matched_hashes: walker.matched_hashes,
        matched_positions: walker.matched_positions,
    })
}

struct Walker<'a> {
    leaf_count: usize,
    bits: &'a BitSlice<u8, Lsb0>,
    hashes: &'a [Hash],
    bits_used: usize,
    hashes_used: usize,
    reject_duplicates: bool,
    matched_hashes: Vec<Hash>,
    matched_positions: Vec<usize>,
}

impl Walker<'_> {
    fn next_bit(&mut self) -> Result<bool, ProofDefect> {
        let bit = self
            .bits
            .get(self.bits_used)
            .map(|bit| *bit)
            .ok_or(ProofDefect::FlagBitsExhausted)?;
        self.bits_used += 1;
        Ok(bit)
    }

    fn next_hash(&mut self) -> Result<Hash, ProofDefect> {
        let hash = *self
            .hashes
            .get(self.hashes_used)
            .ok_or(ProofDefect::HashesExhausted)?;
        self.hashes_used += 1;
        Ok(hash)
    }

    fn traverse(&mut self, height: u32, pos: usize) -> Result<Hash, ProofDefect> {
        let parent_of_match = self.next_bit()?;

        if height == 0 || !parent_of_match {
            let hash = self.next_hash()?;
            if height == 0 && parent_of_match {
                self.matched_hashes.push(hash);
                self.matched_positions.push(pos);
            }
            return Ok(hash);
        }

        let left = self.traverse(height - 1, pos * 2)?;
        let right = if pos * 2 + 1 < tree_width(self.leaf_count, height - 1) {
            let right = self.traverse(height - 1, pos * 2 + 1)?;
            if self.reject_duplicates && right == left {
                return Err(ProofDefect::DuplicateSubtree);
            }
            right
        } else {
            left
        };

        Ok(hash_pair(&left, &right))
    }
}
