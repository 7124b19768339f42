//! # Domain Entities
//!
//! Block input and merkle block proof.

use std::fmt;

use super::errors::{DecodeError, Hash};
use super::invariants::HEADER_SIZE;
use super::value_objects::ExtractedMatches;
use crate::algorithms::{compute_merkle_root, double_sha256, extract_matches, txid_hex};

/// Serialized block header, passed through without interpretation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHeader([u8; HEADER_SIZE]);

impl BlockHeader {
    /// Wrap raw header bytes.
    pub fn from_bytes(bytes: [u8; HEADER_SIZE]) -> Self {
        Self(bytes)
    }

    /// Copy a header out of a slice of exactly [`HEADER_SIZE`] bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        let raw: [u8; HEADER_SIZE] =
            bytes.try_into().map_err(|_| DecodeError::UnexpectedEof {
                offset: 0,
                needed: HEADER_SIZE,
            })?;
        Ok(Self(raw))
    }

    /// Raw header bytes.
    pub fn as_bytes(&self) -> &[u8; HEADER_SIZE] {
        &self.0
    }

    /// Merkle root field declared by the header.
    pub fn merkle_root(&self) -> Hash {
        let mut root = [0u8; 32];
        root.copy_from_slice(&self.0[36..68]);
        root
    }

    /// Block hash (double SHA-256 of the header).
    pub fn block_hash(&self) -> Hash {
        double_sha256(&self.0)
    }
}

impl fmt::Debug for BlockHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BlockHeader")
            .field(&txid_hex(&self.block_hash()))
            .finish()
    }
}

/// A block as seen by the proof engine: header plus ordered tx hashes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    /// Block header.
    pub header: BlockHeader,
    /// Transaction hashes in block order, coinbase first.
    pub tx_hashes: Vec<Hash>,
}

impl Block {
    /// Create a new block.
    pub fn new(header: BlockHeader, tx_hashes: Vec<Hash>) -> Self {
        Self { header, tx_hashes }
    }

    /// Number of transactions.
    pub fn transaction_count(&self) -> usize {
        self.tx_hashes.len()
    }

    /// Canonical Merkle root of the transactions, `None` if empty.
    pub fn compute_merkle_root(&self) -> Option<Hash> {
        compute_merkle_root(&self.tx_hashes)
    }
}

/// Merkle block proof: header, transaction count and partial Merkle tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MerkleBlockProof {
    /// Block header.
    pub header: BlockHeader,
    /// Number of transactions in the block (`N`).
    pub total_transactions: u32,
    /// Pruned subtree roots and matched leaves, depth-first.
    pub hashes: Vec<Hash>,
    /// Traversal flag bits, LSB first, zero padded to a byte boundary.
    pub flags: Vec<u8>,
}

impl MerkleBlockProof {
    /// Recompute the root and list the matched transactions.
    pub fn extract_matches(
        &self,
        reject_duplicates: bool,
    ) -> Result<ExtractedMatches, DecodeError> {
        extract_matches(
            self.total_transactions,
            &self.hashes,
            &self.flags,
            reject_duplicates,
        )
    }

    /// Check the reconstructed root against the header's Merkle root.
    pub fn verify_against_header(&self) -> Result<bool, DecodeError> {
        let extracted = self.extract_matches(false)?;
        Ok(extracted.root == self.header.merkle_root())
    }
}
