//! # QC Merkle Block
//!
//! Partial Merkle trees ("merkle blocks") for SPV light clients.
//!
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! Given a block and a per-transaction match predicate, produce a compact
//! proof that reveals exactly the matched transaction hashes and enough
//! interior hashes to recompute the header's Merkle root:
//! - Header (80 bytes) + total transaction count
//! - Preorder hash list (32 bytes each)
//! - Preorder flag bits, packed least-significant bit first
//!
//! Decoding reverses the process: every accepted proof has been walked
//! once, so its matched hashes and Merkle root are known to be consistent.
//!
//! ## Security Features
//!
//! | Defense | Description |
//! |---------|-------------|
//! | Bounded decode | Counts checked against configured limits before allocation |
//! | Canonical encoding | Non-minimal CompactSize and trailing bytes rejected |
//! | Full consumption | Every hash and flag byte must be used by the traversal |
//! | Duplicate subtrees | Optional rejection of identical sibling subtrees |
//!
//! ## Module Structure
//!
//! ```text
//! qc-merkle-block/
//! ├── domain/          # BlockHeader, Block, MerkleBlockProof, errors, invariants
//! ├── algorithms/      # Double SHA-256, hash tree traversal, reconstruction
//! ├── filter/          # BIP-37 transaction bloom filter
//! ├── predicates/      # MatchPredicate: bloom membership, exact target set
//! ├── codec/           # Wire encoding with CompactSize counts
//! ├── ports/           # API traits (inbound) + membership oracle (outbound)
//! ├── application/     # MerkleBlockBuilder orchestrating everything
//! └── config.rs        # MerkleBlockConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod application;
pub mod codec;
pub mod config;
pub mod domain;
pub mod filter;
pub mod ports;
pub mod predicates;

// Re-exports
pub use algorithms::{
    build_partial_tree, compute_merkle_root, double_sha256, extract_matches, hash_pair,
    parse_txid, tree_height, tree_width, txid_hex, HashTree,
};
pub use application::{
    new_merkle_block_with_filter, new_merkle_block_with_txn_set, MerkleBlockBuilder,
};
pub use codec::{decode_proof, encode_proof, ProofCodec};
pub use config::MerkleBlockConfig;
pub use domain::{
    max_flag_bits, Block, BlockHeader, BuildResult, DecodeError, ExtractedMatches, FilterError,
    Hash, MerkleBlockError, MerkleBlockProof, PartialTree, ProofDefect, HASH_SIZE, HEADER_SIZE,
    MAX_FLAG_BYTES, MAX_TX_PER_BLOCK,
};
pub use filter::TxBloomFilter;
pub use ports::{MembershipOracle, MerkleBlockApi};
pub use predicates::{BloomMatch, ExactSetMatch, MatchPredicate, TxMatcher};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    #[test]
    fn test_version() {
        assert!(!super::VERSION.is_empty());
    }
}
