//! # Algorithms Module
//!
//! Merkle hashing, partial tree construction and reconstruction.

pub mod hash_tree;
pub mod hashing;
pub mod reconstruct;

pub use hash_tree::{
    build_partial_tree, compute_merkle_root, node_hash, tree_height, tree_width, HashTree,
};
pub use hashing::{double_sha256, hash_pair, parse_txid, txid_hex};
pub use reconstruct::extract_matches;
