//! # Application Module
//!
//! Application services orchestrating the domain and outbound ports.

pub mod service;

pub use service::{new_merkle_block_with_filter, new_merkle_block_with_txn_set, MerkleBlockBuilder};
