//! # Codec Module
//!
//! Wire serialization of merkle block proofs.

pub mod compact_size;
pub mod merkle_block;
pub mod reader;

pub use compact_size::{compact_size_len, write_compact_size};
pub use merkle_block::{decode_proof, encode_proof, ProofCodec};
pub use reader::WireReader;
