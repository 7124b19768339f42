//! Transaction bloom filter
//!
//! Default membership oracle behind `BloomMatch`. Only the parts a light
//! client needs to build and load a BIP-37 filter live here; matching
//! transaction contents (outputs, outpoints) is left to the caller.

pub mod bloom_filter;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::TxBloomFilter;
pub use hash_functions::{bit_index, murmur3_32, SEED_MULTIPLIER};
pub use parameters::{filter_params, FilterParams, MAX_FILTER_BYTES, MAX_HASH_FUNCS};
