//! Hash functions for the transaction bloom filter
//!
//! BIP-37 derives every bit index from MurmurHash3 (x86, 32-bit) with a
//! per-function seed of `i * 0xFBA4C795 + tweak`.

use std::io::Cursor;

/// Seed multiplier between successive hash functions.
pub const SEED_MULTIPLIER: u32 = 0xFBA4C795;

/// MurmurHash3 x86 32-bit.
pub fn murmur3_32(data: &[u8], seed: u32) -> u32 {
    let mut cursor = Cursor::new(data);
    // Reading from an in-memory cursor cannot fail.
    murmur3::murmur3_32(&mut cursor, seed).unwrap_or(0)
}

/// Bit index selected by hash function `hash_num` in a filter of `bit_len` bits.
pub fn bit_index(data: &[u8], hash_num: u32, tweak: u32, bit_len: usize) -> usize {
    let seed = hash_num.wrapping_mul(SEED_MULTIPLIER).wrapping_add(tweak);
    (murmur3_32(data, seed) as usize) % bit_len
}
