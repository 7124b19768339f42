//! # Domain Invariants
//!
//! Rules every merkle block proof must satisfy.

use super::errors::ProofDefect;

/// Serialized block header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Size of a transaction or node hash in bytes.
pub const HASH_SIZE: usize = 32;

/// Largest transaction count a block can carry on the wire
/// (32 MB payload over a 10-byte minimum transaction, plus one).
pub const MAX_TX_PER_BLOCK: u32 = 32_000_000 / 10 + 1;

/// Largest flag byte count any valid proof can carry.
pub const MAX_FLAG_BYTES: usize = max_flag_bits(MAX_TX_PER_BLOCK as usize).div_ceil(8);

/// Flag bits emitted by a fully matched tree over `total_transactions` leaves.
///
/// Every node is visited once, so this is the sum of the level widths.
/// Odd-width levels make it exceed `2 * N - 1` by up to the tree height.
pub const fn max_flag_bits(total_transactions: usize) -> usize {
    if total_transactions == 0 {
        return 0;
    }
    let mut bits = 0;
    let mut width = total_transactions;
    loop {
        bits += width;
        if width == 1 {
            return bits;
        }
        width = width.div_ceil(2);
    }
}

/// Invariant: hash count and flag bit count fit the transaction count.
///
/// A tree over `N` leaves never needs more than `N` hashes, and every
/// hash is announced by at least one flag bit.
pub fn invariant_proof_size(
    total_transactions: usize,
    hash_count: usize,
    flag_bits: usize,
) -> Result<(), ProofDefect> {
    if hash_count > total_transactions {
        return Err(ProofDefect::TooManyHashes);
    }
    if flag_bits < hash_count {
        return Err(ProofDefect::NotEnoughFlagBits);
    }
    Ok(())
}

/// Invariant: matched positions are strictly increasing and inside `[0, N)`.
pub fn invariant_matched_positions(positions: &[usize], total_transactions: usize) -> bool {
    positions.windows(2).all(|pair| pair[0] < pair[1])
        && positions
            .last()
            .map_or(true, |&last| last < total_transactions)
}

/// Invariant: every matched leaf in the bitmap is reported exactly once.
pub fn invariant_matched_count(positions: &[usize], bitmap: &[bool]) -> bool {
    positions.len() == bitmap.iter().filter(|&&matched| matched).count()
        && positions.iter().all(|&pos| bitmap.get(pos).copied().unwrap_or(false))
}
