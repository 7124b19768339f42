//! BIP-37 filter sizing
//!
//! Formulas:
//! - bits = -n * ln(fpr) / (ln(2)^2), capped at MAX_FILTER_BYTES * 8
//! - k    = bits / n * ln(2), capped at MAX_HASH_FUNCS

use std::f64::consts::LN_2;

/// Largest filter the protocol accepts, in bytes.
pub const MAX_FILTER_BYTES: usize = 36_000;

/// Largest number of hash functions the protocol accepts.
pub const MAX_HASH_FUNCS: u32 = 50;

/// Sizing for a transaction bloom filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterParams {
    /// Filter size in bytes
    pub size_bytes: usize,
    /// Number of hash functions
    pub hash_funcs: u32,
}

/// Size a filter for `elements` entries at false positive rate `fpr`.
///
/// Rounds down like the wire protocol does, but never below one byte and
/// one hash function, so the filter stays usable.
pub fn filter_params(elements: usize, fpr: f64) -> FilterParams {
    let n = elements.max(1) as f64;
    let fpr = fpr.clamp(f64::MIN_POSITIVE, 1.0);

    let bits = (-n * fpr.ln() / (LN_2 * LN_2)) as usize;
    let size_bytes = (bits.min(MAX_FILTER_BYTES * 8) / 8).max(1);

    let hash_funcs = ((size_bytes * 8) as f64 / n * LN_2) as u32;
    let hash_funcs = hash_funcs.clamp(1, MAX_HASH_FUNCS);

    FilterParams {
        size_bytes,
        hash_funcs,
    }
}
