//! Transaction bloom filter (BIP-37)
//!
//! INVARIANTS:
//! - No false negatives: after `insert(x)`, `contains(x)` MUST return true
//! - Bit `i` lives in byte `i / 8` at position `i % 8`, LSB first

use bitvec::prelude::*;

use super::hash_functions::bit_index;
use super::parameters::{filter_params, MAX_FILTER_BYTES, MAX_HASH_FUNCS};
use crate::domain::{FilterError, Hash};
use crate::ports::MembershipOracle;

/// Bloom filter over transaction hashes, wire compatible with BIP-37.
///
/// The filter is caller-owned state. A merkle block build only reads it,
/// so every insertion must happen before the build starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxBloomFilter {
    bits: BitVec<u8, Lsb0>,
    hash_funcs: u32,
    tweak: u32,
}

impl TxBloomFilter {
    /// Create an empty filter sized for `elements` at false positive rate `fpr`.
    pub fn new(elements: usize, tweak: u32, fpr: f64) -> Self {
        let params = filter_params(elements, fpr);
        Self {
            bits: bitvec![u8, Lsb0; 0; params.size_bytes * 8],
            hash_funcs: params.hash_funcs,
            tweak,
        }
    }

    /// Rebuild a filter from its wire fields.
    pub fn from_parts(data: Vec<u8>, hash_funcs: u32, tweak: u32) -> Result<Self, FilterError> {
        if data.is_empty() || data.len() > MAX_FILTER_BYTES {
            return Err(FilterError::InvalidSize {
                size: data.len(),
                max: MAX_FILTER_BYTES,
            });
        }
        if hash_funcs == 0 || hash_funcs > MAX_HASH_FUNCS {
            return Err(FilterError::InvalidHashFuncs {
                count: hash_funcs,
                max: MAX_HASH_FUNCS,
            });
        }
        Ok(Self {
            bits: BitVec::from_vec(data),
            hash_funcs,
            tweak,
        })
    }

    /// Insert raw bytes.
    pub fn insert(&mut self, data: &[u8]) {
        let bit_len = self.bits.len();
        for hash_num in 0..self.hash_funcs {
            let idx = bit_index(data, hash_num, self.tweak, bit_len);
            self.bits.set(idx, true);
        }
    }

    /// Insert a hash in internal byte order.
    pub fn insert_hash(&mut self, hash: &Hash) {
        self.insert(hash);
    }

    /// Test raw bytes. False positives are possible, false negatives are not.
    pub fn contains(&self, data: &[u8]) -> bool {
        let bit_len = self.bits.len();
        (0..self.hash_funcs)
            .all(|hash_num| self.bits[bit_index(data, hash_num, self.tweak, bit_len)])
    }

    /// Test a hash in internal byte order.
    pub fn contains_hash(&self, hash: &Hash) -> bool {
        self.contains(hash)
    }

    /// True once every bit is set and the filter matches everything.
    pub fn is_full(&self) -> bool {
        self.bits.all()
    }

    /// Reset every bit.
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Filter bytes as sent on the wire.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Number of hash functions.
    pub fn hash_funcs(&self) -> u32 {
        self.hash_funcs
    }

    /// Tweak mixed into every hash seed.
    pub fn tweak(&self) -> u32 {
        self.tweak
    }
}

impl MembershipOracle for TxBloomFilter {
    fn contains_hash(&self, hash: &Hash) -> bool {
        TxBloomFilter::contains_hash(self, hash)
    }
}
