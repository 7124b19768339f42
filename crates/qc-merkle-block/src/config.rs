//! # Merkle Block Configuration
//!
//! Limits and hardening switches shared by the builder and the codec.

use serde::{Deserialize, Serialize};

use crate::domain::{max_flag_bits, MerkleBlockError, MAX_FLAG_BYTES, MAX_TX_PER_BLOCK};

/// Merkle block configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MerkleBlockConfig {
    /// Largest transaction count accepted when building or decoding.
    pub max_transactions: u32,

    /// Largest flag byte count accepted when decoding.
    pub max_flag_bytes: usize,

    /// Reject proofs whose sibling subtrees carry identical hashes.
    ///
    /// Off by default: the reference encoding accepts such proofs, even
    /// though a verifier cannot tell one leaf from two duplicated leaves.
    pub reject_duplicate_subtrees: bool,
}

impl Default for MerkleBlockConfig {
    fn default() -> Self {
        Self {
            max_transactions: MAX_TX_PER_BLOCK,
            max_flag_bytes: MAX_FLAG_BYTES,
            reject_duplicate_subtrees: false,
        }
    }
}

impl MerkleBlockConfig {
    /// Create a config for testing (smaller limits, hardening on).
    pub fn for_testing() -> Self {
        Self {
            max_transactions: 4096,
            max_flag_bytes: 1025,
            reject_duplicate_subtrees: true,
        }
    }

    /// Check the limits are usable.
    pub fn validate(&self) -> Result<(), MerkleBlockError> {
        if self.max_transactions == 0 {
            return Err(MerkleBlockError::InvalidConfig(
                "max_transactions cannot be 0".to_string(),
            ));
        }

        let needed = max_flag_bits(self.max_transactions as usize).div_ceil(8);
        if self.max_flag_bytes < needed {
            return Err(MerkleBlockError::InvalidConfig(format!(
                "max_flag_bytes {} cannot hold a full tree of {} transactions (needs {})",
                self.max_flag_bytes, self.max_transactions, needed
            )));
        }

        Ok(())
    }
}
