//! # Merkle Hashing
//!
//! Double SHA-256 primitives and txid display helpers.

use sha2::{Digest, Sha256};

use crate::domain::Hash;

/// Double SHA-256 of arbitrary data.
pub fn double_sha256(data: &[u8]) -> Hash {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut output = [0u8; 32];
    output.copy_from_slice(&second);
    output
}

/// Hash two child nodes into their parent.
///
/// parent = SHA256(SHA256(left || right))
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    let mut hasher = Sha256::new();
    hasher.update(left);
    hasher.update(right);
    let first = hasher.finalize();
    let second = Sha256::digest(first);
    let mut output = [0u8; 32];
    output.copy_from_slice(&second);
    output
}

/// Parse a txid in display (byte-reversed) hex into internal order.
pub fn parse_txid(display_hex: &str) -> Result<Hash, hex::FromHexError> {
    let mut hash = [0u8; 32];
    hex::decode_to_slice(display_hex.trim(), &mut hash)?;
    hash.reverse();
    Ok(hash)
}

/// Render an internal-order hash as display (byte-reversed) hex.
pub fn txid_hex(hash: &Hash) -> String {
    let mut reversed = *hash;
    reversed.reverse();
    hex::encode(reversed)
}
