//! Merkle block wire codec
//!
//! Layout, in order:
//!
//! ```text
//! header            80 bytes
//! total_txs         u32, little endian
//! hash_count        CompactSize
//! hashes            hash_count * 32 bytes
//! flag_byte_count   CompactSize
//! flags             flag_byte_count bytes
//! ```

use super::compact_size::{compact_size_len, write_compact_size};
use super::reader::WireReader;
use crate::config::MerkleBlockConfig;
use crate::domain::{BlockHeader, DecodeError, Hash, MerkleBlockProof, HASH_SIZE, HEADER_SIZE};

/// Encodes and decodes merkle block proofs under configured limits.
#[derive(Clone, Debug)]
pub struct ProofCodec {
    max_transactions: u32,
    max_flag_bytes: usize,
    reject_duplicate_subtrees: bool,
}

impl Default for ProofCodec {
    fn default() -> Self {
        Self::from_config(&MerkleBlockConfig::default())
    }
}

impl ProofCodec {
    /// Create a codec enforcing the limits of `config`.
    pub fn from_config(config: &MerkleBlockConfig) -> Self {
        Self {
            max_transactions: config.max_transactions,
            max_flag_bytes: config.max_flag_bytes,
            reject_duplicate_subtrees: config.reject_duplicate_subtrees,
        }
    }

    /// Size of the encoded proof in bytes.
    pub fn encoded_len(proof: &MerkleBlockProof) -> usize {
        HEADER_SIZE
            + 4
            + compact_size_len(proof.hashes.len() as u64)
            + proof.hashes.len() * HASH_SIZE
            + compact_size_len(proof.flags.len() as u64)
            + proof.flags.len()
    }

    /// Serialize a proof.
    pub fn encode(&self, proof: &MerkleBlockProof) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::encoded_len(proof));
        out.extend_from_slice(proof.header.as_bytes());
        out.extend_from_slice(&proof.total_transactions.to_le_bytes());
        write_compact_size(&mut out, proof.hashes.len() as u64);
        for hash in &proof.hashes {
            out.extend_from_slice(hash);
        }
        write_compact_size(&mut out, proof.flags.len() as u64);
        out.extend_from_slice(&proof.flags);
        out
    }

    /// Parse a proof and check that its flags and hashes form a tree.
    pub fn decode(&self, bytes: &[u8]) -> Result<MerkleBlockProof, DecodeError> {
        let proof = self.decode_fields(bytes).map_err(|e| {
            tracing::warn!("Rejected merkle block ({} bytes): {}", bytes.len(), e);
            e
        })?;

        if let Err(e) = proof.extract_matches(self.reject_duplicate_subtrees) {
            tracing::warn!("Rejected merkle block for {:?}: {}", proof.header, e);
            return Err(e);
        }

        tracing::debug!(
            "Decoded merkle block: {} txs, {} hashes, {} flag bytes",
            proof.total_transactions,
            proof.hashes.len(),
            proof.flags.len()
        );
        Ok(proof)
    }

    fn decode_fields(&self, bytes: &[u8]) -> Result<MerkleBlockProof, DecodeError> {
        let mut reader = WireReader::new(bytes);

        let header = BlockHeader::from_bytes(reader.read_array::<HEADER_SIZE>()?);

        let total_transactions = reader.read_u32_le()?;
        if total_transactions == 0 {
            return Err(DecodeError::EmptyBlock);
        }
        if total_transactions > self.max_transactions {
            return Err(DecodeError::LimitExceeded {
                what: "transactions",
                count: total_transactions as u64,
                max: self.max_transactions as u64,
            });
        }

        let hash_count = reader.read_compact_size()?;
        if hash_count > self.max_transactions as u64 {
            return Err(DecodeError::LimitExceeded {
                what: "hashes",
                count: hash_count,
                max: self.max_transactions as u64,
            });
        }
        let hash_count = hash_count as usize;
        // Never trust the declared count for the allocation.
        let capacity = hash_count.min(reader.remaining() / HASH_SIZE);
        let mut hashes: Vec<Hash> = Vec::with_capacity(capacity);
        for _ in 0..hash_count {
            hashes.push(reader.read_array::<HASH_SIZE>()?);
        }

        let flag_count = reader.read_compact_size()?;
        if flag_count > self.max_flag_bytes as u64 {
            return Err(DecodeError::LimitExceeded {
                what: "flag bytes",
                count: flag_count,
                max: self.max_flag_bytes as u64,
            });
        }
        let flags = reader.read_bytes(flag_count as usize)?.to_vec();

        reader.finish()?;

        Ok(MerkleBlockProof {
            header,
            total_transactions,
            hashes,
            flags,
        })
    }
}

/// Serialize a proof with default limits.
pub fn encode_proof(proof: &MerkleBlockProof) -> Vec<u8> {
    ProofCodec::default().encode(proof)
}

/// Parse a proof with default limits.
pub fn decode_proof(bytes: &[u8]) -> Result<MerkleBlockProof, DecodeError> {
    ProofCodec::default().decode(bytes)
}
