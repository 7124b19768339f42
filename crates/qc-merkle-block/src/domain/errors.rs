//! # Domain Errors
//!
//! Error types for Merkle block construction and decoding.

use thiserror::Error;

/// Hash type alias (32-byte double SHA-256, internal byte order).
pub type Hash = [u8; 32];

/// Boxed error returned by a fallible match predicate.
pub type PredicateFailure = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Merkle block error types.
#[derive(Debug, Error)]
pub enum MerkleBlockError {
    /// A block must carry at least one transaction (the coinbase).
    #[error("Block has no transactions")]
    EmptyBlock,

    /// Transaction count exceeds the configured limit or the u32 wire field.
    #[error("Too many transactions: {count} > {max}")]
    TooManyTransactions {
        /// Transactions in the block
        count: usize,
        /// Maximum accepted
        max: usize,
    },

    /// Match bitmap does not have one entry per transaction.
    #[error("Match bitmap length mismatch: {got} != {expected}")]
    BitmapLengthMismatch {
        /// Number of transactions
        expected: usize,
        /// Number of bitmap entries supplied
        got: usize,
    },

    /// The match predicate itself failed. No partial proof is returned.
    #[error("Predicate failed: {0}")]
    Predicate(#[source] PredicateFailure),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Proof could not be decoded or reconstructed.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Errors raised while decoding or reconstructing a proof.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Input ended before a field was complete.
    #[error("Unexpected end of input: needed {needed} bytes at offset {offset}")]
    UnexpectedEof {
        /// Offset of the field being read
        offset: usize,
        /// Bytes the field required
        needed: usize,
    },

    /// Flag bits and hashes do not describe a consistent tree.
    #[error("Malformed proof: {0}")]
    MalformedProof(ProofDefect),

    /// Proof declares zero transactions.
    #[error("Proof declares zero transactions")]
    EmptyBlock,

    /// Bytes left over after the flag bytes.
    #[error("Trailing bytes after proof: {0}")]
    TrailingBytes(usize),

    /// CompactSize integer not in its shortest form.
    #[error("Non-canonical compact size integer")]
    NonCanonicalCompactSize,

    /// A declared count exceeds the configured limit.
    #[error("Too many {what}: {count} > {max}")]
    LimitExceeded {
        /// Which count overflowed
        what: &'static str,
        /// Declared count
        count: u64,
        /// Maximum accepted
        max: u64,
    },
}

/// Errors building a transaction bloom filter from wire fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Filter data is empty or larger than the protocol allows.
    #[error("Invalid filter size: {size} bytes (max {max})")]
    InvalidSize {
        /// Bytes supplied
        size: usize,
        /// Maximum accepted
        max: usize,
    },

    /// Hash function count is zero or larger than the protocol allows.
    #[error("Invalid hash function count: {count} (max {max})")]
    InvalidHashFuncs {
        /// Count supplied
        count: u32,
        /// Maximum accepted
        max: u32,
    },
}

/// Why a flag/hash stream failed reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProofDefect {
    /// More hashes than transactions.
    TooManyHashes,
    /// Fewer flag bits than hashes.
    NotEnoughFlagBits,
    /// Traversal needed a hash that was not supplied.
    HashesExhausted,
    /// Traversal needed a flag bit that was not supplied.
    FlagBitsExhausted,
    /// Traversal finished with hashes left over.
    UnusedHashes,
    /// Traversal finished with whole flag bytes left over.
    UnusedFlagBytes,
    /// Two sibling subtrees carry the same hash.
    DuplicateSubtree,
}

impl std::fmt::Display for ProofDefect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::TooManyHashes => "more hashes than transactions",
            Self::NotEnoughFlagBits => "fewer flag bits than hashes",
            Self::HashesExhausted => "ran out of hashes",
            Self::FlagBitsExhausted => "ran out of flag bits",
            Self::UnusedHashes => "not all hashes consumed",
            Self::UnusedFlagBytes => "not all flag bytes consumed",
            Self::DuplicateSubtree => "duplicate sibling subtree",
        };
        f.write_str(reason)
    }
}

impl From<ProofDefect> for DecodeError {
    fn from(defect: ProofDefect) -> Self {
        DecodeError::MalformedProof(defect)
    }
}
