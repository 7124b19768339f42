//! # Outbound Ports
//!
//! Capabilities the engine needs from its collaborators.

use std::sync::Arc;

use crate::domain::Hash;

/// Probabilistic membership oracle, typically a bloom filter.
///
/// The engine only queries the oracle. Inserting into it while a build
/// is in flight is the caller's responsibility to prevent (lock or
/// snapshot the filter first).
pub trait MembershipOracle {
    /// Might `hash` be in the set? False positives are allowed.
    fn contains_hash(&self, hash: &Hash) -> bool;
}

impl<T: MembershipOracle + ?Sized> MembershipOracle for &T {
    fn contains_hash(&self, hash: &Hash) -> bool {
        (**self).contains_hash(hash)
    }
}

impl<T: MembershipOracle + ?Sized> MembershipOracle for Arc<T> {
    fn contains_hash(&self, hash: &Hash) -> bool {
        (**self).contains_hash(hash)
    }
}
