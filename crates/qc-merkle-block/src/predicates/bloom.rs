//! Bloom filter predicate

use std::convert::Infallible;

use super::MatchPredicate;
use crate::domain::Hash;
use crate::ports::MembershipOracle;

/// Matches transactions whose hash the filter reports as a member.
///
/// False positives over-select transactions; that is the price of the
/// filter's privacy, not a defect.
#[derive(Clone, Debug)]
pub struct BloomMatch<F> {
    filter: F,
}

impl<F> BloomMatch<F> {
    /// Wrap a filter (or a reference to one).
    pub fn new(filter: F) -> Self {
        Self { filter }
    }

    /// The wrapped filter.
    pub fn filter(&self) -> &F {
        &self.filter
    }

    /// Unwrap the filter.
    pub fn into_inner(self) -> F {
        self.filter
    }
}

impl<F: MembershipOracle> MatchPredicate for BloomMatch<F> {
    type Error = Infallible;

    fn matches(&self, hash: &Hash, _position: usize) -> Result<bool, Self::Error> {
        Ok(self.filter.contains_hash(hash))
    }
}
