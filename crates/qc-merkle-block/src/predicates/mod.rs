//! # Match Predicates
//!
//! Decide which transactions of a block a merkle block proof reveals.
//!
//! Any type implementing [`MatchPredicate`] can drive a build. Two
//! variants ship with the crate:
//! - [`BloomMatch`]: probabilistic, delegates to a [`MembershipOracle`]
//! - [`ExactSetMatch`]: exact membership in a set of target hashes
//!
//! [`TxMatcher`] tags the two for callers that pick one at runtime.
//!
//! [`MembershipOracle`]: crate::ports::MembershipOracle

pub mod bloom;
pub mod exact_set;

use std::convert::Infallible;

pub use bloom::BloomMatch;
pub use exact_set::ExactSetMatch;

use crate::domain::Hash;
use crate::ports::MembershipOracle;

/// Selection capability evaluated once per transaction, in block order.
///
/// Implementations must not mutate anything the build depends on.
pub trait MatchPredicate {
    /// Failure type for predicates backed by fallible sources.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Should the transaction with `hash` at `position` be revealed?
    fn matches(&self, hash: &Hash, position: usize) -> Result<bool, Self::Error>;
}

impl<P: MatchPredicate + ?Sized> MatchPredicate for &P {
    type Error = P::Error;

    fn matches(&self, hash: &Hash, position: usize) -> Result<bool, Self::Error> {
        (**self).matches(hash, position)
    }
}

/// Either shipped predicate, chosen at runtime.
#[derive(Clone, Debug)]
pub enum TxMatcher<F> {
    /// Bloom filter membership.
    Bloom(BloomMatch<F>),
    /// Exact target set membership.
    ExactSet(ExactSetMatch),
}

impl<F: MembershipOracle> MatchPredicate for TxMatcher<F> {
    type Error = Infallible;

    fn matches(&self, hash: &Hash, position: usize) -> Result<bool, Self::Error> {
        match self {
            TxMatcher::Bloom(bloom) => bloom.matches(hash, position),
            TxMatcher::ExactSet(set) => set.matches(hash, position),
        }
    }
}

impl<F> From<BloomMatch<F>> for TxMatcher<F> {
    fn from(bloom: BloomMatch<F>) -> Self {
        TxMatcher::Bloom(bloom)
    }
}

impl<F> From<ExactSetMatch> for TxMatcher<F> {
    fn from(set: ExactSetMatch) -> Self {
        TxMatcher::ExactSet(set)
    }
}
