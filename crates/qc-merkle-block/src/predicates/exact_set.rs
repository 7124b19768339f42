//! Exact target set predicate

use std::collections::HashSet;
use std::convert::Infallible;

use super::MatchPredicate;
use crate::domain::Hash;

/// Matches transactions whose hash is one of the targets.
///
/// A target absent from the block simply never matches. Callers that
/// expect every target to be found must compare the number of matched
/// positions against the number of targets themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExactSetMatch {
    targets: HashSet<Hash>,
}

impl ExactSetMatch {
    /// Build from any collection of target hashes (internal byte order).
    pub fn new(targets: impl IntoIterator<Item = Hash>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
        }
    }

    /// Is `hash` one of the targets?
    pub fn contains(&self, hash: &Hash) -> bool {
        self.targets.contains(hash)
    }

    /// Number of distinct targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// True if there are no targets.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

impl FromIterator<Hash> for ExactSetMatch {
    fn from_iter<I: IntoIterator<Item = Hash>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl MatchPredicate for ExactSetMatch {
    type Error = Infallible;

    fn matches(&self, hash: &Hash, _position: usize) -> Result<bool, Self::Error> {
        Ok(self.contains(hash))
    }
}
