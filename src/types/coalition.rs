//! Coalition (feature subset) type.

use serde::Serialize;
use std::fmt;

/// A set of features, stored canonically.
///
/// Members are kept sorted and deduplicated, so two coalitions built from the
/// same features in any order compare equal and occupy the same key in an
/// [`OutcomeTable`](super::OutcomeTable). The derived `Ord` is lexicographic
/// over the canonical member sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Coalition<F>(Vec<F>);

impl<F: Ord> Coalition<F> {
    /// Build a coalition from any collection of features.
    pub fn new<I: IntoIterator<Item = F>>(members: I) -> Self {
        let mut members: Vec<F> = members.into_iter().collect();
        members.sort();
        members.dedup();
        Self(members)
    }

    /// The empty coalition.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the coalition has no members.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if a feature is a member.
    pub fn contains(&self, feature: &F) -> bool {
        self.0.binary_search(feature).is_ok()
    }

    /// Members in canonical order.
    pub fn members(&self) -> &[F] {
        &self.0
    }

    /// Iterate members in canonical order.
    pub fn iter(&self) -> std::slice::Iter<'_, F> {
        self.0.iter()
    }
}

impl<F: Ord + Clone> Coalition<F> {
    /// This coalition with `feature` removed.
    ///
    /// Returns an identical copy when `feature` is not a member.
    pub fn without(&self, feature: &F) -> Self {
        Self(self.0.iter().filter(|f| *f != feature).cloned().collect())
    }

    /// This coalition with `feature` added.
    pub fn with(&self, feature: F) -> Self {
        match self.0.binary_search(&feature) {
            Ok(_) => self.clone(),
            Err(pos) => {
                let mut members = self.0.clone();
                members.insert(pos, feature);
                Self(members)
            }
        }
    }
}

impl<F: Ord> Default for Coalition<F> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<F: Ord> FromIterator<F> for Coalition<F> {
    fn from_iter<I: IntoIterator<Item = F>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a, F> IntoIterator for &'a Coalition<F> {
    type Item = &'a F;
    type IntoIter = std::slice::Iter<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<F: fmt::Display> fmt::Display for Coalition<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, member) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member)?;
        }
        write!(f, "}}")
    }
}
