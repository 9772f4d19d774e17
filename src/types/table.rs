//! Outcome table: model outcome observed for each feature coalition.

use std::collections::{BTreeMap, BTreeSet};

use super::coalition::Coalition;

/// Mapping from feature coalition to the model outcome observed for it.
///
/// Keys are canonical [`Coalition`]s held in a `BTreeMap`, so iteration
/// follows canonical key order and every computation over the table sums
/// its terms in the same order on every run.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeTable<F> {
    outcomes: BTreeMap<Coalition<F>, f64>,
}

impl<F: Ord> Default for OutcomeTable<F> {
    fn default() -> Self {
        Self {
            outcomes: BTreeMap::new(),
        }
    }
}

impl<F: Ord> OutcomeTable<F> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome for a coalition.
    ///
    /// Members are canonicalized first. Returns the outcome previously stored
    /// for the same set of features, if any.
    pub fn insert<I: IntoIterator<Item = F>>(&mut self, members: I, outcome: f64) -> Option<f64> {
        self.outcomes.insert(Coalition::new(members), outcome)
    }

    /// Record the outcome for an already canonical coalition.
    pub fn insert_coalition(&mut self, coalition: Coalition<F>, outcome: f64) -> Option<f64> {
        self.outcomes.insert(coalition, outcome)
    }

    /// Outcome stored for a coalition.
    pub fn get(&self, coalition: &Coalition<F>) -> Option<f64> {
        self.outcomes.get(coalition).copied()
    }

    /// Outcome for a set of features given in any order.
    pub fn outcome<I: IntoIterator<Item = F>>(&self, members: I) -> Option<f64> {
        self.get(&Coalition::new(members))
    }

    /// Number of coalitions in the table.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Iterate `(coalition, outcome)` pairs in canonical key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Coalition<F>, f64)> + '_ {
        self.outcomes.iter().map(|(c, v)| (c, *v))
    }

    /// Size of the largest coalition, i.e. the number of features `n`.
    ///
    /// `None` for an empty table.
    pub fn universe_size(&self) -> Option<usize> {
        self.outcomes.keys().map(Coalition::len).max()
    }

    /// All coalitions of maximal size, in canonical order.
    pub fn largest_coalitions(&self) -> Vec<&Coalition<F>> {
        match self.universe_size() {
            Some(n) => self.outcomes.keys().filter(|c| c.len() == n).collect(),
            None => Vec::new(),
        }
    }

    /// Coalitions that contain `feature`, in canonical order.
    pub fn coalitions_containing<'a>(
        &'a self,
        feature: &'a F,
    ) -> impl Iterator<Item = (&'a Coalition<F>, f64)> + 'a {
        self.iter().filter(move |(c, _)| c.contains(feature))
    }
}

impl<F: Ord + Clone> OutcomeTable<F> {
    /// Every feature mentioned by any coalition, sorted.
    pub fn features(&self) -> Vec<F> {
        let features: BTreeSet<&F> = self.outcomes.keys().flat_map(|c| c.iter()).collect();
        features.into_iter().cloned().collect()
    }

    /// Subsets `S \ {feature}` needed to attribute `feature` that the table lacks.
    ///
    /// Returned in canonical order. Empty when the table is complete for `feature`.
    pub fn missing_subsets(&self, feature: &F) -> Vec<Coalition<F>> {
        self.coalitions_containing(feature)
            .map(|(c, _)| c.without(feature))
            .filter(|without| !self.outcomes.contains_key(without))
            .collect()
    }
}

impl<F: Ord, I: IntoIterator<Item = F>> FromIterator<(I, f64)> for OutcomeTable<F> {
    fn from_iter<T: IntoIterator<Item = (I, f64)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (members, outcome) in iter {
            table.insert(members, outcome);
        }
        table
    }
}
