//! Attribution results.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use super::{Coalition, OutcomeTable};
use crate::canonical::{canonical_hash_hex, float_bits};

/// Shapley value of every feature in a universe.
///
/// Ordered by feature, so iteration and fingerprints are deterministic.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapleyValues<F: Ord> {
    values: BTreeMap<F, f64>,
}

impl<F: Ord> ShapleyValues<F> {
    /// Wrap per-feature values.
    pub fn new(values: BTreeMap<F, f64>) -> Self {
        Self { values }
    }

    /// Value for a feature, if it was attributed.
    pub fn get(&self, feature: &F) -> Option<f64> {
        self.values.get(feature).copied()
    }

    /// Number of attributed features.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no feature was attributed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(feature, value)` pairs ordered by feature.
    pub fn iter(&self) -> impl Iterator<Item = (&F, f64)> + '_ {
        self.values.iter().map(|(f, v)| (f, *v))
    }

    /// Attributed features, ordered.
    pub fn features(&self) -> impl Iterator<Item = &F> + '_ {
        self.values.keys()
    }

    /// Sum of all values.
    pub fn total(&self) -> f64 {
        self.values.values().sum()
    }

    /// Unwrap into the underlying map.
    pub fn into_map(self) -> BTreeMap<F, f64> {
        self.values
    }
}

impl<F: Ord + Clone> ShapleyValues<F> {
    /// Deviation from efficiency: `Σφ - (v(N) - v(∅))`.
    ///
    /// `N` is the set of attributed features. `None` when the table holds no
    /// outcome for `N` or for the empty coalition.
    pub fn efficiency_gap(&self, table: &OutcomeTable<F>) -> Option<f64> {
        let grand: Coalition<F> = self.values.keys().cloned().collect();
        let v_grand = table.get(&grand)?;
        let v_empty = table.get(&Coalition::empty())?;
        Some(self.total() - (v_grand - v_empty))
    }
}

impl<F: Ord + fmt::Display> ShapleyValues<F> {
    /// Deterministic fingerprint of the result.
    ///
    /// xxh64 over the schema version and `(feature, value bits)` pairs in
    /// feature order, rendered as 16 hex digits. Any two results whose values
    /// differ as numbers get different inputs to the hash.
    pub fn fingerprint(&self) -> String {
        let entries: Vec<(String, u64)> = self
            .values
            .iter()
            .map(|(f, v)| (f.to_string(), float_bits(*v)))
            .collect();
        canonical_hash_hex(&(crate::SHAPLEY_SCHEMA_VERSION, entries))
    }
}

impl<F: Ord> Default for ShapleyValues<F> {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

impl<F: Ord> FromIterator<(F, f64)> for ShapleyValues<F> {
    fn from_iter<I: IntoIterator<Item = (F, f64)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<F: Ord> IntoIterator for ShapleyValues<F> {
    type Item = (F, f64);
    type IntoIter = std::collections::btree_map::IntoIter<F, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
