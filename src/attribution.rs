//! Exact Shapley attribution.
//!
//! The attributor walks every coalition containing a feature, weighs the
//! feature's marginal contribution to it, and sums the terms in canonical
//! coalition order.

use std::collections::BTreeMap;
use std::fmt;

use crate::policy::{coalition_weight, AttributionPolicyV1, UniverseSelection};
use crate::types::{Coalition, OutcomeTable, ShapleyValues};

/// Error type for attribution operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ShapleyError {
    /// The outcome table has no entries, so no universe size exists.
    #[error("Outcome table is empty")]
    EmptyInput,
    /// A coalition minus the attributed feature is absent from the table.
    #[error("Missing outcome for subset {coalition} (required to attribute feature {feature})")]
    MissingSubset {
        /// Feature being attributed.
        feature: String,
        /// The subset that was expected in the table.
        coalition: String,
    },
    /// Several distinct coalitions share the maximal size.
    #[error("Ambiguous universe: {candidates} distinct coalitions of maximal size {size}")]
    AmbiguousUniverse {
        /// Maximal coalition size.
        size: usize,
        /// Number of coalitions with that size.
        candidates: usize,
    },
    /// Attributed values do not sum to `v(N) - v(∅)`.
    #[error("Efficiency violated: values sum to {actual}, expected {expected}")]
    EfficiencyViolation {
        /// `v(N) - v(∅)`.
        expected: f64,
        /// Sum of the attributed values.
        actual: f64,
    },
}

impl ShapleyError {
    /// Create a missing subset error naming the expected coalition.
    pub fn missing_subset<F: fmt::Display>(feature: &F, coalition: &Coalition<F>) -> Self {
        Self::MissingSubset {
            feature: feature.to_string(),
            coalition: coalition.to_string(),
        }
    }
}

/// Result alias for attribution operations.
pub type Result<T> = std::result::Result<T, ShapleyError>;

/// Shapley attributor configured by an [`AttributionPolicyV1`].
///
/// ## Algorithm
///
/// For a feature `i` and universe size `n` (largest coalition in the table):
///
/// 1. Visit every coalition `S ∋ i` in canonical order
/// 2. Look up `v(S)` and `v(S \ {i})`
/// 3. Add `(s-1)! (n-s)! / n! * (v(S) - v(S \ {i}))`
///
/// A feature no coalition mentions gets `0.0`.
#[derive(Debug, Clone, Default)]
pub struct ShapleyAttributor {
    policy: AttributionPolicyV1,
}

impl ShapleyAttributor {
    /// Create a new attributor.
    pub fn new(policy: AttributionPolicyV1) -> Self {
        Self { policy }
    }

    /// Get the policy.
    pub fn policy(&self) -> &AttributionPolicyV1 {
        &self.policy
    }

    /// Shapley value of a single feature.
    pub fn attribute<F>(&self, table: &OutcomeTable<F>, feature: &F) -> Result<f64>
    where
        F: Ord + Clone + fmt::Display,
    {
        let n = table.universe_size().ok_or(ShapleyError::EmptyInput)?;

        let mut value = 0.0;
        let mut terms = 0usize;

        for (coalition, outcome) in table.coalitions_containing(feature) {
            let without = coalition.without(feature);
            let outcome_without = table
                .get(&without)
                .ok_or_else(|| ShapleyError::missing_subset(feature, &without))?;

            let weight = coalition_weight(coalition.len(), n);
            let marginal = outcome - outcome_without;
            tracing::trace!(
                feature = %feature,
                coalition = %coalition,
                weight,
                marginal,
                "Coalition term"
            );

            value += weight * marginal;
            terms += 1;
        }

        tracing::debug!(
            feature = %feature,
            universe_size = n,
            coalitions = terms,
            value,
            "Attributed feature"
        );
        Ok(value)
    }

    /// Pick the feature universe `N` according to the policy.
    pub fn select_universe<F>(&self, table: &OutcomeTable<F>) -> Result<Coalition<F>>
    where
        F: Ord + Clone + fmt::Display,
    {
        let largest = table.largest_coalitions();
        let first = *largest.first().ok_or(ShapleyError::EmptyInput)?;

        if largest.len() > 1 {
            match self.policy.universe {
                UniverseSelection::LargestCoalition => {
                    tracing::warn!(
                        size = first.len(),
                        candidates = largest.len(),
                        universe = %first,
                        "Several maximal coalitions, using the first in canonical order"
                    );
                }
                UniverseSelection::UniqueGrandCoalition => {
                    return Err(ShapleyError::AmbiguousUniverse {
                        size: first.len(),
                        candidates: largest.len(),
                    });
                }
            }
        }

        Ok(first.clone())
    }

    /// Shapley value of every feature in the universe selected by the policy.
    pub fn attribute_all<F>(&self, table: &OutcomeTable<F>) -> Result<ShapleyValues<F>>
    where
        F: Ord + Clone + fmt::Display,
    {
        let universe = self.select_universe(table)?;
        self.attribute_over(table, &universe)
    }

    /// Shapley value of every feature in an explicitly given universe.
    ///
    /// Weights still use the table's largest coalition size as `n`.
    pub fn attribute_over<F>(
        &self,
        table: &OutcomeTable<F>,
        universe: &Coalition<F>,
    ) -> Result<ShapleyValues<F>>
    where
        F: Ord + Clone + fmt::Display,
    {
        let values = universe
            .iter()
            .map(|feature| -> Result<(F, f64)> {
                Ok((feature.clone(), self.attribute(table, feature)?))
            })
            .collect::<Result<BTreeMap<F, f64>>>()?;

        tracing::debug!(
            universe = %universe,
            policy = self.policy.policy_id(),
            "Attributed universe"
        );
        Ok(ShapleyValues::new(values))
    }

    /// Check that `values` sum to `v(N) - v(∅)` within the policy tolerance.
    ///
    /// Passes vacuously when the table lacks `v(N)` or `v(∅)`.
    pub fn check_efficiency<F>(&self, table: &OutcomeTable<F>, values: &ShapleyValues<F>) -> Result<()>
    where
        F: Ord + Clone,
    {
        let Some(gap) = values.efficiency_gap(table) else {
            return Ok(());
        };

        // NaN gaps fail too
        if !(gap.abs() <= self.policy.efficiency_tolerance) {
            let actual = values.total();
            return Err(ShapleyError::EfficiencyViolation {
                expected: actual - gap,
                actual,
            });
        }
        Ok(())
    }
}

/// Shapley value of `feature` under the default policy.
///
/// Returns `0.0` for a feature that no coalition in the table mentions.
pub fn compute_shapley_value<F>(table: &OutcomeTable<F>, feature: &F) -> Result<f64>
where
    F: Ord + Clone + fmt::Display,
{
    ShapleyAttributor::default().attribute(table, feature)
}

/// Shapley value of every feature in the table's largest coalition.
pub fn get_shapley_values<F>(table: &OutcomeTable<F>) -> Result<ShapleyValues<F>>
where
    F: Ord + Clone + fmt::Display,
{
    ShapleyAttributor::default().attribute_all(table)
}
