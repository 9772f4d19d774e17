//! AttributionPolicy v1: universe selection and efficiency tolerance.
//!
//! `params_hash` covers every parameter. The tolerance enters it as its exact
//! float bit pattern, so tolerances that differ at all hash differently.

use serde::{Deserialize, Serialize};

use crate::canonical::{canonical_hash_hex, float_bits};
use crate::DEFAULT_POLICY_VERSION;

/// How the feature universe `N` is chosen from an outcome table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniverseSelection {
    /// First coalition of maximal size in canonical order.
    ///
    /// Tables with several distinct maximal coalitions still resolve, with a
    /// warning logged.
    LargestCoalition,
    /// Exactly one coalition of maximal size must exist.
    UniqueGrandCoalition,
}

impl Default for UniverseSelection {
    fn default() -> Self {
        Self::LargestCoalition
    }
}

impl std::fmt::Display for UniverseSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LargestCoalition => write!(f, "largest_coalition"),
            Self::UniqueGrandCoalition => write!(f, "unique_grand_coalition"),
        }
    }
}

/// Policy parameters as they enter the hash.
#[derive(Debug, Clone, Serialize)]
struct HashedPolicyParams<'a> {
    version: &'a str,
    universe: UniverseSelection,
    efficiency_tolerance: u64,
}

/// Attribution policy version 1.
///
/// ## Parameters
///
/// - `universe`: How the grand coalition is picked when attributing every feature
/// - `efficiency_tolerance`: Absolute tolerance for `Σφ = v(N) - v(∅)` checks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributionPolicyV1 {
    /// Policy version identifier.
    pub version: String,
    /// Universe selection rule.
    pub universe: UniverseSelection,
    /// Absolute tolerance used when checking efficiency.
    pub efficiency_tolerance: f64,
}

impl Default for AttributionPolicyV1 {
    fn default() -> Self {
        Self {
            version: DEFAULT_POLICY_VERSION.to_string(),
            universe: UniverseSelection::LargestCoalition,
            efficiency_tolerance: 1e-9,
        }
    }
}

impl AttributionPolicyV1 {
    /// Policy that rejects tables with more than one maximal coalition.
    pub fn strict() -> Self {
        Self {
            universe: UniverseSelection::UniqueGrandCoalition,
            ..Self::default()
        }
    }

    /// Set the efficiency tolerance.
    pub fn with_efficiency_tolerance(mut self, tolerance: f64) -> Self {
        self.efficiency_tolerance = tolerance;
        self
    }

    /// Policy identifier.
    pub fn policy_id(&self) -> &str {
        &self.version
    }

    /// Deterministic hash of the policy parameters.
    pub fn params_hash(&self) -> String {
        canonical_hash_hex(&HashedPolicyParams {
            version: &self.version,
            universe: self.universe,
            efficiency_tolerance: float_bits(self.efficiency_tolerance),
        })
    }
}
