//! # shapley-attribution
//!
//! Exact Shapley value attribution for model outcomes.
//!
//! The crate answers one question:
//!
//! > Given the model outcome for every feature coalition, how much of the
//! > outcome does each feature **fairly account for**?
//!
//! ## Core Contract
//!
//! 1. The caller supplies an [`OutcomeTable`]: coalition → outcome
//! 2. [`compute_shapley_value`] attributes one feature
//! 3. [`get_shapley_values`] attributes every feature of the grand coalition
//!
//! ## Architecture
//!
//! ```text
//! OutcomeTable → ShapleyAttributor → ShapleyValues → fingerprint
//!                      ↓
//!             AttributionPolicyV1 (universe selection, tolerance)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Coalitions are canonical (sorted, deduplicated feature lists)
//! - Coalitions are visited in canonical order, fixing float summation order
//! - Same table + same policy → identical values and fingerprint
//!
//! ## Example
//!
//! ```
//! use shapley_attribution::{get_shapley_values, OutcomeTable};
//!
//! let table: OutcomeTable<&str> = OutcomeTable::from_iter([
//!     (vec![], 0.0),
//!     (vec!["A"], 2.0),
//!     (vec!["B"], 3.0),
//!     (vec!["B", "A"], 10.0),
//! ]);
//!
//! let values = get_shapley_values(&table).unwrap();
//! assert_eq!(values.get(&"A"), Some(4.5));
//! assert_eq!(values.get(&"B"), Some(5.5));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod policy;
pub mod attribution;
pub mod canonical;

// Re-exports
pub use types::{Coalition, OutcomeTable, ShapleyValues};
pub use policy::{AttributionPolicyV1, UniverseSelection, coalition_weight, factorial};
pub use attribution::{
    ShapleyAttributor, ShapleyError, Result,
    compute_shapley_value, get_shapley_values,
};
pub use canonical::{to_canonical_bytes, canonical_hash, canonical_hash_hex};

/// Schema version for attribution result types.
/// Increment on breaking changes to fingerprint layout.
pub const SHAPLEY_SCHEMA_VERSION: &str = "1.0.0";

/// Default policy version identifier.
pub const DEFAULT_POLICY_VERSION: &str = "attribution_policy_v1";
