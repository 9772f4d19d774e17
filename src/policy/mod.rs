//! Attribution policy and coalition weighting.

pub mod v1;
pub mod weights;

pub use v1::{AttributionPolicyV1, UniverseSelection};
pub use weights::{coalition_weight, factorial};
