//! Core types for Shapley attribution.

pub mod coalition;
pub mod table;
pub mod values;

pub use coalition::Coalition;
pub use table::OutcomeTable;
pub use values::ShapleyValues;
