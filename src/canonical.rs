//! Deterministic hashing of attribution results and policy parameters.
//!
//! Hashed values are encoded as compact JSON and fed to xxh64.
//!
//! ## Determinism Guarantees
//!
//! - Results and parameters are hashed as ordered sequences, never maps
//!   with unspecified order
//! - Floats enter the hash as their exact IEEE-754 bit pattern, so two
//!   values hash alike only when they are the same number
//! - `-0.0` is folded into `0.0` and every NaN into one quiet NaN, matching
//!   how results compare rather than how they happen to be stored

use serde::Serialize;
use xxhash_rust::xxh64::xxh64;

/// Canonical bit pattern of a float for hashing.
///
/// Exact for every finite and infinite value. Signed zeros share one
/// pattern, as do all NaNs, and NaN never collides with a number.
pub fn float_bits(value: f64) -> u64 {
    if value.is_nan() {
        f64::NAN.to_bits()
    } else if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

/// Encode a value as compact JSON bytes for hashing.
pub fn to_canonical_bytes<T: Serialize>(value: &T) -> Vec<u8> {
    serde_json::to_vec(value).expect("Canonical serialization failed")
}

/// xxh64 of a value's canonical encoding.
pub fn canonical_hash<T: Serialize>(value: &T) -> u64 {
    xxh64(&to_canonical_bytes(value), 0)
}

/// [`canonical_hash`] rendered as 16 hex digits.
pub fn canonical_hash_hex<T: Serialize>(value: &T) -> String {
    format!("{:016x}", canonical_hash(value))
}
