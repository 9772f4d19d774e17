//! Combinatorial coalition weights.

/// Exact factorial, `None` once the result no longer fits in a `u128`.
///
/// Exact through `34!`.
pub fn factorial(k: usize) -> Option<u128> {
    (1..=k as u128).try_fold(1u128, |acc, x| acc.checked_mul(x))
}

/// Weight of coalition `S` in the Shapley sum for a feature `i ∈ S`.
///
/// Formula:
/// ```text
/// weight = (s-1)! * (n-s)! / n!
/// ```
///
/// This is the probability that, with features arriving in a uniformly random
/// order, the features already present when `i` arrives are exactly `S \ {i}`.
///
/// Factorials are computed exactly and divided as `f64`. When `n!` overflows
/// the equivalent product `(1/n) * Π_{k=1}^{s-1} k / (n-s+k)` is used instead.
///
/// ## Parameters
///
/// - `size`: `s = |S|`, at least 1
/// - `universe`: `n`, at least `size`
pub fn coalition_weight(size: usize, universe: usize) -> f64 {
    debug_assert!(size >= 1 && size <= universe, "need 1 <= s <= n");

    // (s-1)! (n-s)! <= (n-1)! <= n!, so the numerator fits whenever n! does
    let exact = factorial(universe).and_then(|denominator| {
        let numerator = factorial(size - 1)?.checked_mul(factorial(universe - size)?)?;
        Some(numerator as f64 / denominator as f64)
    });

    exact.unwrap_or_else(|| {
        (1..size).fold(1.0 / universe as f64, |w, k| {
            w * k as f64 / (universe - size + k) as f64
        })
    })
}
