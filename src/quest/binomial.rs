//! Binomial coefficients for the negative-binomial outcome sums
//!
//! A 64-bit integer accumulator wraps around once both teams are larger
//! than about ten and silently corrupts the probabilities. Both helpers
//! here stay in floating point instead, so large coefficients degrade to
//! rounded approximations rather than garbage.

/// "n choose k" as an f64, via the iterative multiplicative form.
///
/// Exact while the result fits in 53 bits; finite and correctly scaled far
/// beyond the u64 range after that.
pub fn binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut product = 1.0_f64;
    for j in 1..=k {
        product *= (n - k + j) as f64 / j as f64;
    }
    product
}

/// Natural log of "n choose k".
///
/// Used by the outcome sums so that individual terms neither overflow nor
/// underflow even for very large health pools.
pub fn ln_binomial(n: u64, k: u64) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    let mut sum = 0.0_f64;
    for j in 1..=k {
        sum += ((n - k + j) as f64).ln() - (j as f64).ln();
    }
    sum
}
