//! Standard normal distribution used by the pricer.
//!
//! Φ is computed through the complementary error function rather than
//! `0.5 * (1 + erf(x / √2))`, which loses all precision in the lower tail.

use crate::models::traits::CumulativeNormal;

/// Standard normal CDF: Φ(x) = 0.5 * erfc(-x / √2)
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x * std::f64::consts::FRAC_1_SQRT_2)
}

/// Φ backed by `libm::erfc`. This is the pricer's default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErfcNormal;

impl CumulativeNormal for ErfcNormal {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        norm_cdf(x)
    }
}

/// Φ backed by the `statrs` error function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatrsNormal;

impl CumulativeNormal for StatrsNormal {
    #[inline]
    fn cdf(&self, x: f64) -> f64 {
        0.5 * statrs::function::erf::erfc(-x * std::f64::consts::FRAC_1_SQRT_2)
    }
}
