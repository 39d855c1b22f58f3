pub mod bs;
pub mod normal;

/// Common traits used by the pricing models
pub mod traits {
    /// Standard normal cumulative distribution function Φ.
    ///
    /// Implementations must be pure: the same `x` always yields the same value.
    pub trait CumulativeNormal: Send + Sync {
        fn cdf(&self, x: f64) -> f64;
    }
}

/// Small helpers shared by the pricing models
pub mod utils {
    /// Calculate log-moneyness of the spot against the strike: ln(S/K)
    pub fn log_moneyness(spot: f64, strike: f64) -> f64 {
        (spot / strike).ln()
    }

    /// Discount factor e^(-rT)
    pub fn discount_factor(r: f64, t: f64) -> f64 {
        (-r * t).exp()
    }
}
