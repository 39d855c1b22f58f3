//! Closed-form Black-Scholes pricing of European options.
//!
//! **Call Price**: C = S·Φ(d₁) - K·e^(-rT)·Φ(d₂)
//! **Put Price**: P = K·e^(-rT)·Φ(-d₂) - S·Φ(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

pub mod types;

pub use types::{OptionType, PricingRequest};

use tracing::debug;

use crate::error::PricingResult;
use crate::models::normal::ErfcNormal;
use crate::models::traits::CumulativeNormal;
use crate::models::utils::{discount_factor, log_moneyness};

/// d₁ term of the Black-Scholes formula. Inputs are assumed valid.
#[allow(non_snake_case)]
pub fn d1(S: f64, K: f64, T: f64, r: f64, sigma: f64) -> f64 {
    (log_moneyness(S, K) + (r + 0.5 * sigma.powi(2)) * T) / (sigma * T.sqrt())
}

/// d₂ = d₁ - σ√T
#[allow(non_snake_case)]
pub fn d2(d1: f64, T: f64, sigma: f64) -> f64 {
    d1 - sigma * T.sqrt()
}

/// Price a European option with the default Φ ([`ErfcNormal`]).
#[allow(non_snake_case)]
pub fn black_scholes_price(
    S: f64,
    K: f64,
    T: f64,
    r: f64,
    sigma: f64,
    option_type: OptionType,
) -> PricingResult<f64> {
    price_with_cdf(
        &PricingRequest::new(S, K, T, r, sigma, option_type),
        &ErfcNormal,
    )
}

/// Price a European option using the supplied Φ.
///
/// The request is validated in full before any arithmetic runs.
pub fn price_with_cdf<N>(request: &PricingRequest, cdf: &N) -> PricingResult<f64>
where
    N: CumulativeNormal + ?Sized,
{
    if let Err(e) = request.validate() {
        debug!(error = %e, "rejected pricing request");
        return Err(e.into());
    }

    let PricingRequest {
        underlying_price: s,
        strike_price: k,
        years_to_exp: t,
        risk_free_rate: r,
        volatility: sigma,
        option_type,
    } = *request;

    let price = match option_type {
        OptionType::Call => bs_call_price(s, k, t, r, sigma, cdf),
        OptionType::Put => bs_put_price(s, k, t, r, sigma, cdf),
    };

    debug!(
        %option_type,
        spot = s,
        strike = k,
        tte = t,
        rate = r,
        vol = sigma,
        price,
        "priced european option"
    );

    Ok(price)
}

#[allow(non_snake_case)]
fn bs_call_price<N: CumulativeNormal + ?Sized>(
    S: f64,
    K: f64,
    T: f64,
    r: f64,
    sigma: f64,
    cdf: &N,
) -> f64 {
    let d1 = d1(S, K, T, r, sigma);
    let d2 = d2(d1, T, sigma);
    S * cdf.cdf(d1) - K * discount_factor(r, T) * cdf.cdf(d2)
}

#[allow(non_snake_case)]
fn bs_put_price<N: CumulativeNormal + ?Sized>(
    S: f64,
    K: f64,
    T: f64,
    r: f64,
    sigma: f64,
    cdf: &N,
) -> f64 {
    let d1 = d1(S, K, T, r, sigma);
    let d2 = d2(d1, T, sigma);
    K * discount_factor(r, T) * cdf.cdf(-d2) - S * cdf.cdf(-d1)
}

impl PricingRequest {
    /// Price this request with the default Φ.
    pub fn price(&self) -> PricingResult<f64> {
        price_with_cdf(self, &ErfcNormal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputField, PricingError};
    use crate::models::normal::StatrsNormal;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_d1_d2_at_the_money() {
        // S = K, r = 0: d1 = σ√T / 2, d2 = -σ√T / 2
        let d1 = d1(50.0, 50.0, 1.0, 0.0, 0.3);
        assert_abs_diff_eq!(d1, 0.15, epsilon = 1e-15);
        assert_abs_diff_eq!(d2(d1, 1.0, 0.3), -0.15, epsilon = 1e-15);
    }

    #[test]
    fn test_reference_prices() {
        let call = black_scholes_price(100.0, 105.0, 0.5, 0.05, 0.2, OptionType::Call).unwrap();
        let put = black_scholes_price(100.0, 105.0, 0.5, 0.05, 0.2, OptionType::Put).unwrap();
        assert_abs_diff_eq!(call, 4.5817, epsilon = 1e-3);
        assert_abs_diff_eq!(put, 6.9892, epsilon = 1e-3);
    }

    #[test]
    fn test_cdf_backends_agree() {
        let req = PricingRequest::new(120.0, 100.0, 2.0, 0.03, 0.35, OptionType::Put);
        let default = req.price().unwrap();
        let statrs = price_with_cdf(&req, &StatrsNormal).unwrap();
        // Φ differences are scaled by S and K in the price
        assert_abs_diff_eq!(default, statrs, epsilon = 1e-8);

        let d1 = d1(120.0, 100.0, 2.0, 0.03, 0.35);
        let d2 = d2(d1, 2.0, 0.35);
        for x in [d1, d2, -d1, -d2] {
            assert_abs_diff_eq!(ErfcNormal.cdf(x), StatrsNormal.cdf(x), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_underflowing_vol_time_rejected() {
        let tiny = f64::MIN_POSITIVE;
        let err = black_scholes_price(100.0, 100.0, tiny, 0.0, tiny, OptionType::Call).unwrap_err();
        assert_eq!(err.field(), InputField::Volatility);
        assert!(err.to_string().contains("underflows"));
    }

    #[test]
    fn test_custom_cdf_is_used() {
        struct Half;
        impl CumulativeNormal for Half {
            fn cdf(&self, _x: f64) -> f64 {
                0.5
            }
        }

        // With Φ ≡ 0.5 the call is (S - K·e^(-rT)) / 2
        let req = PricingRequest::new(100.0, 100.0, 1.0, 0.0, 0.2, OptionType::Call);
        let price = price_with_cdf(&req, &Half).unwrap();
        assert_abs_diff_eq!(price, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_validation_runs_before_cdf() {
        struct Unreachable;
        impl CumulativeNormal for Unreachable {
            fn cdf(&self, _x: f64) -> f64 {
                panic!("Φ must not be evaluated for an invalid request");
            }
        }

        let req = PricingRequest::new(100.0, 100.0, 0.0, 0.05, 0.2, OptionType::Call);
        let err = price_with_cdf(&req, &Unreachable).unwrap_err();
        assert!(matches!(err, PricingError::InvalidInput(_)));
        assert_eq!(err.field(), InputField::TimeToMaturity);
    }
}
