//! # bs-pricer-lib: Closed-Form European Option Pricing
//!
//! `bs-pricer-lib` prices European calls and puts with the Black-Scholes formula.
//! Inputs are validated up front and a violation is reported as a typed
//! [`PricingError`] naming the offending input; nothing is computed for an
//! invalid request.
//!
//! ## Core Features
//!
//! - **Black-Scholes pricing**: [`price`] and [`PricingRequest::price`]
//! - **Reference normal CDF**: full double precision Φ via `libm::erfc`, swappable through
//!   [`CumulativeNormal`]
//! - **Configuration**: TOML pricing/data requests ([`PricerConfig`])
//! - **Historical data interface**: [`HistoricalDataSource`] with a CSV-backed
//!   [`CsvDataSource`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bs_pricer_lib::{price, OptionType};
//!
//! let call = price(100.0, 105.0, 0.5, 0.05, 0.2, OptionType::Call)?;
//! let put = price(100.0, 105.0, 0.5, 0.05, 0.2, OptionType::Put)?;
//!
//! // Put-call parity: C - P = S - K·e^(-rT)
//! let parity = call - put - (100.0 - 105.0 * (-0.05_f64 * 0.5).exp());
//! assert!(parity.abs() < 1e-8);
//! # Ok::<(), bs_pricer_lib::PricingError>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (`debug` for priced requests and loaded data,
//! `warn` for skipped data rows) and never installs a subscriber itself.

// ================================================================================================
// MODULES
// ================================================================================================

#[cfg(feature = "serde")]
pub mod config;
pub mod data;
pub mod error;
pub mod models;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Pricing inputs and errors
pub use error::{InputField, InvalidInput, PricingError, PricingResult};
pub use models::bs::{price_with_cdf, OptionType, PricingRequest};

// Normal distribution
pub use models::normal::{norm_cdf, ErfcNormal, StatrsNormal};
pub use models::traits::CumulativeNormal;

// Historical data interface
pub use data::{AssetClass, DataRequest, HistoricalDataSource, OhlcvBar};

#[cfg(feature = "serde")]
pub use config::{DataConfig, PricerConfig};
#[cfg(feature = "serde")]
pub use data::CsvDataSource;

// ================================================================================================
// PRICING
// ================================================================================================

/// Price a European option under Black-Scholes assumptions.
///
/// # Arguments
///
/// * `S` - Underlying asset price, must be > 0
/// * `K` - Strike price, must be > 0
/// * `T` - Time to maturity in years, must be > 0
/// * `r` - Annualised risk-free rate as a decimal, must be >= 0
/// * `sigma` - Annualised volatility as a decimal, must be > 0
/// * `option_type` - [`OptionType::Call`] or [`OptionType::Put`]
///
/// Every value must also be finite.
///
/// # Errors
///
/// [`PricingError::InvalidInput`] for the first input, in the order above, that
/// breaks its constraint. Validation completes before any arithmetic.
///
/// # Pricing Methodology
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2)·T) / (σ·√T)
/// d2 = d1 - σ·√T
/// call = S·Φ(d1) - K·e^(-rT)·Φ(d2)
/// put  = K·e^(-rT)·Φ(-d2) - S·Φ(-d1)
/// ```
///
/// The result is not clamped at zero.
///
/// # Example
///
/// ```rust
/// use bs_pricer_lib::{price, InputField, OptionType};
///
/// let call = price(50.0, 50.0, 1.0, 0.0, 0.3, OptionType::Call).unwrap();
/// assert!((call - 5.9618).abs() < 1e-3);
///
/// let err = price(50.0, 50.0, 0.0, 0.0, 0.3, OptionType::Call).unwrap_err();
/// assert_eq!(err.field(), InputField::TimeToMaturity);
/// ```
#[allow(non_snake_case)]
pub fn price(
    S: f64,
    K: f64,
    T: f64,
    r: f64,
    sigma: f64,
    option_type: OptionType,
) -> PricingResult<f64> {
    models::bs::black_scholes_price(S, K, T, r, sigma, option_type)
}
