//! Error types for option pricing.
//!
//! Pricing has a single failure kind, [`PricingError::InvalidInput`], raised
//! before any arithmetic runs. The payload says which input was rejected and
//! which constraint it broke.

use std::fmt;
use thiserror::Error;

/// Inputs accepted by the pricer, used to identify the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    /// Underlying asset price (S)
    UnderlyingPrice,
    /// Strike price (K)
    StrikePrice,
    /// Time to maturity in years (T)
    TimeToMaturity,
    /// Risk-free interest rate (r)
    RiskFreeRate,
    /// Volatility (sigma)
    Volatility,
    /// Call/put tag
    OptionType,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputField::UnderlyingPrice => "Underlying asset price (S)",
            InputField::StrikePrice => "Strike price (K)",
            InputField::TimeToMaturity => "Time to maturity (T)",
            InputField::RiskFreeRate => "Risk-free interest rate (r)",
            InputField::Volatility => "Volatility (sigma)",
            InputField::OptionType => "Option type",
        };
        f.write_str(name)
    }
}

/// A violated input constraint.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    #[error("Underlying asset price (S) must be positive, got {0}")]
    NonPositiveUnderlying(f64),

    #[error("Strike price (K) must be positive, got {0}")]
    NonPositiveStrike(f64),

    #[error("Time to maturity (T) must be positive, got {0}")]
    NonPositiveMaturity(f64),

    #[error("Risk-free interest rate (r) cannot be negative, got {0}")]
    NegativeRate(f64),

    #[error("Volatility (sigma) must be positive, got {0}")]
    NonPositiveVolatility(f64),

    #[error("Volatility (sigma) times sqrt(T) underflows to zero (sigma={sigma}, T={t})")]
    VanishingVolTime { sigma: f64, t: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: InputField, value: f64 },

    #[error("Unsupported option type: {0:?} (expected \"call\" or \"put\")")]
    UnsupportedOptionType(String),
}

impl InvalidInput {
    /// The input this violation refers to.
    pub fn field(&self) -> InputField {
        match self {
            InvalidInput::NonPositiveUnderlying(_) => InputField::UnderlyingPrice,
            InvalidInput::NonPositiveStrike(_) => InputField::StrikePrice,
            InvalidInput::NonPositiveMaturity(_) => InputField::TimeToMaturity,
            InvalidInput::NegativeRate(_) => InputField::RiskFreeRate,
            InvalidInput::NonPositiveVolatility(_) => InputField::Volatility,
            InvalidInput::VanishingVolTime { .. } => InputField::Volatility,
            InvalidInput::NonFinite { field, .. } => *field,
            InvalidInput::UnsupportedOptionType(_) => InputField::OptionType,
        }
    }
}

/// Errors returned by the pricer.
///
/// # Examples
/// ```
/// use bs_pricer_lib::{price, InputField, OptionType, PricingError};
///
/// let err = price(0.0, 105.0, 0.5, 0.05, 0.2, OptionType::Call).unwrap_err();
/// assert_eq!(err.field(), InputField::UnderlyingPrice);
/// assert_eq!(
///     err.to_string(),
///     "Invalid input: Underlying asset price (S) must be positive, got 0"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl PricingError {
    /// The input that caused the failure.
    pub fn field(&self) -> InputField {
        match self {
            PricingError::InvalidInput(inner) => inner.field(),
        }
    }
}

pub type PricingResult<T> = Result<T, PricingError>;
