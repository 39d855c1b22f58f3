use std::fmt;
use std::str::FromStr;

use crate::error::{InputField, InvalidInput};

/// Right conveyed by a European option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `"call"` or `"put"`, ignoring case and surrounding whitespace.
impl FromStr for OptionType {
    type Err = InvalidInput;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(InvalidInput::UnsupportedOptionType(s.to_string())),
        }
    }
}

impl TryFrom<String> for OptionType {
    type Error = InvalidInput;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<OptionType> for String {
    fn from(value: OptionType) -> Self {
        value.as_str().to_string()
    }
}

/// Inputs to a single Black-Scholes valuation.
///
/// Construction does not validate; [`PricingRequest::validate`] runs before
/// every price computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingRequest {
    /// Underlying asset price (S)
    pub underlying_price: f64,
    /// Strike price (K)
    pub strike_price: f64,
    /// Time to maturity in years (T)
    pub years_to_exp: f64,
    /// Annualised risk-free rate as a decimal (r)
    pub risk_free_rate: f64,
    /// Annualised volatility as a decimal (sigma)
    pub volatility: f64,
    pub option_type: OptionType,
}

impl PricingRequest {
    #[allow(non_snake_case)]
    pub fn new(S: f64, K: f64, T: f64, r: f64, sigma: f64, option_type: OptionType) -> Self {
        Self {
            underlying_price: S,
            strike_price: K,
            years_to_exp: T,
            risk_free_rate: r,
            volatility: sigma,
            option_type,
        }
    }

    /// Same inputs with the other option type.
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Checks S > 0, K > 0, T > 0, r >= 0, sigma > 0 in that order, plus
    /// finiteness of each value and a non-zero sigma * sqrt(T). Returns the
    /// first violation.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        let s = finite(InputField::UnderlyingPrice, self.underlying_price)?;
        if s <= 0.0 {
            return Err(InvalidInput::NonPositiveUnderlying(s));
        }

        let k = finite(InputField::StrikePrice, self.strike_price)?;
        if k <= 0.0 {
            return Err(InvalidInput::NonPositiveStrike(k));
        }

        let t = finite(InputField::TimeToMaturity, self.years_to_exp)?;
        if t <= 0.0 {
            return Err(InvalidInput::NonPositiveMaturity(t));
        }

        let r = finite(InputField::RiskFreeRate, self.risk_free_rate)?;
        if r < 0.0 {
            return Err(InvalidInput::NegativeRate(r));
        }

        let sigma = finite(InputField::Volatility, self.volatility)?;
        if sigma <= 0.0 {
            return Err(InvalidInput::NonPositiveVolatility(sigma));
        }

        // d1 divides by sigma * sqrt(T)
        if sigma * t.sqrt() == 0.0 {
            return Err(InvalidInput::VanishingVolTime { sigma, t });
        }

        Ok(())
    }
}

fn finite(field: InputField, value: f64) -> Result<f64, InvalidInput> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInput::NonFinite { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> PricingRequest {
        PricingRequest::new(100.0, 105.0, 0.5, 0.05, 0.2, OptionType::Call)
    }

    #[test]
    fn test_option_type_parsing() {
        assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(" Call ".parse::<OptionType>().unwrap(), OptionType::Call);

        let err = "straddle".parse::<OptionType>().unwrap_err();
        assert_eq!(err, InvalidInput::UnsupportedOptionType("straddle".into()));
        assert_eq!(err.field(), InputField::OptionType);
    }

    #[test]
    fn test_option_type_display_round_trips() {
        for ty in [OptionType::Call, OptionType::Put] {
            assert_eq!(ty.to_string().parse::<OptionType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(valid_request().validate().is_ok());
        // r = 0 is allowed
        let zero_rate = PricingRequest {
            risk_free_rate: 0.0,
            ..valid_request()
        };
        assert!(zero_rate.validate().is_ok());
    }

    #[test]
    fn test_first_violation_wins() {
        // S and sigma both invalid, S is checked first
        let req = PricingRequest {
            underlying_price: -1.0,
            volatility: 0.0,
            ..valid_request()
        };
        assert_eq!(req.validate(), Err(InvalidInput::NonPositiveUnderlying(-1.0)));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let req = PricingRequest {
            years_to_exp: f64::INFINITY,
            ..valid_request()
        };
        let err = req.validate().unwrap_err();
        assert_eq!(err.field(), InputField::TimeToMaturity);

        let req = PricingRequest {
            strike_price: f64::NAN,
            ..valid_request()
        };
        assert_eq!(req.validate().unwrap_err().field(), InputField::StrikePrice);
    }

    #[test]
    fn test_vanishing_vol_time_rejected() {
        let tiny = f64::MIN_POSITIVE;
        let req = PricingRequest {
            years_to_exp: tiny,
            volatility: tiny,
            ..valid_request()
        };
        assert_eq!(
            req.validate(),
            Err(InvalidInput::VanishingVolTime {
                sigma: tiny,
                t: tiny
            })
        );
    }

    #[test]
    fn test_with_option_type_keeps_inputs() {
        let put = valid_request().with_option_type(OptionType::Put);
        assert_eq!(put.option_type, OptionType::Put);
        assert_eq!(put.strike_price, 105.0);
    }
}
