use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::data::{AssetClass, DataRequest};
use crate::models::bs::{OptionType, PricingRequest};

/// Historical data section of a [`PricerConfig`]
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataConfig {
    pub ticker: String,
    /// First date included
    pub start: NaiveDate,
    /// First date excluded
    pub end: NaiveDate,

    #[serde(default)]
    pub asset_class: AssetClass,

    /// Directory holding `<TICKER>.csv` exports
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl DataConfig {
    /// Build the validated request for this section.
    pub fn request(&self) -> Result<DataRequest> {
        DataRequest::new(&self.ticker, self.start, self.end, self.asset_class)
    }
}

/// Top-level configuration file.
///
/// ```toml
/// [request]
/// underlying_price = 100.0
/// strike_price = 105.0
/// years_to_exp = 0.5
/// risk_free_rate = 0.05
/// volatility = 0.2
/// option_type = "call"
///
/// [data]
/// ticker = "AAPL"
/// start = "2024-01-01"
/// end = "2024-02-01"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PricerConfig {
    #[serde(default = "default_request")]
    pub request: PricingRequest,

    #[serde(default)]
    pub data: Option<DataConfig>,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            request: default_request(),
            data: None,
        }
    }
}

impl PricerConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: PricerConfig = toml::from_str(s).context("Failed to parse pricer config")?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&raw)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "loaded pricer config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.request
            .validate()
            .context("Invalid pricing request in config")?;
        if let Some(data) = &self.data {
            data.request().context("Invalid data section in config")?;
        }
        Ok(())
    }
}

/// The illustrative request: S=100, K=105, T=0.5, r=5%, sigma=20%, call
fn default_request() -> PricingRequest {
    PricingRequest::new(100.0, 105.0, 0.5, 0.05, 0.2, OptionType::Call)
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data/raw")
}
