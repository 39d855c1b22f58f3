//! Historical market data interface
//!
//! Pricing never depends on this module. It describes the shape of a
//! historical data request and the daily bars a provider returns, and ships a
//! file-backed source that reads provider CSV exports from disk.

#[cfg(feature = "serde")]
mod csv_source;

#[cfg(feature = "serde")]
pub use csv_source::CsvDataSource;

use std::fmt;

use anyhow::{bail, Result};
use chrono::NaiveDate;

/// Descriptive asset class of a ticker. All classes are retrieved the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum AssetClass {
    #[default]
    Stock,
    Bond,
    Crypto,
    Forex,
    Commodity,
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetClass::Stock => "stock",
            AssetClass::Bond => "bond",
            AssetClass::Crypto => "crypto",
            AssetClass::Forex => "forex",
            AssetClass::Commodity => "commodity",
        };
        f.write_str(name)
    }
}

/// A ticker and a half-open date range `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRequest {
    ticker: String,
    start: NaiveDate,
    end: NaiveDate,
    asset_class: AssetClass,
}

impl DataRequest {
    /// Fails on an empty ticker, a ticker containing a path separator, or
    /// `end <= start`.
    pub fn new(
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
        asset_class: AssetClass,
    ) -> Result<Self> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            bail!("Ticker must not be empty");
        }
        if ticker.contains(['/', '\\']) {
            bail!("Ticker {:?} must not contain path separators", ticker);
        }
        if end <= start {
            bail!("End date {} must be after start date {}", end, start);
        }

        Ok(Self {
            ticker: ticker.to_string(),
            start,
            end,
            asset_class,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn asset_class(&self) -> AssetClass {
        self.asset_class
    }

    /// Whether `date` falls inside `[start, end)`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

/// One daily OHLCV row.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OhlcvBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Split/dividend adjusted close, when the provider reports one
    pub adj_close: Option<f64>,
    pub volume: u64,
}

/// A provider of historical daily bars.
pub trait HistoricalDataSource {
    /// Bars inside the request's date range, sorted by date.
    fn fetch(&self, request: &DataRequest) -> Result<Vec<OhlcvBar>>;
}
