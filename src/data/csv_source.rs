use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{DataRequest, HistoricalDataSource, OhlcvBar};

/// Row layout of a provider daily-history export.
/// Missing quotes are written as `null`; those cells become `None`.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: NaiveDate,
    #[serde(rename = "Open", deserialize_with = "csv::invalid_option")]
    open: Option<f64>,
    #[serde(rename = "High", deserialize_with = "csv::invalid_option")]
    high: Option<f64>,
    #[serde(rename = "Low", deserialize_with = "csv::invalid_option")]
    low: Option<f64>,
    #[serde(rename = "Close", deserialize_with = "csv::invalid_option")]
    close: Option<f64>,
    #[serde(rename = "Adj Close", default, deserialize_with = "csv::invalid_option")]
    adj_close: Option<f64>,
    #[serde(rename = "Volume", deserialize_with = "csv::invalid_option")]
    volume: Option<f64>,
}

impl CsvRow {
    /// `None` when a price is missing or non-finite, or the volume is not a
    /// whole number that fits in `u64`.
    fn into_bar(self) -> Option<OhlcvBar> {
        let price = |v: Option<f64>| v.filter(|p| p.is_finite());
        let adj_close = match self.adj_close {
            Some(v) if !v.is_finite() => return None,
            other => other,
        };

        Some(OhlcvBar {
            date: self.date,
            open: price(self.open)?,
            high: price(self.high)?,
            low: price(self.low)?,
            close: price(self.close)?,
            adj_close,
            volume: whole_volume(self.volume?)?,
        })
    }
}

fn whole_volume(v: f64) -> Option<u64> {
    // u64::MAX as f64 rounds up to 2^64, so the bound is exclusive
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v < u64::MAX as f64 {
        Some(v as u64)
    } else {
        None
    }
}

/// Reads `<dir>/<TICKER>.csv` exports from a local directory.
#[derive(Debug, Clone)]
pub struct CsvDataSource {
    dir: PathBuf,
}

impl CsvDataSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `ticker`.
    pub fn path_for(&self, ticker: &str) -> PathBuf {
        self.dir.join(format!("{ticker}.csv"))
    }
}

impl HistoricalDataSource for CsvDataSource {
    fn fetch(&self, request: &DataRequest) -> Result<Vec<OhlcvBar>> {
        let path = self.path_for(request.ticker());
        let mut reader = csv::Reader::from_path(&path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let mut bars = Vec::new();
        let mut skipped = 0usize;

        for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
            // +2: header line and 1-based numbering
            let row = result.with_context(|| {
                format!("Malformed row {} in {}", idx + 2, path.display())
            })?;

            if !request.contains(row.date) {
                continue;
            }

            let date = row.date;
            match row.into_bar() {
                Some(bar) => bars.push(bar),
                None => {
                    warn!(
                        ticker = request.ticker(),
                        %date,
                        "skipping row with missing or invalid values"
                    );
                    skipped += 1;
                }
            }
        }

        bars.sort_by_key(|bar| bar.date);

        debug!(
            ticker = request.ticker(),
            asset_class = %request.asset_class(),
            start = %request.start(),
            end = %request.end(),
            rows = bars.len(),
            skipped,
            "loaded historical bars"
        );

        Ok(bars)
    }
}
