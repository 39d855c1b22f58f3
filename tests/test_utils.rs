#![allow(dead_code)] // Each test binary uses a different subset

use bs_pricer_lib::{AssetClass, DataRequest, OptionType, PricingRequest};
use chrono::NaiveDate;

/// Directory holding the CSV fixtures
pub const DATA_DIR: &str = "tests/data";

/// Absolute tolerance for put-call parity
pub const PARITY_TOL: f64 = 1e-8;

/// Build a request more concisely
pub fn request(s: f64, k: f64, t: f64, r: f64, sigma: f64, ty: OptionType) -> PricingRequest {
    PricingRequest::new(s, k, t, r, sigma, ty)
}

/// A spread of valid inputs covering ITM/ATM/OTM, short and long maturities,
/// zero and positive rates, low and high vols.
pub fn sample_grid() -> Vec<(f64, f64, f64, f64, f64)> {
    let mut grid = Vec::new();
    for &s in &[50.0, 100.0, 150.0] {
        for &k in &[80.0, 100.0, 120.0] {
            for &t in &[0.05, 0.5, 2.0] {
                for &r in &[0.0, 0.03, 0.1] {
                    for &sigma in &[0.05, 0.25, 0.8] {
                        grid.push((s, k, t, r, sigma));
                    }
                }
            }
        }
    }
    grid
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

/// Request against the fixture directory
pub fn data_request(ticker: &str, start: NaiveDate, end: NaiveDate) -> DataRequest {
    DataRequest::new(ticker, start, end, AssetClass::Stock).expect("valid fixture request")
}
