// demos/pricing_demo.rs

//! Demonstration of Black-Scholes pricing
//!
//! This example shows how to:
//! 1. Describe a pricing request (built in, or from a TOML file given as the first argument)
//! 2. Price the call and the put
//! 3. Check put-call parity on the result
//! 4. Optionally load the historical bars named in the config's `[data]` section
//!
//! Run with `RUST_LOG=debug` to see the library's tracing output.

use anyhow::Result;
use bs_pricer_lib::{
    CsvDataSource, HistoricalDataSource, OptionType, PricerConfig, PricingRequest,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => PricerConfig::load(path)?,
        None => PricerConfig::default(),
    };

    println!("Black-Scholes Pricing Demo");
    println!("==========================");

    let request = config.request;
    print_inputs(&request);

    let call = request.with_option_type(OptionType::Call).price()?;
    let put = request.with_option_type(OptionType::Put).price()?;

    println!("\nCall Price: {:.4}", call);
    println!("Put Price:  {:.4}", put);

    let forward_gap = request.underlying_price
        - request.strike_price * (-request.risk_free_rate * request.years_to_exp).exp();
    println!(
        "\nPut-call parity: C - P = {:.6}, S - K·e^(-rT) = {:.6}",
        call - put,
        forward_gap
    );

    if let Some(data) = &config.data {
        let source = CsvDataSource::new(&data.data_dir);
        let bars = source.fetch(&data.request()?)?;

        println!(
            "\nLoaded {} {} bars for {} from {}",
            bars.len(),
            data.asset_class,
            data.ticker,
            source.dir().display()
        );
        if let Some(last) = bars.last() {
            println!("  Last close ({}): {:.2}", last.date, last.close);
        }
    }

    Ok(())
}

fn print_inputs(request: &PricingRequest) {
    println!("  Underlying price (S): {:.2}", request.underlying_price);
    println!("  Strike price (K):     {:.2}", request.strike_price);
    println!("  Maturity (T, years):  {:.4}", request.years_to_exp);
    println!("  Risk-free rate (r):   {:.2}%", request.risk_free_rate * 100.0);
    println!("  Volatility (sigma):   {:.2}%", request.volatility * 100.0);
}
