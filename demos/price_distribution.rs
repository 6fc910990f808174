// Example: price_distribution.rs
// Simulates terminal stock prices and writes their histogram as CSV to stdout,
// ready for any external plotting tool.
//
// Usage:
//     cargo run --example price_distribution -- [sigma] [T] [r] > hist.csv
//
// Defaults are sigma=0.4, T=0.25, r=0.03 with S0=100.

use std::env;
use std::error::Error;
use std::io;

use bsm_lib::{MarketParameters, OptionParameters, PricingProcess, SimulationConfig};

fn arg_or(args: &[String], idx: usize, default: f64) -> Result<f64, Box<dyn Error>> {
    match args.get(idx) {
        Some(raw) => Ok(raw.parse()?),
        None => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let sigma = arg_or(&args, 1, 0.4)?;
    let expiry = arg_or(&args, 2, 0.25)?;
    let rate = arg_or(&args, 3, 0.03)?;

    let market = MarketParameters::new(100.0, rate, sigma, expiry)?;
    // Strike is irrelevant for the distribution itself
    let process = PricingProcess::new(
        market,
        OptionParameters::call(100.0),
        SimulationConfig::fast(),
    );
    let config = process.config();
    eprintln!(
        "Simulating {} paths (sigma={}, T={}, r={}) into {} bins",
        config.paths, sigma, expiry, rate, config.histogram_bins
    );

    let bins = process.distribution()?;

    let mut writer = csv::Writer::from_writer(io::stdout());
    for bin in &bins {
        writer.serialize(bin)?;
    }
    writer.flush()?;
    Ok(())
}
