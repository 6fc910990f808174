// demos/pricing_demo.rs

//! Monte Carlo versus closed-form pricing of a European call
//!
//! This example shows how to:
//! 1. Configure a pricing run
//! 2. Estimate the option value at increasing path counts
//! 3. Compare each estimate with the Black-Scholes-Merton formula
//! 4. Express the Monte Carlo estimate as an implied volatility
//!
//! Usage:
//!     RUST_LOG=bsm_lib=debug cargo run --example pricing_demo

use anyhow::Result;
use bsm_lib::{
    default_configs, expected_terminal_price, implied_volatility, mean_terminal_price,
    MarketParameters, OptionParameters, PricingProcess,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("Black-Scholes-Merton Monte Carlo Demo");
    println!("=====================================");

    let market = MarketParameters::new(100.0, 0.03, 0.4, 0.25)?;
    let option = OptionParameters::call(105.0);
    println!(
        "S0={} r={} sigma={} T={} K={}",
        market.spot, market.rate, market.volatility, market.expiry, option.strike
    );

    let process = PricingProcess::new(market, option, default_configs::fast());

    println!("\nStep 1: Expected terminal price");
    let prices = process.simulate()?;
    println!(
        "  simulated mean = {:.4}, analytic S0*exp(rT) = {:.4}",
        mean_terminal_price(prices.as_slice())?,
        expected_terminal_price(&market)
    );
    if let Some((lo, hi)) = prices.range() {
        println!(
            "  {} paths between {:.2} and {:.2}",
            process.config().paths,
            lo,
            hi
        );
    }

    println!("\nStep 2: Convergence towards the closed form");
    println!(
        "{:>10} {:>12} {:>12} {:>10} {:>10} {:>8}",
        "paths", "estimate", "closed", "|error|", "std err", "ok"
    );
    println!("{}", "-".repeat(68));

    let results = process.run_convergence(&[1_000, 10_000, 100_000, 1_000_000])?;
    for r in &results {
        println!(
            "{:>10} {:>12.5} {:>12.5} {:>10.5} {:>10.5} {:>8}",
            r.estimate.paths,
            r.estimate.value,
            r.closed_form,
            r.abs_error,
            r.estimate.standard_error.unwrap_or(f64::NAN),
            r.within_tolerance
        );
    }

    if let Some(last) = results.last() {
        println!("\nStep 3: Implied volatility of the largest estimate");
        let iv = implied_volatility(last.estimate.value, &market, &option)?;
        println!("  implied sigma = {:.4} (true {:.4})", iv, market.volatility);
    }

    Ok(())
}
