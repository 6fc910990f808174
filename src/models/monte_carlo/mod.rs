//! Plain Monte Carlo valuation of European payoffs.
//!
//! Each draw is turned into a terminal price, every price into a payoff, and the
//! payoff mean is discounted at the risk-free rate. No variance reduction is
//! applied, so the standard error shrinks as O(1/√n).

use statrs::distribution::ContinuousCDF;
use statrs::statistics::Statistics;
use tracing::debug;

use crate::error::{ensure_finite, ensure_non_empty, PricingError, PricingResult};
use crate::models::gbm::sample_terminal_prices;
use crate::models::traits::Payoff;
use crate::models::utils::standard_normal;
use crate::simulation::types::{MarketParameters, McEstimate, OptionParameters};

/// Draws must be present and finite; a NaN draw would otherwise floor to a zero payoff.
fn check_draws(draws: &[f64]) -> PricingResult<()> {
    ensure_non_empty("draws", draws)?;
    match draws.iter().find(|z| !z.is_finite()) {
        Some(&z) => Err(PricingError::NonFinite {
            what: "draw",
            value: z,
        }),
        None => Ok(()),
    }
}

/// Discounted per-path payoffs, one per draw.
fn discounted_payoffs<P: Payoff + ?Sized>(
    market: &MarketParameters,
    payoff: &P,
    draws: &[f64],
) -> PricingResult<Vec<f64>> {
    check_draws(draws)?;
    let discount = market.discount_factor();
    Ok(sample_terminal_prices(market, draws)
        .as_slice()
        .iter()
        .map(|&s| payoff.payoff(s) * discount)
        .collect())
}

/// Present value of `payoff` estimated from `draws`.
///
/// # Errors
///
/// * [`PricingError::InvalidSize`] when `draws` is empty
/// * [`PricingError::NonFinite`] when a draw is not finite, or when terminal
///   prices overflow so the discounted mean is no longer a finite number
pub fn price_monte_carlo<P: Payoff + ?Sized>(
    market: &MarketParameters,
    payoff: &P,
    draws: &[f64],
) -> PricingResult<f64> {
    check_draws(draws)?;
    let prices = sample_terminal_prices(market, draws);
    let forward = prices.as_slice().iter().map(|&s| payoff.payoff(s)).mean();
    ensure_finite("monte carlo value", forward * market.discount_factor())
}

/// Present value of a European call struck at `strike`.
///
/// The result is never negative: payoffs are floored at zero before averaging.
pub fn price_call_monte_carlo(
    market: &MarketParameters,
    strike: f64,
    draws: &[f64],
) -> PricingResult<f64> {
    price_monte_carlo(market, &OptionParameters::call(strike), draws)
}

/// Monte Carlo value together with its sampling error.
///
/// `confidence_level` sets the two-sided normal interval, e.g. 0.99. The
/// standard error uses the sample standard deviation (n − 1 denominator), so
/// a single path reports neither a standard error nor an interval.
pub fn estimate_monte_carlo<P: Payoff + ?Sized>(
    market: &MarketParameters,
    payoff: &P,
    draws: &[f64],
    confidence_level: f64,
) -> PricingResult<McEstimate> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        return Err(PricingError::Domain {
            parameter: "confidence_level",
            value: confidence_level,
            reason: "must lie in (0, 1)",
        });
    }

    let values = discounted_payoffs(market, payoff, draws)?;
    let paths = values.len();
    let value = ensure_finite("monte carlo value", values.iter().mean())?;

    let (standard_error, confidence_interval) = if paths > 1 {
        let se = ensure_finite(
            "standard error",
            values.iter().std_dev() / (paths as f64).sqrt(),
        )?;
        let z = standard_normal()?.inverse_cdf(0.5 + 0.5 * confidence_level);
        (Some(se), Some((value - z * se, value + z * se)))
    } else {
        (None, None)
    };

    debug!(
        paths,
        value,
        standard_error = standard_error.unwrap_or(f64::NAN),
        "monte carlo estimate"
    );

    Ok(McEstimate {
        value,
        standard_error,
        confidence_interval,
        paths,
    })
}
