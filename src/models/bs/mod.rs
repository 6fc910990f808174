// Closed-form Black-Scholes-Merton prices for European options, used as the
// reference the Monte Carlo estimates are checked against. No dividend yield.

use roots::{find_root_brent, SimpleConvergency};
use tracing::debug;

use crate::error::{ensure_finite, PricingError, PricingResult};
use crate::models::utils::norm_cdf;
use crate::simulation::types::{MarketParameters, OptionKind, OptionParameters};

const IV_LOWER: f64 = 1e-6;
const IV_UPPER: f64 = 5.0;

#[allow(non_snake_case)]
fn d1_d2(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> (f64, f64) {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + 0.5 * sigma.powi(2)) * T) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

#[allow(non_snake_case)]
fn bs_call(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    norm_cdf(d1) * S - norm_cdf(d2) * K * (-r * T).exp()
}

#[allow(non_snake_case)]
fn bs_put(S: f64, K: f64, r: f64, T: f64, sigma: f64) -> f64 {
    let (d1, d2) = d1_d2(S, K, r, T, sigma);
    norm_cdf(-d2) * K * (-r * T).exp() - norm_cdf(-d1) * S
}

/// σ·√T is the denominator of d₁; both factors must be strictly positive.
fn check_domain(market: &MarketParameters) -> PricingResult<()> {
    if !(market.volatility > 0.0 && market.volatility.is_finite()) {
        return Err(PricingError::Domain {
            parameter: "volatility",
            value: market.volatility,
            reason: "closed form requires volatility > 0",
        });
    }
    if !(market.expiry > 0.0 && market.expiry.is_finite()) {
        return Err(PricingError::Domain {
            parameter: "expiry",
            value: market.expiry,
            reason: "closed form requires expiry > 0",
        });
    }
    Ok(())
}

/// Black-Scholes-Merton value of a European call:
/// `Φ(d₁)·S₀ − Φ(d₂)·K·e^{−rT}`.
///
/// # Errors
///
/// * [`PricingError::Domain`] if `volatility <= 0` or `expiry <= 0`
/// * [`PricingError::NonFinite`] if the inputs still lead to NaN (e.g. a negative strike)
pub fn price_call_closed_form(market: &MarketParameters, strike: f64) -> PricingResult<f64> {
    check_domain(market)?;
    ensure_finite(
        "call value",
        bs_call(
            market.spot,
            strike,
            market.rate,
            market.expiry,
            market.volatility,
        ),
    )
}

/// Black-Scholes-Merton value of a European put:
/// `Φ(−d₂)·K·e^{−rT} − Φ(−d₁)·S₀`.
pub fn price_put_closed_form(market: &MarketParameters, strike: f64) -> PricingResult<f64> {
    check_domain(market)?;
    ensure_finite(
        "put value",
        bs_put(
            market.spot,
            strike,
            market.rate,
            market.expiry,
            market.volatility,
        ),
    )
}

/// Closed-form value dispatched on the option kind.
pub fn price_closed_form(
    market: &MarketParameters,
    option: &OptionParameters,
) -> PricingResult<f64> {
    match option.kind {
        OptionKind::Call => price_call_closed_form(market, option.strike),
        OptionKind::Put => price_put_closed_form(market, option.strike),
    }
}

/// Volatility at which the closed form reproduces `price`.
///
/// `market.volatility` is ignored. The search runs Brent's method on
/// [1e-6, 5.0]; prices outside the no-arbitrage band are rejected up front.
pub fn implied_volatility(
    price: f64,
    market: &MarketParameters,
    option: &OptionParameters,
) -> PricingResult<f64> {
    if !(market.expiry > 0.0 && market.expiry.is_finite()) {
        return Err(PricingError::Domain {
            parameter: "expiry",
            value: market.expiry,
            reason: "implied volatility requires expiry > 0",
        });
    }

    let discounted_strike = option.strike * market.discount_factor();
    let (lower, upper) = match option.kind {
        OptionKind::Call => ((market.spot - discounted_strike).max(0.0), market.spot),
        OptionKind::Put => ((discounted_strike - market.spot).max(0.0), discounted_strike),
    };
    if !(price > lower && price < upper) {
        return Err(PricingError::Domain {
            parameter: "price",
            value: price,
            reason: "outside no-arbitrage bounds",
        });
    }

    let objective = |sigma: f64| {
        let value = match option.kind {
            OptionKind::Call => bs_call(
                market.spot,
                option.strike,
                market.rate,
                market.expiry,
                sigma,
            ),
            OptionKind::Put => bs_put(
                market.spot,
                option.strike,
                market.rate,
                market.expiry,
                sigma,
            ),
        };
        value - price
    };

    let mut convergency = SimpleConvergency {
        eps: 1e-12,
        max_iter: 200,
    };
    let sigma = find_root_brent(IV_LOWER, IV_UPPER, &objective, &mut convergency)?;
    debug!(price, sigma, "solved implied volatility");
    Ok(sigma)
}
