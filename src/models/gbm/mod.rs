// Terminal prices under risk-neutral geometric Brownian motion, using the exact
// solution S_T = S_0 * exp((r - σ²/2)T + σ√T * Z) rather than time stepping.

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::models::utils::standard_normal;
use crate::simulation::types::{MarketParameters, RandomDraws, SimulatedPrices};

/// Terminal price for a single standard-normal draw `z`.
pub fn terminal_price(market: &MarketParameters, z: f64) -> f64 {
    market.spot * (market.log_drift() + market.diffusion_scale() * z).exp()
}

/// Map every draw to its terminal price.
///
/// Each element goes through [`terminal_price`] independently, so the output is
/// index-aligned with `draws` and a one-element slice matches the scalar call.
/// Degenerate markets are not rejected: `volatility = 0` yields the same
/// deterministic forward price on every path.
pub fn sample_terminal_prices(market: &MarketParameters, draws: &[f64]) -> SimulatedPrices {
    let prices = draws.iter().map(|&z| terminal_price(market, z)).collect();
    SimulatedPrices::from_vec(prices)
}

/// Analytic risk-neutral expectation E[S_T] = S_0 * exp(rT).
pub fn expected_terminal_price(market: &MarketParameters) -> f64 {
    market.spot * (market.rate * market.expiry).exp()
}

/// Draw `n` independent N(0, 1) variates.
///
/// With `Some(seed)` the sequence is reproducible; with `None` the generator is
/// seeded from OS entropy.
pub fn standard_normal_draws(n: usize, seed: Option<u64>) -> PricingResult<RandomDraws> {
    if n == 0 {
        return Err(PricingError::InvalidSize {
            what: "draws",
            len: 0,
        });
    }
    let normal = standard_normal()?;
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let draws: Vec<f64> = normal.sample_iter(&mut rng).take(n).collect();
    debug!(n, ?seed, "generated standard normal draws");
    RandomDraws::new(draws)
}
