//! # BSM-Lib: Monte Carlo and Closed-Form Option Pricing
//!
//! `bsm-lib` prices European options under the Black-Scholes-Merton market
//! model. Terminal stock prices are simulated from the exact solution of
//! geometric Brownian motion, a Monte Carlo estimator averages and discounts
//! the payoffs, and the analytic BSM formula serves as the reference the
//! estimate is validated against.
//!
//! ## Core Features
//!
//! - **Terminal Price Sampler**: `S_T = S_0 * exp((r - σ²/2)T + σ√T * Z)` mapped over a vector of draws
//! - **Monte Carlo Pricer**: discounted mean payoff, with standard error and confidence interval
//! - **Closed-Form Pricer**: analytic call and put values plus implied volatility
//! - **Explicit randomness**: every pricing call takes its draws as an argument, so
//!   runs are reproducible from a seed and there is no hidden global RNG
//!
//! ## Quick Start
//!
//! ```rust
//! use bsm_lib::{price_call_closed_form, price_call_monte_carlo, standard_normal_draws};
//!
//! let draws = standard_normal_draws(100_000, Some(42))?;
//! let mc = price_call_monte_carlo(100.0, 0.03, 0.4, 0.25, 105.0, draws.as_slice())?;
//! let exact = price_call_closed_form(100.0, 0.03, 0.4, 0.25, 105.0)?;
//!
//! assert!((mc - exact).abs() < 0.5);
//! # Ok::<(), bsm_lib::PricingError>(())
//! ```
//!
//! ## Configuration Presets
//!
//! [`SimulationConfig`] drives [`PricingProcess`] runs:
//! - `production()`: one million paths
//! - `fast()`: 100,000 paths for development
//! - `research()`: ten million paths for convergence studies
//! - `minimal()`: 1,000 paths for smoke checks

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod simulation;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{PricingError, PricingResult};

// Value types and configuration
pub use simulation::{
    config::SimulationConfig,
    pipeline::PricingProcess,
    types::{
        HistogramBin, MarketParameters, McEstimate, OptionKind, OptionParameters,
        PricingComparison, RandomDraws, SimulatedPrices,
    },
};

// Model-level operations on typed parameters
pub use models::{
    bs::{implied_volatility, price_closed_form, price_put_closed_form},
    gbm::{expected_terminal_price, standard_normal_draws, terminal_price},
    monte_carlo::{estimate_monte_carlo, price_monte_carlo},
    traits::Payoff,
    utils::{histogram, mean_terminal_price, norm_cdf},
};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured simulation settings for common use cases.
///
/// # Available Configurations
///
/// - [`production()`]: 1,000,000 paths
/// - [`fast()`]: 100,000 paths
/// - [`research()`]: 10,000,000 paths
/// - [`minimal()`]: 1,000 paths
pub mod default_configs {
    use crate::simulation::config::SimulationConfig;

    /// Configuration for pricing that needs a standard error around one cent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bsm_lib::default_configs;
    ///
    /// let config = default_configs::production();
    /// assert_eq!(config.paths, 1_000_000);
    /// ```
    pub fn production() -> SimulationConfig {
        SimulationConfig::production()
    }

    /// Balanced configuration for development and interactive exploration.
    pub fn fast() -> SimulationConfig {
        SimulationConfig::fast()
    }

    /// High path count for convergence studies.
    pub fn research() -> SimulationConfig {
        SimulationConfig::research()
    }

    /// Smallest sensible run, for tests and quick validation.
    pub fn minimal() -> SimulationConfig {
        SimulationConfig::minimal()
    }
}

// ================================================================================================
// SCALAR-ARGUMENT API
// ================================================================================================

fn market(spot: f64, rate: f64, sigma: f64, expiry: f64) -> MarketParameters {
    MarketParameters {
        spot,
        rate,
        volatility: sigma,
        expiry,
    }
}

/// Simulate terminal stock prices, one per standard-normal draw.
///
/// Applies `S_0 * exp((r - σ²/2)T + σ√T * z)` to each draw independently. The
/// output has the same length and order as `draws`.
///
/// # Arguments
///
/// * `s0` - Spot price
/// * `r` - Risk-free rate (continuously compounded)
/// * `sigma` - Volatility
/// * `t` - Time to expiry in years
/// * `draws` - Standard-normal variates
///
/// Degenerate inputs are not rejected: `sigma = 0` simply returns the
/// deterministic forward price for every draw.
///
/// # Example
///
/// ```rust
/// use bsm_lib::sample_terminal_prices;
///
/// let prices = sample_terminal_prices(100.0, 0.03, 0.4, 0.25, &[-1.0, 0.0, 1.0]);
/// assert_eq!(prices.len(), 3);
/// assert!(prices.as_slice().windows(2).all(|w| w[0] < w[1]));
/// ```
pub fn sample_terminal_prices(
    s0: f64,
    r: f64,
    sigma: f64,
    t: f64,
    draws: &[f64],
) -> SimulatedPrices {
    models::gbm::sample_terminal_prices(&market(s0, r, sigma, t), draws)
}

/// Monte Carlo present value of a European call.
///
/// Computes `mean(max(S_T - K, 0)) * exp(-rT)` over the terminal prices
/// produced from `draws`. Reproducibility is up to the caller: the same
/// draws always give the same value.
///
/// # Errors
///
/// * [`PricingError::InvalidSize`] if `draws` is empty
///
/// # Example
///
/// ```rust
/// use bsm_lib::{price_call_monte_carlo, standard_normal_draws};
///
/// let draws = standard_normal_draws(10_000, Some(1))?;
/// let value = price_call_monte_carlo(100.0, 0.03, 0.4, 0.25, 105.0, draws.as_slice())?;
/// assert!(value >= 0.0);
/// # Ok::<(), bsm_lib::PricingError>(())
/// ```
pub fn price_call_monte_carlo(
    s0: f64,
    r: f64,
    sigma: f64,
    t: f64,
    k: f64,
    draws: &[f64],
) -> PricingResult<f64> {
    models::monte_carlo::price_call_monte_carlo(&market(s0, r, sigma, t), k, draws)
}

/// Closed-form Black-Scholes-Merton value of a European call.
///
/// ```text
/// d1 = [ln(S0/K) + (r + σ²/2)T] / (σ√T)
/// d2 = d1 - σ√T
/// C  = Φ(d1)·S0 - Φ(d2)·K·exp(-rT)
/// ```
///
/// # Errors
///
/// * [`PricingError::Domain`] if `sigma <= 0` or `t <= 0`
/// * [`PricingError::NonFinite`] if the formula still evaluates to NaN or ±∞
///
/// # Example
///
/// ```rust
/// use bsm_lib::price_call_closed_form;
///
/// let value = price_call_closed_form(100.0, 0.03, 0.4, 0.25, 105.0)?;
/// assert!((value - 6.1979).abs() < 1e-3);
/// assert!(price_call_closed_form(100.0, 0.03, 0.0, 0.25, 105.0).is_err());
/// # Ok::<(), bsm_lib::PricingError>(())
/// ```
pub fn price_call_closed_form(s0: f64, r: f64, sigma: f64, t: f64, k: f64) -> PricingResult<f64> {
    models::bs::price_call_closed_form(&market(s0, r, sigma, t), k)
}
