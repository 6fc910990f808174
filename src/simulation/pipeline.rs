use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::models::bs::price_closed_form;
use crate::models::gbm::{sample_terminal_prices, standard_normal_draws};
use crate::models::monte_carlo::estimate_monte_carlo;
use crate::models::utils::histogram;
use crate::simulation::config::SimulationConfig;
use crate::simulation::types::{
    HistogramBin, MarketParameters, OptionParameters, PricingComparison, RandomDraws,
    SimulatedPrices,
};

/// End-to-end pricing run: draws, terminal prices, Monte Carlo estimate, and a
/// check against the closed form.
pub struct PricingProcess {
    market: MarketParameters,
    option: OptionParameters,
    config: SimulationConfig,
    draws: Option<RandomDraws>,
}

impl PricingProcess {
    pub fn new(
        market: MarketParameters,
        option: OptionParameters,
        config: SimulationConfig,
    ) -> Self {
        Self {
            market,
            option,
            config,
            draws: None,
        }
    }

    /// Use caller-supplied draws instead of generating `config.paths` of them.
    pub fn with_draws(mut self, draws: RandomDraws) -> Self {
        self.draws = Some(draws);
        self
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    fn draws(&self) -> Result<RandomDraws> {
        match &self.draws {
            Some(d) => Ok(d.clone()),
            None => {
                self.config.validate()?;
                Ok(standard_normal_draws(self.config.paths, self.config.seed)?)
            }
        }
    }

    /// Simulated terminal prices for this run's draws.
    pub fn simulate(&self) -> Result<SimulatedPrices> {
        let draws = self.draws()?;
        Ok(sample_terminal_prices(&self.market, draws.as_slice()))
    }

    /// Histogram of this run's terminal prices using `config.histogram_bins`.
    pub fn distribution(&self) -> Result<Vec<HistogramBin>> {
        let prices = self.simulate()?;
        Ok(histogram(prices.as_slice(), self.config.histogram_bins)?)
    }

    /// Price the option by Monte Carlo and compare with the closed form.
    pub fn run(&self) -> Result<PricingComparison> {
        self.config.validate()?;
        let draws = self.draws()?;
        compare(&self.market, &self.option, draws.as_slice(), &self.config)
    }

    /// Repeat [`run`](Self::run) for each path count, drawing fresh samples
    /// from the configured seed every time.
    pub fn run_convergence(&self, path_counts: &[usize]) -> Result<Vec<PricingComparison>> {
        path_counts
            .iter()
            .map(|&paths| {
                let config = self.config.clone().with_paths(paths);
                config.validate()?;
                let draws = standard_normal_draws(paths, config.seed)?;
                compare(&self.market, &self.option, draws.as_slice(), &config)
                    .with_context(|| format!("convergence step with {} paths", paths))
            })
            .collect()
    }
}

fn compare(
    market: &MarketParameters,
    option: &OptionParameters,
    draws: &[f64],
    config: &SimulationConfig,
) -> Result<PricingComparison> {
    let estimate = estimate_monte_carlo(market, option, draws, config.confidence_level)?;
    let closed_form =
        price_closed_form(market, option).context("closed-form reference price")?;
    let abs_error = (estimate.value - closed_form).abs();

    let within_tolerance = match estimate.standard_error {
        Some(se) => abs_error <= config.tolerance_std_errors * se,
        None => false,
    };

    if within_tolerance {
        debug!(
            paths = estimate.paths,
            estimate = estimate.value,
            closed_form,
            "monte carlo estimate agrees with closed form"
        );
    } else {
        warn!(
            paths = estimate.paths,
            estimate = estimate.value,
            closed_form,
            abs_error,
            "monte carlo estimate outside tolerance band"
        );
    }

    Ok(PricingComparison {
        estimate,
        closed_form,
        abs_error,
        within_tolerance,
    })
}
