pub mod bs;
pub mod gbm;
pub mod monte_carlo;

/// Common traits shared by the pricing models
pub mod traits {
    /// Per-path payoff of a European contract given the terminal asset price.
    ///
    /// Implementations must be pure: the Monte Carlo pricer maps this over
    /// every simulated price independently.
    pub trait Payoff {
        fn payoff(&self, terminal_price: f64) -> f64;
    }

    impl<F: Fn(f64) -> f64> Payoff for F {
        fn payoff(&self, terminal_price: f64) -> f64 {
            self(terminal_price)
        }
    }
}

/// Numeric helpers shared by the samplers and pricers
pub mod utils {
    use crate::error::{ensure_non_empty, PricingError, PricingResult};
    use crate::simulation::types::HistogramBin;
    use statrs::distribution::Normal;
    use statrs::statistics::Statistics;
    use tracing::trace;

    /// N(0, 1), the law of every random draw.
    pub(crate) fn standard_normal() -> PricingResult<Normal> {
        Ok(Normal::new(0.0, 1.0)?)
    }

    /// Standard normal cumulative distribution function Φ.
    ///
    /// Written in terms of `erfc` so the lower tail keeps full relative precision.
    pub fn norm_cdf(x: f64) -> f64 {
        0.5 * libm::erfc(-x / std::f64::consts::SQRT_2)
    }

    /// Monte Carlo estimate of E[S_T]: the arithmetic mean of simulated prices.
    pub fn mean_terminal_price(prices: &[f64]) -> PricingResult<f64> {
        ensure_non_empty("prices", prices)?;
        Ok(prices.mean())
    }

    /// Bucket prices into `bins` equal-width bins spanning [min, max].
    ///
    /// The last bin is closed on the right so the maximum is counted. When all
    /// prices coincide a single bin holding every price is returned.
    pub fn histogram(prices: &[f64], bins: usize) -> PricingResult<Vec<HistogramBin>> {
        ensure_non_empty("prices", prices)?;
        if bins == 0 {
            return Err(PricingError::InvalidSize {
                what: "bins",
                len: 0,
            });
        }

        if let Some(&bad) = prices.iter().find(|p| !p.is_finite()) {
            return Err(PricingError::NonFinite {
                what: "price",
                value: bad,
            });
        }
        let (lo, hi) = prices
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &p| {
                (lo.min(p), hi.max(p))
            });

        if hi == lo {
            return Ok(vec![HistogramBin {
                lower: lo,
                upper: hi,
                count: prices.len(),
            }]);
        }

        let width = (hi - lo) / bins as f64;
        let mut counts = vec![0usize; bins];
        for &p in prices {
            let idx = (((p - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        let out: Vec<HistogramBin> = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| HistogramBin {
                lower: lo + i as f64 * width,
                upper: if i + 1 == bins {
                    hi
                } else {
                    lo + (i + 1) as f64 * width
                },
                count,
            })
            .collect();
        trace!(bins, width, lo, hi, "built terminal price histogram");
        Ok(out)
    }

}
