use crate::error::{ensure_non_empty, PricingError, PricingResult};
use crate::models::traits::Payoff;

/// Market state under the Black-Scholes-Merton model.
///
/// Fields are public so degenerate inputs (e.g. `volatility = 0.0`) can be
/// built directly; [`MarketParameters::new`] enforces the model invariants.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketParameters {
    /// Spot price S₀
    pub spot: f64,
    /// Continuously compounded risk-free rate r
    pub rate: f64,
    /// Annualized volatility σ
    pub volatility: f64,
    /// Time to expiry T in years
    pub expiry: f64,
}

impl MarketParameters {
    /// Build market parameters, requiring `spot > 0`, `volatility >= 0`,
    /// `expiry > 0` and a finite rate.
    pub fn new(spot: f64, rate: f64, volatility: f64, expiry: f64) -> PricingResult<Self> {
        if !(spot.is_finite() && spot > 0.0) {
            return Err(PricingError::Domain {
                parameter: "spot",
                value: spot,
                reason: "must be finite and > 0",
            });
        }
        if !rate.is_finite() {
            return Err(PricingError::Domain {
                parameter: "rate",
                value: rate,
                reason: "must be finite",
            });
        }
        if !(volatility.is_finite() && volatility >= 0.0) {
            return Err(PricingError::Domain {
                parameter: "volatility",
                value: volatility,
                reason: "must be finite and >= 0",
            });
        }
        if !(expiry.is_finite() && expiry > 0.0) {
            return Err(PricingError::Domain {
                parameter: "expiry",
                value: expiry,
                reason: "must be finite and > 0",
            });
        }
        Ok(Self {
            spot,
            rate,
            volatility,
            expiry,
        })
    }

    /// Risk-neutral log drift over the horizon: (r − σ²/2)·T
    pub fn log_drift(&self) -> f64 {
        (self.rate - 0.5 * self.volatility * self.volatility) * self.expiry
    }

    /// Standard deviation of the terminal log price: σ·√T
    pub fn diffusion_scale(&self) -> f64 {
        self.volatility * self.expiry.sqrt()
    }

    /// exp(−r·T)
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Same market with spot multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            spot: self.spot * factor,
            ..*self
        }
    }
}

/// Exercise direction of a European option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    #[default]
    Call,
    Put,
}

/// Contract terms of a European option.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Strike price K
    pub strike: f64,
    pub kind: OptionKind,
}

impl OptionParameters {
    /// Build option terms, requiring a finite `strike > 0`.
    pub fn new(strike: f64, kind: OptionKind) -> PricingResult<Self> {
        if !(strike.is_finite() && strike > 0.0) {
            return Err(PricingError::Domain {
                parameter: "strike",
                value: strike,
                reason: "must be finite and > 0",
            });
        }
        Ok(Self { strike, kind })
    }

    /// Unchecked European call with the given strike.
    pub fn call(strike: f64) -> Self {
        Self {
            strike,
            kind: OptionKind::Call,
        }
    }

    /// Unchecked European put with the given strike.
    pub fn put(strike: f64) -> Self {
        Self {
            strike,
            kind: OptionKind::Put,
        }
    }

    /// Same contract with strike multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            strike: self.strike * factor,
            ..*self
        }
    }
}

impl Payoff for OptionParameters {
    fn payoff(&self, terminal_price: f64) -> f64 {
        match self.kind {
            OptionKind::Call => (terminal_price - self.strike).max(0.0),
            OptionKind::Put => (self.strike - terminal_price).max(0.0),
        }
    }
}

/// Independent standard-normal draws, one per simulated path. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct RandomDraws(Vec<f64>);

impl RandomDraws {
    pub fn new(draws: Vec<f64>) -> PricingResult<Self> {
        ensure_non_empty("draws", &draws)?;
        Ok(Self(draws))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed value.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[f64]> for RandomDraws {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for RandomDraws {
    type Error = PricingError;

    fn try_from(draws: Vec<f64>) -> PricingResult<Self> {
        Self::new(draws)
    }
}

/// Simulated terminal stock prices, index-aligned with the draws that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPrices(Vec<f64>);

impl SimulatedPrices {
    pub(crate) fn from_vec(prices: Vec<f64>) -> Self {
        Self(prices)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Smallest and largest simulated price, or `None` when empty.
    pub fn range(&self) -> Option<(f64, f64)> {
        let first = *self.0.first()?;
        Some(
            self.0
                .iter()
                .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
        )
    }
}

impl AsRef<[f64]> for SimulatedPrices {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Monte Carlo estimate of an option's present value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McEstimate {
    /// Discounted mean payoff; never negative for option payoffs
    pub value: f64,
    /// Standard error of `value`; `None` for a single path
    pub standard_error: Option<f64>,
    /// Two-sided normal confidence interval around `value`
    pub confidence_interval: Option<(f64, f64)>,
    /// Number of simulated paths
    pub paths: usize,
}

/// One equal-width bucket of a terminal price histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Monte Carlo estimate next to its closed-form reference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingComparison {
    pub estimate: McEstimate,
    pub closed_form: f64,
    /// |estimate − closed form|
    pub abs_error: f64,
    /// Whether the closed form lies within the configured number of standard errors
    pub within_tolerance: bool,
}
