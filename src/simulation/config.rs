use crate::error::{PricingError, PricingResult};

/// Settings for a Monte Carlo pricing run.
///
/// Missing fields fall back to their defaults when deserialized, so a TOML
/// file only has to name what it overrides:
///
/// ```toml
/// paths = 250000
/// seed = 7
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SimulationConfig {
    /// Number of simulated paths (standard-normal draws)
    pub paths: usize,
    /// Seed for the draw generator; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Two-sided confidence level for the reported interval
    pub confidence_level: f64,
    /// Accept the closed form if it lies within this many standard errors
    pub tolerance_std_errors: f64,
    /// Bucket count for terminal price histograms
    pub histogram_bins: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            seed: default_seed(),
            confidence_level: default_confidence_level(),
            tolerance_std_errors: default_tolerance_std_errors(),
            histogram_bins: default_histogram_bins(),
        }
    }
}

impl SimulationConfig {
    /// One million paths; standard error around 0.01 for at-the-money equity options
    pub fn production() -> Self {
        Self {
            paths: 1_000_000,
            ..Self::default()
        }
    }

    /// Default path count, for development and interactive use
    pub fn fast() -> Self {
        Self::default()
    }

    /// Ten million paths for convergence studies
    pub fn research() -> Self {
        Self {
            paths: 10_000_000,
            histogram_bins: 200,
            ..Self::default()
        }
    }

    /// Quick smoke runs
    pub fn minimal() -> Self {
        Self {
            paths: 1_000,
            histogram_bins: 20,
            ..Self::default()
        }
    }

    pub fn with_paths(mut self, paths: usize) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> PricingResult<()> {
        if self.paths == 0 {
            return Err(PricingError::Config("paths must be at least 1".into()));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(PricingError::Config(format!(
                "confidence_level must lie in (0, 1), got {}",
                self.confidence_level
            )));
        }
        if !(self.tolerance_std_errors > 0.0 && self.tolerance_std_errors.is_finite()) {
            return Err(PricingError::Config(format!(
                "tolerance_std_errors must be positive, got {}",
                self.tolerance_std_errors
            )));
        }
        if self.histogram_bins == 0 {
            return Err(PricingError::Config(
                "histogram_bins must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_toml_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading simulation config {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("parsing simulation config {}", path.display()))
    }
}

fn default_paths() -> usize {
    100_000
}

fn default_seed() -> Option<u64> {
    Some(123456)
}

fn default_confidence_level() -> f64 {
    0.99
}

fn default_tolerance_std_errors() -> f64 {
    3.0
}

fn default_histogram_bins() -> usize {
    50
}
