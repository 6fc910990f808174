/// Error taxonomy for the pricing library.
///
/// Every pricing call is atomic: it either returns a fully-formed result or
/// one of these variants. No variant carries partial output.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    /// Input violates a mathematical precondition of the formula being evaluated.
    #[error("domain error: {parameter}={value} ({reason})")]
    Domain {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A sequence argument has a length the operation cannot work with.
    #[error("invalid size: {what} has length {len}")]
    InvalidSize { what: &'static str, len: usize },

    /// The computation produced NaN or an infinity from accepted inputs.
    #[error("non-finite result: {what}={value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("root finding did not converge: {0}")]
    NoConvergence(String),

    #[error("config error: {0}")]
    Config(String),

    /// A probability distribution could not be constructed.
    #[error("distribution error: {0}")]
    Distribution(String),
}

impl From<statrs::StatsError> for PricingError {
    fn from(e: statrs::StatsError) -> Self {
        PricingError::Distribution(e.to_string())
    }
}

impl From<roots::SearchError> for PricingError {
    fn from(e: roots::SearchError) -> Self {
        PricingError::NoConvergence(format!("{:?}", e))
    }
}

pub type PricingResult<T> = std::result::Result<T, PricingError>;

/// Reject zero-length inputs.
pub(crate) fn ensure_non_empty<T>(what: &'static str, values: &[T]) -> PricingResult<()> {
    if values.is_empty() {
        return Err(PricingError::InvalidSize { what, len: 0 });
    }
    Ok(())
}

/// Pass `value` through if finite, otherwise report it as `what`.
pub(crate) fn ensure_finite(what: &'static str, value: f64) -> PricingResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NonFinite { what, value })
    }
}
