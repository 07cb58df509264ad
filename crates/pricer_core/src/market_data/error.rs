//! Market data error types.

use crate::types::PricingError;
use thiserror::Error;

/// Market data operation errors.
///
/// Raised by curve lookups and curve construction. Each variant carries the
/// offending value so it can be surfaced to the caller unchanged.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid maturity (negative, or zero where a rate is requested).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Curve returned a discount factor that cannot be turned into a rate.
    #[error("Non-positive discount factor {df} at t = {t}")]
    NonPositiveDiscountFactor {
        /// Maturity queried
        t: f64,
        /// Discount factor returned
        df: f64,
    },

    /// Pillar not finite, or tenors not strictly increasing and non-negative.
    #[error("Invalid pillar tenor {tenor} at index {index}")]
    InvalidPillar {
        /// Index of the offending pillar
        index: usize,
        /// Tenor at that index
        tenor: f64,
    },

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidMarketData(err.to_string())
    }
}
