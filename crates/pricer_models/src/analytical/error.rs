//! Error types for analytical pricing operations.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::{Date, PricingError};
use thiserror::Error;

use crate::instruments::{BarrierDirection, InstrumentError};

/// Analytical pricing errors.
///
/// Every variant carries the values that triggered it so the message is
/// self-contained.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
/// use pricer_models::instruments::BarrierDirection;
///
/// let err = AnalyticalError::InvalidBarrierPosition {
///     spot: 100.0,
///     barrier: 100.0,
///     direction: BarrierDirection::Down,
/// };
/// assert!(format!("{}", err).contains("spot 100"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Valuation date after expiry.
    #[error("Valuation date {valuation} is after expiry date {expiry}")]
    InvalidDateOrder {
        /// Valuation date
        valuation: Date,
        /// Contract expiry
        expiry: Date,
    },

    /// Spot already at or through the barrier.
    #[error("Invalid barrier position: spot {spot} is not strictly on the {direction} side of barrier {barrier}")]
    InvalidBarrierPosition {
        /// Spot price
        spot: f64,
        /// Barrier level
        barrier: f64,
        /// Required side of the barrier
        direction: BarrierDirection,
    },

    /// Invalid spot price (non-positive or non-finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid volatility (non-finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Formula produced a non-finite value.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },

    /// Vector valuation called with no spots.
    #[error("No spot prices supplied")]
    EmptySpots,

    /// Curve lookup failed.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Contract or payoff type invalid.
    #[error(transparent)]
    Instrument(#[from] InstrumentError),
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidDateOrder { .. }
            | AnalyticalError::InvalidBarrierPosition { .. }
            | AnalyticalError::InvalidSpot { .. }
            | AnalyticalError::InvalidVolatility { .. }
            | AnalyticalError::EmptySpots => PricingError::InvalidMarketData(err.to_string()),
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            AnalyticalError::MarketData(inner) => inner.into(),
            AnalyticalError::Instrument(inner) => inner.into(),
        }
    }
}
