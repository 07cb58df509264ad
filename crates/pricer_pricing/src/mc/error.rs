//! Error types for the Monte Carlo touch engine.
//!
//! [`ConfigError`] covers invalid simulation settings and is raised at
//! construction; [`SimulationError`] covers everything a single valuation
//! can reject.

use std::fmt;

use pricer_core::market_data::MarketDataError;
use pricer_core::types::{Date, PricingError};
use pricer_models::instruments::BarrierDirection;
use thiserror::Error;

use super::config::{MAX_CELLS, MAX_PATHS, MAX_STEPS};
use super::paths::GbmParams;

/// Configuration error for the Monte Carlo pricer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, 10_000_000].
    InvalidPathCount(usize),
    /// Derived step count outside valid range [1, 100_000].
    InvalidStepCount(usize),
    /// Invalid parameter value with name and description.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
    /// Base paths × steps above [`MAX_CELLS`].
    GridTooLarge {
        /// Base paths.
        n_paths: usize,
        /// Derived steps.
        n_steps: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathCount(count) => {
                write!(
                    f,
                    "Invalid path count {}: must be in range [1, {}]",
                    count, MAX_PATHS
                )
            }
            Self::InvalidStepCount(count) => {
                write!(
                    f,
                    "Invalid step count {}: must be in range [1, {}]",
                    count, MAX_STEPS
                )
            }
            Self::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter '{}': {}", name, value)
            }
            Self::GridTooLarge { n_paths, n_steps } => {
                write!(
                    f,
                    "Simulation grid {} paths x {} steps exceeds {} cells",
                    n_paths, n_steps, MAX_CELLS
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Monte Carlo touch valuation errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Spot already at or through the barrier; nothing to simulate.
    #[error("Barrier already crossed: spot {spot} is not strictly on the {direction} side of barrier {barrier}")]
    BarrierAlreadyCrossed {
        /// Spot price
        spot: f64,
        /// Barrier level
        barrier: f64,
        /// Barrier direction of the payoff
        direction: BarrierDirection,
    },

    /// Valuation date after expiry.
    #[error("Valuation date {valuation} is after expiry date {expiry}")]
    InvalidDateOrder {
        /// Valuation date
        valuation: Date,
        /// Contract expiry
        expiry: Date,
    },

    /// Volatility is NaN or infinite.
    #[error("Invalid volatility: {volatility}")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Spot, drift, volatility or maturity unusable for GBM simulation.
    #[error("Invalid path parameters: {params:?}")]
    InvalidPathParameters {
        /// The rejected parameters
        params: GbmParams,
    },

    /// Simulation settings rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Curve lookup failed.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        match err {
            SimulationError::BarrierAlreadyCrossed { .. }
            | SimulationError::InvalidDateOrder { .. }
            | SimulationError::InvalidVolatility { .. }
            | SimulationError::InvalidPathParameters { .. } => {
                PricingError::InvalidMarketData(err.to_string())
            }
            SimulationError::Config(_) => PricingError::InvalidInput(err.to_string()),
            SimulationError::MarketData(inner) => inner.into(),
        }
    }
}
