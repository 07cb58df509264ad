//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Cross-layer umbrella for valuation failures
//! - `DateError`: Errors from date construction and parsing

use std::fmt;

/// Umbrella error for touch valuations.
///
/// Layer-specific errors (analytic, simulation) convert into this type so
/// callers that mix valuers can propagate a single error.
///
/// # Variants
/// - `InvalidInput`: Invalid contract terms or parameters
/// - `InvalidMarketData`: Market snapshot inconsistent with the contract
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative barrier".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative barrier");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid contract terms or parameters
    InvalidInput(String),

    /// Market data inconsistent with the contract (dates, spot, curves)
    InvalidMarketData(String),

    /// Closed form or simulation produced a non-finite value
    NumericalInstability(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::InvalidMarketData(msg) => write!(f, "Invalid market data: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Date-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

impl From<DateError> for PricingError {
    fn from(err: DateError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
