//! Instrument error types.
//!
//! Raised while building a touch contract or decoding a payoff type from
//! an external representation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidBarrier`: Barrier level non-positive or non-finite
/// - `InvalidPaymentSize`: Payment size non-finite
/// - `UnknownPayoffType`: Name or code that maps to no touch payoff
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidBarrier { barrier: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Barrier level is non-positive or non-finite.
    #[error("Invalid barrier: H = {barrier}")]
    InvalidBarrier {
        /// The invalid barrier level
        barrier: f64,
    },

    /// Payment size is non-finite.
    #[error("Invalid payment size: K = {payment}")]
    InvalidPaymentSize {
        /// The invalid payment size
        payment: f64,
    },

    /// Payoff type name or code not recognised.
    #[error("Unknown touch payoff type: {value}")]
    UnknownPayoffType {
        /// The unrecognised input
        value: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_barrier_display() {
        let err = InstrumentError::InvalidBarrier { barrier: 0.0 };
        assert_eq!(format!("{}", err), "Invalid barrier: H = 0");
    }

    #[test]
    fn test_invalid_payment_display() {
        let err = InstrumentError::InvalidPaymentSize { payment: f64::NAN };
        assert_eq!(format!("{}", err), "Invalid payment size: K = NaN");
    }

    #[test]
    fn test_unknown_payoff_display() {
        let err = InstrumentError::UnknownPayoffType {
            value: "SIDEWAYS_AND_IN".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Unknown touch payoff type: SIDEWAYS_AND_IN"
        );
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = InstrumentError::InvalidBarrier { barrier: -1.0 }.into();
        assert_eq!(
            err,
            PricingError::InvalidInput("Invalid barrier: H = -1".to_string())
        );
    }
}
