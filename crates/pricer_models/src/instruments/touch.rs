//! Touch option contract.

use std::fmt;

use pricer_core::types::Date;

use super::error::InstrumentError;
use super::payoff::TouchPayoffType;

/// Single-barrier touch option.
///
/// Immutable once built. The payment size is ignored by asset-or-nothing
/// payoffs: the asset delivered at a hit is worth the barrier level, and
/// the asset delivered at expiry is worth `S(T)`.
///
/// # Examples
/// ```
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{TouchOption, TouchPayoffType};
///
/// let expiry = Date::from_ymd(2025, 6, 30).unwrap();
/// let option = TouchOption::new(expiry, TouchPayoffType::UpAndInCashAtHit, 110.0, 1.0).unwrap();
/// assert_eq!(option.barrier(), 110.0);
///
/// let asset = TouchOption::new(expiry, TouchPayoffType::UpAndInAssetAtHit, 110.0, 1.0).unwrap();
/// assert_eq!(asset.effective_payment(), 110.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TouchOption {
    expiry: Date,
    payoff_type: TouchPayoffType,
    barrier: f64,
    payment_size: f64,
}

impl TouchOption {
    /// Creates a touch option.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidBarrier` if `barrier` is not finite and positive
    /// - `InstrumentError::InvalidPaymentSize` if `payment_size` is not finite
    pub fn new(
        expiry: Date,
        payoff_type: TouchPayoffType,
        barrier: f64,
        payment_size: f64,
    ) -> Result<Self, InstrumentError> {
        if !barrier.is_finite() || barrier <= 0.0 {
            return Err(InstrumentError::InvalidBarrier { barrier });
        }
        if !payment_size.is_finite() {
            return Err(InstrumentError::InvalidPaymentSize {
                payment: payment_size,
            });
        }
        Ok(Self {
            expiry,
            payoff_type,
            barrier,
            payment_size,
        })
    }

    /// Expiry date.
    #[inline]
    pub fn expiry(&self) -> Date {
        self.expiry
    }

    /// Payoff type.
    #[inline]
    pub fn payoff_type(&self) -> TouchPayoffType {
        self.payoff_type
    }

    /// Barrier level.
    #[inline]
    pub fn barrier(&self) -> f64 {
        self.barrier
    }

    /// Contractual payment size.
    #[inline]
    pub fn payment_size(&self) -> f64 {
        self.payment_size
    }

    /// Amount paid per unit of touch probability: the barrier level for
    /// asset payoffs, the payment size for cash payoffs.
    #[inline]
    pub fn effective_payment(&self) -> f64 {
        if self.payoff_type.is_asset() {
            self.barrier
        } else {
            self.payment_size
        }
    }
}

impl fmt::Display for TouchOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OBJECT TYPE: TouchOption")?;
        writeln!(f, "EXPIRY DATE: {}", self.expiry)?;
        writeln!(f, "OPTION TYPE: {}", self.payoff_type)?;
        writeln!(f, "BARRIER LEVEL: {}", self.barrier)?;
        write!(f, "PAYMENT SIZE: {}", self.payment_size)
    }
}
