//! Yield curve trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic yield curve trait for discount factor and rate calculations.
///
/// Valuers consume discount and dividend curves only through this trait:
/// `discount_factor(t)` is the discount factor provider and `zero_rate(t)`
/// the continuously compounded rate accessor, both queried at the year
/// fraction of the expiry date.
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
///
/// Monotonicity of D is not checked; implementations are trusted.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// let rate = curve.zero_rate(1.0).unwrap();
/// assert!((rate - 0.05).abs() < 1e-10);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the discount factor for maturity `t` (years, `t >= 0`).
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if `t < 0`.
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// r(t) = -ln(D(t)) / t
    /// ```
    ///
    /// # Errors
    ///
    /// - `MarketDataError::InvalidMaturity` if `t <= 0`
    /// - `MarketDataError::NonPositiveDiscountFactor` if `D(t) <= 0`
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        let df = self.discount_factor(t)?;
        if df <= T::zero() {
            return Err(MarketDataError::NonPositiveDiscountFactor {
                t: t.to_f64().unwrap_or(0.0),
                df: df.to_f64().unwrap_or(0.0),
            });
        }
        Ok(-df.ln() / t)
    }
}

impl<T: Float, C: YieldCurve<T> + ?Sized> YieldCurve<T> for &C {
    #[inline]
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        (**self).discount_factor(t)
    }

    #[inline]
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        (**self).zero_rate(t)
    }
}
