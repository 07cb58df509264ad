//! Pillar-based zero rate curve.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Zero rate curve defined on pillar tenors.
///
/// Zero rates are interpolated linearly between pillars and held flat
/// outside the pillar range; `D(t) = exp(-r(t) t)`.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, ZeroCurve};
///
/// let curve: ZeroCurve<f64> = ZeroCurve::new(&[0.5, 1.0, 2.0], &[0.02, 0.03, 0.04]).unwrap();
///
/// let r = curve.zero_rate(1.5).unwrap();
/// assert!((r - 0.035).abs() < 1e-12);
///
/// // Flat beyond the last pillar
/// assert!((curve.zero_rate(10.0).unwrap() - 0.04).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ZeroCurve<T: Float> {
    tenors: Vec<T>,
    rates: Vec<T>,
}

impl<T: Float> ZeroCurve<T> {
    /// Build a curve from matching tenor and zero rate slices.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` if the slices are empty or of different length
    /// - `InvalidPillar` if a tenor or rate is not finite, or tenors are
    ///   negative or not strictly increasing
    pub fn new(tenors: &[T], rates: &[T]) -> Result<Self, MarketDataError> {
        if tenors.is_empty() || tenors.len() != rates.len() {
            return Err(MarketDataError::InsufficientData {
                got: tenors.len().min(rates.len()),
                need: tenors.len().max(rates.len()).max(1),
            });
        }
        for (index, (&tenor, &rate)) in tenors.iter().zip(rates).enumerate() {
            if !tenor.is_finite() || !rate.is_finite() {
                return Err(MarketDataError::InvalidPillar {
                    index,
                    tenor: tenor.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        for (index, window) in tenors.windows(2).enumerate() {
            if window[1] <= window[0] {
                return Err(MarketDataError::InvalidPillar {
                    index: index + 1,
                    tenor: window[1].to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        if tenors[0] < T::zero() {
            return Err(MarketDataError::InvalidPillar {
                index: 0,
                tenor: tenors[0].to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            tenors: tenors.to_vec(),
            rates: rates.to_vec(),
        })
    }

    /// Pillar tenors in years.
    pub fn tenors(&self) -> &[T] {
        &self.tenors
    }

    fn rate_at(&self, t: T) -> T {
        let n = self.tenors.len();
        if t <= self.tenors[0] {
            return self.rates[0];
        }
        if t >= self.tenors[n - 1] {
            return self.rates[n - 1];
        }
        // First pillar strictly above t; t lies in (tenors[i-1], tenors[i]).
        let i = self.tenors.partition_point(|&x| x <= t);
        let (t0, t1) = (self.tenors[i - 1], self.tenors[i]);
        let (r0, r1) = (self.rates[i - 1], self.rates[i]);
        r0 + (r1 - r0) * (t - t0) / (t1 - t0)
    }
}

impl<T: Float> YieldCurve<T> for ZeroCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.rate_at(t) * t).exp())
    }

    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok(self.rate_at(t))
    }
}
