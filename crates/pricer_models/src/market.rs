//! Per-valuation market snapshot.

use pricer_core::market_data::curves::YieldCurve;
use pricer_core::types::{year_fraction, Date};

/// Smallest time to expiry used by the valuers, in years.
pub const MATURITY_FLOOR: f64 = 1e-6;

/// Smallest volatility used by the valuers.
pub const VOLATILITY_FLOOR: f64 = 1e-6;

/// Market inputs for one touch option valuation.
///
/// Assembled by the caller per call and borrowed by the valuers; the
/// curves are queried at the year fraction of the contract's expiry.
///
/// # Examples
/// ```
/// use pricer_core::market_data::curves::FlatCurve;
/// use pricer_core::types::Date;
/// use pricer_models::market::TouchMarket;
///
/// let discount = FlatCurve::new(0.05);
/// let dividend = FlatCurve::new(0.02);
/// let valuation = Date::from_ymd(2024, 1, 1).unwrap();
///
/// let market = TouchMarket::new(valuation, 100.0, &discount, &dividend, 0.2);
/// let expiry = Date::from_ymd(2025, 1, 1).unwrap();
/// assert!((market.time_to_expiry(expiry).unwrap() - 366.0 / 365.0).abs() < 1e-12);
/// assert!(market.time_to_expiry(Date::from_ymd(2023, 1, 1).unwrap()).is_none());
/// ```
#[derive(Debug)]
pub struct TouchMarket<'a, D, Q> {
    /// Valuation date
    pub valuation_date: Date,
    /// Spot price of the underlying
    pub spot: f64,
    /// Discount curve (risk-free rate `r`)
    pub discount_curve: &'a D,
    /// Dividend curve (continuous yield `q`)
    pub dividend_curve: &'a Q,
    /// Black-Scholes volatility
    pub volatility: f64,
}

// Manual impls: the snapshot only borrows its curves, so copying it must
// not require the curves themselves to be `Clone`.
impl<D, Q> Clone for TouchMarket<'_, D, Q> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, Q> Copy for TouchMarket<'_, D, Q> {}

impl<'a, D, Q> TouchMarket<'a, D, Q>
where
    D: YieldCurve<f64>,
    Q: YieldCurve<f64>,
{
    /// Creates a market snapshot.
    pub fn new(
        valuation_date: Date,
        spot: f64,
        discount_curve: &'a D,
        dividend_curve: &'a Q,
        volatility: f64,
    ) -> Self {
        Self {
            valuation_date,
            spot,
            discount_curve,
            dividend_curve,
            volatility,
        }
    }

    /// Same snapshot with a different spot.
    pub fn with_spot(&self, spot: f64) -> Self {
        Self { spot, ..*self }
    }

    /// Year fraction from valuation to `expiry`, floored at
    /// [`MATURITY_FLOOR`]. `None` if the valuation date is after `expiry`.
    pub fn time_to_expiry(&self, expiry: Date) -> Option<f64> {
        if self.valuation_date > expiry {
            return None;
        }
        let t = year_fraction(self.valuation_date, expiry);
        if t < MATURITY_FLOOR {
            tracing::warn!(
                maturity = t,
                floor = MATURITY_FLOOR,
                "time to expiry below floor; using floor"
            );
            return Some(MATURITY_FLOOR);
        }
        Some(t)
    }
}
