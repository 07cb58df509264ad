//! Closed-form touch option pricing.
//!
//! Rubinstein-Reiner binary barrier formulas in the notation of Haug,
//! *The Complete Guide to Option Pricing Formulas*, p.177, under
//! continuous barrier monitoring:
//!
//! ```text
//! b   = r - q
//! mu  = (b - σ²/2) / σ²
//! lam = sqrt(mu² + 2r/σ²)
//! ```
//!
//! Every payoff reduces to one of two blocks parameterised by the barrier
//! side sign `eta` (+1 down, -1 up) and the payoff side sign `phi`:
//!
//! - **Hit block** (A5): value at the hit instant, used by the `AtHit`
//!   payoffs.
//! - **Expiry blocks** (B2/B4 for cash, A2/A4 for asset): knock-ins take
//!   the sum with `phi = -eta`, knock-outs the difference with `phi = eta`.
//!
//! # Key Relationship
//!
//! **In-Out Parity**: expiry knock-in + knock-out = barrier-free claim,
//! i.e. `K·df` for cash and `S·e^{-qt}` for asset.

use num_traits::Float;
use pricer_core::market_data::curves::YieldCurve;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::{BarrierDirection, KnockType, TouchOption, TouchPayoffType};
use crate::market::{TouchMarket, MATURITY_FLOOR, VOLATILITY_FLOOR};

/// Inputs of the closed-form kernel.
///
/// Rates are continuously compounded; `discount_factor` is the discount
/// curve's factor at `maturity` and is used as-is by the cash blocks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchParams<T: Float> {
    /// Spot price
    pub spot: T,
    /// Barrier level
    pub barrier: T,
    /// Cash payment size (asset payoffs ignore it)
    pub payment: T,
    /// Risk-free rate
    pub rate: T,
    /// Dividend yield
    pub dividend: T,
    /// Volatility
    pub volatility: T,
    /// Time to expiry in years
    pub maturity: T,
    /// Discount factor to expiry
    pub discount_factor: T,
    /// Payoff type
    pub payoff_type: TouchPayoffType,
}

impl<T: Float> TouchParams<T> {
    /// Creates kernel inputs with `discount_factor = exp(-rate * maturity)`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        barrier: T,
        payment: T,
        rate: T,
        dividend: T,
        volatility: T,
        maturity: T,
        payoff_type: TouchPayoffType,
    ) -> Self {
        Self {
            spot,
            barrier,
            payment,
            rate,
            dividend,
            volatility,
            maturity,
            discount_factor: (-rate * maturity).exp(),
            payoff_type,
        }
    }
}

/// Quantities shared by the hit and expiry blocks.
struct BlockInputs<T> {
    ln_ratio: T,
    vol_sqrt_t: T,
    mu: T,
    lam: T,
}

/// `ratio^power * prob`, evaluated in log space so that a huge power
/// against a vanishing probability stays finite.
#[inline]
fn weighted<T: Float>(ln_ratio: T, power: T, prob: T) -> T {
    if prob <= T::zero() {
        T::zero()
    } else {
        (power * ln_ratio + prob.ln()).exp()
    }
}

/// A5: present value at the first hit of one unit, per unit payment.
fn hit_block<T: Float>(k: &BlockInputs<T>, eta: T) -> T {
    let two = T::one() + T::one();
    let z = k.ln_ratio / k.vol_sqrt_t + k.lam * k.vol_sqrt_t;
    let first = weighted(k.ln_ratio, k.mu + k.lam, norm_cdf(eta * z));
    let second = weighted(
        k.ln_ratio,
        k.mu - k.lam,
        norm_cdf(eta * z - two * eta * k.lam * k.vol_sqrt_t),
    );
    first + second
}

/// B2 and B4 per unit of `K·df`.
fn cash_expiry_blocks<T: Float>(k: &BlockInputs<T>, eta: T, phi: T) -> (T, T) {
    let two = T::one() + T::one();
    let drift = (k.mu + T::one()) * k.vol_sqrt_t;
    let x2 = -k.ln_ratio / k.vol_sqrt_t + drift;
    let y2 = k.ln_ratio / k.vol_sqrt_t + drift;
    let b2 = norm_cdf(phi * x2 - phi * k.vol_sqrt_t);
    let b4 = weighted(k.ln_ratio, two * k.mu, norm_cdf(eta * y2 - eta * k.vol_sqrt_t));
    (b2, b4)
}

/// A2 and A4 per unit of `S·e^{-qt}`.
fn asset_expiry_blocks<T: Float>(k: &BlockInputs<T>, eta: T, phi: T) -> (T, T) {
    let two = T::one() + T::one();
    let drift = (k.mu + T::one()) * k.vol_sqrt_t;
    let x2 = -k.ln_ratio / k.vol_sqrt_t + drift;
    let y2 = k.ln_ratio / k.vol_sqrt_t + drift;
    let a2 = norm_cdf(phi * x2);
    let a4 = weighted(k.ln_ratio, two * (k.mu + T::one()), norm_cdf(eta * y2));
    (a2, a4)
}

#[inline]
fn lossy<T: Float>(x: T) -> f64 {
    x.to_f64().unwrap_or(f64::NAN)
}

#[inline]
fn floor_of<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::min_positive_value)
}

/// Checks that a spot can be priced against `barrier` in `direction`.
///
/// Spot must be finite and positive, and strictly on the live side of the
/// barrier: above it for `Down`, below it for `Up`.
pub fn check_barrier_position<T: Float>(
    spot: T,
    barrier: T,
    direction: BarrierDirection,
) -> Result<(), AnalyticalError> {
    if !spot.is_finite() || spot <= T::zero() {
        return Err(AnalyticalError::InvalidSpot { spot: lossy(spot) });
    }
    let breached = match direction {
        BarrierDirection::Down => spot <= barrier,
        BarrierDirection::Up => spot >= barrier,
    };
    if breached {
        return Err(AnalyticalError::InvalidBarrierPosition {
            spot: lossy(spot),
            barrier: lossy(barrier),
            direction,
        });
    }
    Ok(())
}

/// Prices a touch payoff in closed form.
///
/// Maturity and volatility are floored at [`MATURITY_FLOOR`] and
/// [`VOLATILITY_FLOOR`]. The knock-out block difference is clamped at
/// zero against rounding before it is scaled by the payment.
///
/// # Errors
///
/// - `InvalidSpot` / `InvalidBarrierPosition` from [`check_barrier_position`]
/// - `InvalidVolatility` if the volatility is NaN or infinite
/// - `NumericalInstability` if the rates make `lam` or the value non-finite
///
/// # Examples
///
/// ```
/// use pricer_models::analytical::touch::{touch_price, TouchParams};
/// use pricer_models::instruments::TouchPayoffType;
///
/// let params = TouchParams::new(
///     100.0_f64, 110.0, 1.0, 0.05, 0.02, 0.20, 1.0,
///     TouchPayoffType::UpAndInCashAtHit,
/// );
/// let value = touch_price(&params).unwrap();
/// assert!(value > 0.0 && value < (-0.05_f64).exp());
/// ```
pub fn touch_price<T: Float>(params: &TouchParams<T>) -> Result<T, AnalyticalError> {
    let payoff = params.payoff_type;
    let direction = payoff.direction();
    let (s, h) = (params.spot, params.barrier);
    check_barrier_position(s, h, direction)?;

    if !params.volatility.is_finite() {
        return Err(AnalyticalError::InvalidVolatility {
            volatility: lossy(params.volatility),
        });
    }
    let v = params.volatility.max(floor_of(VOLATILITY_FLOOR));
    let t = params.maturity.max(floor_of(MATURITY_FLOOR));
    let r = params.rate;
    let q = params.dividend;
    let two = T::one() + T::one();

    let b = r - q;
    let var = v * v;
    let mu = (b - var / two) / var;
    let lam = (mu * mu + two * r / var).sqrt();
    let inputs = BlockInputs {
        ln_ratio: (h / s).ln(),
        vol_sqrt_t: v * t.sqrt(),
        mu,
        lam,
    };

    let eta = match direction {
        BarrierDirection::Down => T::one(),
        BarrierDirection::Up => -T::one(),
    };
    let (phi, combine): (T, fn(T, T) -> T) = match payoff.knock() {
        KnockType::In => (-eta, |a: T, b: T| a + b),
        KnockType::Out => (eta, |a: T, b: T| (a - b).max(T::zero())),
    };
    let cash = params.payment * params.discount_factor;
    let asset = s * (-q * t).exp();

    use TouchPayoffType::*;
    let value = match payoff {
        DownAndInCashAtHit | UpAndInCashAtHit => hit_block(&inputs, eta) * params.payment,
        DownAndInAssetAtHit | UpAndInAssetAtHit => hit_block(&inputs, eta) * h,
        DownAndInCashAtExpiry
        | UpAndInCashAtExpiry
        | DownAndOutCashOrNothing
        | UpAndOutCashOrNothing => {
            let (b2, b4) = cash_expiry_blocks(&inputs, eta, phi);
            combine(b2, b4) * cash
        }
        DownAndInAssetAtExpiry
        | UpAndInAssetAtExpiry
        | DownAndOutAssetOrNothing
        | UpAndOutAssetOrNothing => {
            let (a2, a4) = asset_expiry_blocks(&inputs, eta, phi);
            combine(a2, a4) * asset
        }
    };

    if !value.is_finite() {
        return Err(AnalyticalError::NumericalInstability {
            message: format!(
                "{} value {} (mu = {}, lam = {})",
                payoff,
                lossy(value),
                lossy(mu),
                lossy(lam)
            ),
        });
    }
    Ok(value)
}

/// Inputs resolved from a contract and a market snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Resolved {
    maturity: f64,
    rate: f64,
    dividend: f64,
    discount_factor: f64,
    volatility: f64,
}

/// Closed-form valuer for [`TouchOption`] contracts.
///
/// Reads `r` and `q` as the continuously compounded zero rates of the
/// discount and dividend curves at expiry, and the discount factor from
/// the discount curve.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::curves::FlatCurve;
/// use pricer_core::types::Date;
/// use pricer_models::analytical::AnalyticTouchPricer;
/// use pricer_models::instruments::{TouchOption, TouchPayoffType};
/// use pricer_models::market::TouchMarket;
///
/// let valuation = Date::from_ymd(2024, 1, 2).unwrap();
/// let expiry = valuation.add_days(365);
/// let option = TouchOption::new(expiry, TouchPayoffType::DownAndOutCashOrNothing, 50.0, 1.0).unwrap();
///
/// let discount = FlatCurve::new(0.05);
/// let dividend = FlatCurve::new(0.02);
/// let market = TouchMarket::new(valuation, 100.0, &discount, &dividend, 0.2);
///
/// let value = AnalyticTouchPricer::new().price(&option, &market).unwrap();
/// assert!((value - (-0.05_f64).exp()).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AnalyticTouchPricer;

impl AnalyticTouchPricer {
    /// Creates the valuer.
    pub fn new() -> Self {
        Self
    }

    fn resolve<D, Q>(
        &self,
        option: &TouchOption,
        market: &TouchMarket<'_, D, Q>,
    ) -> Result<Resolved, AnalyticalError>
    where
        D: YieldCurve<f64>,
        Q: YieldCurve<f64>,
    {
        let maturity =
            market
                .time_to_expiry(option.expiry())
                .ok_or(AnalyticalError::InvalidDateOrder {
                    valuation: market.valuation_date,
                    expiry: option.expiry(),
                })?;
        if !market.volatility.is_finite() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: market.volatility,
            });
        }
        if market.volatility < VOLATILITY_FLOOR {
            tracing::warn!(
                volatility = market.volatility,
                floor = VOLATILITY_FLOOR,
                "volatility below floor; using floor"
            );
        }
        Ok(Resolved {
            maturity,
            rate: market.discount_curve.zero_rate(maturity)?,
            dividend: market.dividend_curve.zero_rate(maturity)?,
            discount_factor: market.discount_curve.discount_factor(maturity)?,
            volatility: market.volatility.max(VOLATILITY_FLOOR),
        })
    }

    fn params(option: &TouchOption, resolved: &Resolved, spot: f64) -> TouchParams<f64> {
        TouchParams {
            spot,
            barrier: option.barrier(),
            payment: option.payment_size(),
            rate: resolved.rate,
            dividend: resolved.dividend,
            volatility: resolved.volatility,
            maturity: resolved.maturity,
            discount_factor: resolved.discount_factor,
            payoff_type: option.payoff_type(),
        }
    }

    /// Present value of `option` at the snapshot's spot.
    ///
    /// # Errors
    ///
    /// - `InvalidDateOrder` if the valuation date is after expiry
    /// - `InvalidBarrierPosition` if spot is at or through the barrier
    /// - `MarketData` if a curve lookup fails
    pub fn price<D, Q>(
        &self,
        option: &TouchOption,
        market: &TouchMarket<'_, D, Q>,
    ) -> Result<f64, AnalyticalError>
    where
        D: YieldCurve<f64>,
        Q: YieldCurve<f64>,
    {
        let resolved = self.resolve(option, market)?;
        let value = touch_price(&Self::params(option, &resolved, market.spot))?;
        tracing::debug!(
            payoff = %option.payoff_type(),
            spot = market.spot,
            barrier = option.barrier(),
            maturity = resolved.maturity,
            value,
            "analytic touch valuation"
        );
        Ok(value)
    }

    /// Present values for a vector of spots, all other inputs shared.
    ///
    /// Every spot is validated before any is priced; one spot on the wrong
    /// side of the barrier fails the whole call.
    ///
    /// # Errors
    ///
    /// As [`price`](Self::price), plus `EmptySpots` for an empty slice.
    pub fn price_many<D, Q>(
        &self,
        option: &TouchOption,
        market: &TouchMarket<'_, D, Q>,
        spots: &[f64],
    ) -> Result<Vec<f64>, AnalyticalError>
    where
        D: YieldCurve<f64>,
        Q: YieldCurve<f64>,
    {
        if spots.is_empty() {
            return Err(AnalyticalError::EmptySpots);
        }
        let resolved = self.resolve(option, market)?;
        let direction = option.payoff_type().direction();
        for &spot in spots {
            check_barrier_position(spot, option.barrier(), direction)?;
        }
        let values = spots
            .iter()
            .map(|&spot| touch_price(&Self::params(option, &resolved, spot)))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(
            payoff = %option.payoff_type(),
            n_spots = spots.len(),
            maturity = resolved.maturity,
            "analytic touch valuation over spot vector"
        );
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::{PaymentTiming, PayoffAsset};
    use approx::assert_relative_eq;

    fn params(payoff: TouchPayoffType, spot: f64, barrier: f64) -> TouchParams<f64> {
        TouchParams::new(spot, barrier, 1.0, 0.05, 0.02, 0.20, 1.0, payoff)
    }

    /// A spot on the live side of `barrier` for the payoff's direction.
    fn live_spot(payoff: TouchPayoffType, barrier: f64) -> f64 {
        match payoff.direction() {
            BarrierDirection::Down => barrier * 1.1,
            BarrierDirection::Up => barrier / 1.1,
        }
    }

    // ==========================================================
    // Preconditions
    // ==========================================================

    #[test]
    fn test_barrier_equal_to_spot_is_rejected() {
        let err = touch_price(&params(TouchPayoffType::DownAndInCashAtHit, 100.0, 100.0))
            .unwrap_err();
        assert_eq!(
            err,
            AnalyticalError::InvalidBarrierPosition {
                spot: 100.0,
                barrier: 100.0,
                direction: BarrierDirection::Down,
            }
        );
    }

    #[test]
    fn test_wrong_side_rejected_for_every_payoff() {
        for payoff in TouchPayoffType::ALL {
            let wrong = match payoff.direction() {
                BarrierDirection::Down => 90.0,
                BarrierDirection::Up => 110.0,
            };
            let result = touch_price(&params(payoff, wrong, 100.0));
            assert!(
                matches!(result, Err(AnalyticalError::InvalidBarrierPosition { .. })),
                "{payoff}"
            );
        }
    }

    #[test]
    fn test_non_positive_spot_rejected() {
        let err = touch_price(&params(TouchPayoffType::UpAndInCashAtHit, 0.0, 100.0)).unwrap_err();
        assert_eq!(err, AnalyticalError::InvalidSpot { spot: 0.0 });
    }

    #[test]
    fn test_nan_volatility_rejected() {
        let mut p = params(TouchPayoffType::UpAndInCashAtHit, 90.0, 100.0);
        p.volatility = f64::NAN;
        assert!(matches!(
            touch_price(&p),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    // ==========================================================
    // Values
    // ==========================================================

    #[test]
    fn test_all_payoffs_finite_and_non_negative() {
        for payoff in TouchPayoffType::ALL {
            for barrier in [60.0, 95.0, 100.5, 150.0] {
                let spot = live_spot(payoff, barrier);
                let v = touch_price(&params(payoff, spot, barrier)).unwrap();
                assert!(v.is_finite() && v >= 0.0, "{payoff} H={barrier}: {v}");
            }
        }
    }

    #[test]
    fn test_up_in_cash_at_hit_bounded_by_discount_factor() {
        let v = touch_price(&params(TouchPayoffType::UpAndInCashAtHit, 100.0, 110.0)).unwrap();
        assert!(v > 0.0);
        assert!(v < (-0.05_f64).exp());
    }

    #[test]
    fn test_far_down_and_out_is_discounted_payment() {
        let v =
            touch_price(&params(TouchPayoffType::DownAndOutCashOrNothing, 100.0, 50.0)).unwrap();
        // Touch probability is about 4.4e-4 at this distance.
        assert_relative_eq!(v, (-0.05_f64).exp(), max_relative = 1e-3);
        assert!(v < (-0.05_f64).exp());
    }

    #[test]
    fn test_driftless_hit_probability_matches_reflection_principle() {
        // r = q = 0: the at-hit value is the probability of touching,
        // N(d) + (S/H) N(d - σ√t) with d = ln(H/S)/σ√t + σ√t/2.
        let (s, h, v, t) = (100.0_f64, 90.0, 0.25, 0.75);
        let p = TouchParams::new(s, h, 1.0, 0.0, 0.0, v, t, TouchPayoffType::DownAndInCashAtHit);
        let vst = v * t.sqrt();
        let d = (h / s).ln() / vst + vst / 2.0;
        let expected = norm_cdf(d) + (s / h) * norm_cdf(d - vst);
        assert_relative_eq!(touch_price(&p).unwrap(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_rate_hit_and_expiry_cash_agree() {
        // With r = 0 paying at the hit or at expiry is the same claim.
        let pairs = [
            (TouchPayoffType::DownAndInCashAtHit, TouchPayoffType::DownAndInCashAtExpiry, 80.0),
            (TouchPayoffType::UpAndInCashAtHit, TouchPayoffType::UpAndInCashAtExpiry, 125.0),
        ];
        for (hit, expiry, barrier) in pairs {
            let at_hit = TouchParams::new(100.0, barrier, 1.0, 0.0, 0.03, 0.3, 2.0, hit);
            let at_expiry = TouchParams { payoff_type: expiry, ..at_hit };
            assert_relative_eq!(
                touch_price(&at_hit).unwrap(),
                touch_price(&at_expiry).unwrap(),
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn test_in_out_parity_cash_and_asset() {
        for payoff in TouchPayoffType::ALL {
            let Some(complement) = payoff.complement() else {
                continue;
            };
            if payoff.knock() != KnockType::In {
                continue;
            }
            for barrier in [70.0, 97.0, 103.0, 140.0] {
                let spot = 100.0;
                if check_barrier_position(spot, barrier, payoff.direction()).is_err() {
                    continue;
                }
                let p_in = params(payoff, spot, barrier);
                let p_out = TouchParams {
                    payoff_type: complement,
                    ..p_in
                };
                let total = touch_price(&p_in).unwrap() + touch_price(&p_out).unwrap();
                let vanilla = match payoff.asset() {
                    PayoffAsset::Cash => p_in.payment * p_in.discount_factor,
                    PayoffAsset::Asset => spot * (-p_in.dividend * p_in.maturity).exp(),
                };
                assert_relative_eq!(total, vanilla, max_relative = 1e-8);
            }
        }
    }

    #[test]
    fn test_asset_at_hit_equals_cash_paying_barrier() {
        let pairs = [
            (TouchPayoffType::DownAndInAssetAtHit, TouchPayoffType::DownAndInCashAtHit, 85.0),
            (TouchPayoffType::UpAndInAssetAtHit, TouchPayoffType::UpAndInCashAtHit, 115.0),
        ];
        for (asset, cash, barrier) in pairs {
            let p_asset = params(asset, 100.0, barrier);
            let p_cash = TouchParams {
                payoff_type: cash,
                payment: barrier,
                ..p_asset
            };
            assert_relative_eq!(
                touch_price(&p_asset).unwrap(),
                touch_price(&p_cash).unwrap(),
                max_relative = 1e-14
            );
        }
    }

    #[test]
    fn test_in_value_decreases_with_barrier_distance() {
        for payoff in TouchPayoffType::ALL {
            if payoff.knock() != KnockType::In || payoff.asset() != PayoffAsset::Cash {
                continue;
            }
            let sign = match payoff.direction() {
                BarrierDirection::Down => -1.0,
                BarrierDirection::Up => 1.0,
            };
            let mut previous = f64::INFINITY;
            for distance in [1.0, 5.0, 10.0, 20.0, 40.0] {
                let v = touch_price(&params(payoff, 100.0, 100.0 + sign * distance)).unwrap();
                assert!(v < previous, "{payoff} at distance {distance}");
                previous = v;
            }
        }
    }

    #[test]
    fn test_out_value_increases_with_barrier_distance() {
        for payoff in [
            TouchPayoffType::DownAndOutCashOrNothing,
            TouchPayoffType::UpAndOutCashOrNothing,
        ] {
            let sign = match payoff.direction() {
                BarrierDirection::Down => -1.0,
                BarrierDirection::Up => 1.0,
            };
            let mut previous = f64::NEG_INFINITY;
            for distance in [1.0, 5.0, 10.0, 20.0, 40.0] {
                let v = touch_price(&params(payoff, 100.0, 100.0 + sign * distance)).unwrap();
                assert!(v > previous, "{payoff} at distance {distance}");
                previous = v;
            }
        }
    }

    #[test]
    fn test_tiny_volatility_stays_finite() {
        for payoff in TouchPayoffType::ALL {
            let spot = live_spot(payoff, 100.0);
            let mut p = params(payoff, spot, 100.0);
            p.volatility = 0.0;
            let v = touch_price(&p).unwrap();
            assert!(v.is_finite(), "{payoff}: {v}");
        }
    }

    #[test]
    fn test_zero_maturity_is_floored() {
        let mut p = params(TouchPayoffType::DownAndOutCashOrNothing, 100.0, 90.0);
        p.maturity = 0.0;
        p.discount_factor = 1.0;
        assert_relative_eq!(touch_price(&p).unwrap(), 1.0, epsilon = 1e-9);

        p.payoff_type = TouchPayoffType::DownAndInCashAtHit;
        assert!(touch_price(&p).unwrap() < 1e-9);
    }

    #[test]
    fn test_timing_axis_matches_block_choice() {
        for payoff in TouchPayoffType::ALL {
            if payoff.timing() == PaymentTiming::AtHit {
                assert_eq!(payoff.knock(), KnockType::In);
            }
        }
    }

    #[test]
    fn test_f32_kernel() {
        let p = TouchParams::new(
            100.0_f32,
            110.0,
            1.0,
            0.05,
            0.02,
            0.2,
            1.0,
            TouchPayoffType::UpAndInCashAtHit,
        );
        let v32 = touch_price(&p).unwrap();
        let v64 = touch_price(&params(TouchPayoffType::UpAndInCashAtHit, 100.0, 110.0)).unwrap();
        assert!((f64::from(v32) - v64).abs() < 1e-5);
    }
}
