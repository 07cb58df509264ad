//! Monte Carlo valuation of touch options under discrete monitoring.
//!
//! The barrier is observed on the simulation grid only, at `dt * step` for
//! `step = 1..=n_steps`; a grid price on or through the barrier counts as a
//! touch. Each antithetic pair contributes one sample, the average of its
//! two paths, and the standard error is computed over those pair samples.

use pricer_core::market_data::curves::YieldCurve;
use pricer_models::instruments::{
    BarrierDirection, KnockType, PaymentTiming, PayoffAsset, TouchOption,
};
use pricer_models::market::{TouchMarket, VOLATILITY_FLOOR};
use rayon::prelude::*;

use super::config::TouchMcConfig;
use super::error::{ConfigError, SimulationError};
use super::paths::{generate_antithetic_gbm_paths, GbmParams};
use super::workspace::PathWorkspace;
use crate::rng::PricerRng;

/// Antithetic pairs per accumulation block.
const BLOCK_PAIRS: usize = 256;

/// Monte Carlo touch valuation result.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::TouchMcResult;
///
/// let result = TouchMcResult { price: 0.61, std_error: 0.004, n_paths: 20_000, n_steps: 253 };
/// assert!((result.confidence_95() - 0.00784).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TouchMcResult {
    /// Present value estimate.
    pub price: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Simulated paths, antithetic partners included.
    pub n_paths: usize,
    /// Monitoring steps per path.
    pub n_steps: usize,
}

impl TouchMcResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }
}

/// Per-path cash flow, before the expiry discount factor.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Kernel {
    /// `payment * exp(-rate * hit_time)` on touched paths.
    HitPresentValue { payment: f64, rate: f64, dt: f64 },
    /// `payment` on touched paths.
    HitIndicator { payment: f64 },
    /// `S(T)` on touched paths.
    TerminalIfHit,
    /// `payment` on untouched paths.
    NoHitIndicator { payment: f64 },
    /// `S(T)` on untouched paths.
    TerminalIfNoHit,
}

impl Kernel {
    fn select(option: &TouchOption, rate: f64, dt: f64) -> Self {
        let payoff = option.payoff_type();
        match (payoff.timing(), payoff.knock(), payoff.asset()) {
            (PaymentTiming::AtHit, _, _) => Kernel::HitPresentValue {
                payment: option.effective_payment(),
                rate,
                dt,
            },
            (PaymentTiming::AtExpiry, KnockType::In, PayoffAsset::Cash) => Kernel::HitIndicator {
                payment: option.payment_size(),
            },
            (PaymentTiming::AtExpiry, KnockType::In, PayoffAsset::Asset) => Kernel::TerminalIfHit,
            (PaymentTiming::AtExpiry, KnockType::Out, PayoffAsset::Cash) => {
                Kernel::NoHitIndicator {
                    payment: option.payment_size(),
                }
            }
            (PaymentTiming::AtExpiry, KnockType::Out, PayoffAsset::Asset) => {
                Kernel::TerminalIfNoHit
            }
        }
    }

    /// Whether the expiry discount factor applies to the kernel mean.
    fn discounted_at_expiry(self) -> bool {
        !matches!(self, Kernel::HitPresentValue { .. })
    }

    #[inline]
    fn evaluate(self, path: &[f64], barrier: f64, direction: BarrierDirection) -> f64 {
        let hit = path[1..]
            .iter()
            .position(|&s| direction.is_breached(s, barrier))
            .map(|i| i + 1);
        let terminal = path[path.len() - 1];
        match (self, hit) {
            (Kernel::HitPresentValue { payment, rate, dt }, Some(step)) => {
                payment * (-rate * dt * step as f64).exp()
            }
            (Kernel::HitIndicator { payment }, Some(_)) => payment,
            (Kernel::TerminalIfHit, Some(_)) => terminal,
            (Kernel::NoHitIndicator { payment }, None) => payment,
            (Kernel::TerminalIfNoHit, None) => terminal,
            _ => 0.0,
        }
    }
}

/// Running sums of one block of pair samples.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct BlockSums {
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl BlockSums {
    #[inline]
    fn push(&mut self, sample: f64) {
        self.sum += sample;
        self.sum_sq += sample * sample;
        self.count += 1;
    }

    #[inline]
    fn merge(mut self, other: BlockSums) -> Self {
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.count += other.count;
        self
    }

    /// Sample mean and standard error of the mean.
    fn mean_and_error(&self) -> (f64, f64) {
        if self.count == 0 {
            return (0.0, 0.0);
        }
        let n = self.count as f64;
        let mean = self.sum / n;
        let denom = (self.count.max(2) - 1) as f64;
        let variance = ((self.sum_sq - n * mean * mean) / denom).max(0.0);
        (mean, (variance / n).sqrt())
    }
}

/// Monte Carlo touch option valuer.
///
/// Owns its configuration and a [`PathWorkspace`] reused across calls.
/// Every call reseeds from the configured seed, so repeated valuations of
/// the same inputs are identical.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::curves::FlatCurve;
/// use pricer_core::types::Date;
/// use pricer_models::instruments::{TouchOption, TouchPayoffType};
/// use pricer_models::market::TouchMarket;
/// use pricer_pricing::mc::{TouchMcConfig, TouchMcPricer};
///
/// let valuation = Date::from_ymd(2024, 1, 2).unwrap();
/// let option = TouchOption::new(
///     valuation.add_days(182),
///     TouchPayoffType::DownAndOutCashOrNothing,
///     60.0,
///     1.0,
/// )
/// .unwrap();
///
/// let discount = FlatCurve::new(0.05);
/// let dividend = FlatCurve::new(0.0);
/// let market = TouchMarket::new(valuation, 100.0, &discount, &dividend, 0.2);
///
/// let config = TouchMcConfig::builder().n_paths(2_000).build().unwrap();
/// let mut pricer = TouchMcPricer::new(config).unwrap();
/// let result = pricer.price(&option, &market).unwrap();
/// assert!(result.price > 0.9 && result.price < 1.0);
/// ```
pub struct TouchMcPricer {
    config: TouchMcConfig,
    workspace: PathWorkspace,
    rng: PricerRng,
}

impl TouchMcPricer {
    /// Creates a pricer.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: TouchMcConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            workspace: PathWorkspace::default(),
            rng: PricerRng::from_seed(config.seed()),
        })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &TouchMcConfig {
        &self.config
    }

    /// Simulates `option` under `market`.
    ///
    /// # Errors
    ///
    /// - `InvalidDateOrder` if the valuation date is after expiry
    /// - `BarrierAlreadyCrossed` if spot is at or through the barrier
    /// - `MarketData` if a curve lookup fails
    /// - `InvalidVolatility` if volatility is NaN or infinite
    /// - `InvalidPathParameters` for unusable spot, volatility or rates
    /// - `Config` if the derived step count is out of range
    pub fn price<D, Q>(
        &mut self,
        option: &TouchOption,
        market: &TouchMarket<'_, D, Q>,
    ) -> Result<TouchMcResult, SimulationError>
    where
        D: YieldCurve<f64>,
        Q: YieldCurve<f64>,
    {
        let maturity = market.time_to_expiry(option.expiry()).ok_or(
            SimulationError::InvalidDateOrder {
                valuation: market.valuation_date,
                expiry: option.expiry(),
            },
        )?;

        let barrier = option.barrier();
        let direction = option.payoff_type().direction();
        if direction.is_breached(market.spot, barrier) {
            return Err(SimulationError::BarrierAlreadyCrossed {
                spot: market.spot,
                barrier,
                direction,
            });
        }

        let df = market.discount_curve.discount_factor(maturity)?;
        let dq = market.dividend_curve.discount_factor(maturity)?;
        let rate = -df.ln() / maturity;
        let dividend = -dq.ln() / maturity;

        if !market.volatility.is_finite() {
            return Err(SimulationError::InvalidVolatility {
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
        let params = GbmParams::new(
            market.spot,
            rate - dividend,
            market.volatility.max(VOLATILITY_FLOOR),
            maturity,
        );
        if !params.is_valid() {
            return Err(SimulationError::InvalidPathParameters { params });
        }

        let n_steps = self.config.n_steps_for(maturity)?;
        let n_paths = self.config.n_paths();
        let dt = maturity / n_steps as f64;
        tracing::trace!(n_paths, n_steps, dt, rate, dividend, "touch simulation grid");

        self.workspace.ensure_capacity(n_paths, n_steps);
        tracing::trace!(
            bytes = self.workspace.memory_usage(),
            "path workspace ready"
        );
        self.rng.reseed();
        self.rng.fill_normal(self.workspace.randoms_mut());
        generate_antithetic_gbm_paths(&mut self.workspace, params, n_paths, n_steps);

        let kernel = Kernel::select(option, rate, dt);
        let sums = self.accumulate(kernel, barrier, direction);
        let (mean, error) = sums.mean_and_error();
        let scale = if kernel.discounted_at_expiry() { df } else { 1.0 };

        let result = TouchMcResult {
            price: mean * scale,
            std_error: error * scale,
            n_paths: 2 * n_paths,
            n_steps,
        };
        tracing::debug!(
            payoff = %option.payoff_type(),
            spot = market.spot,
            barrier,
            maturity,
            price = result.price,
            std_error = result.std_error,
            "monte carlo touch valuation"
        );
        Ok(result)
    }

    /// Present value only; see [`price`](Self::price).
    ///
    /// # Errors
    ///
    /// As [`price`](Self::price).
    pub fn price_value<D, Q>(
        &mut self,
        option: &TouchOption,
        market: &TouchMarket<'_, D, Q>,
    ) -> Result<f64, SimulationError>
    where
        D: YieldCurve<f64>,
        Q: YieldCurve<f64>,
    {
        self.price(option, market).map(|r| r.price)
    }

    /// Sums pair samples block by block and merges blocks in index order,
    /// so the parallel and sequential paths produce identical sums.
    fn accumulate(&self, kernel: Kernel, barrier: f64, direction: BarrierDirection) -> BlockSums {
        let workspace = &self.workspace;
        let n_pairs = workspace.size_paths();
        let n_blocks = n_pairs.div_ceil(BLOCK_PAIRS);

        let block = |b: usize| {
            let mut sums = BlockSums::default();
            let end = ((b + 1) * BLOCK_PAIRS).min(n_pairs);
            for p in b * BLOCK_PAIRS..end {
                let base = kernel.evaluate(workspace.path(p), barrier, direction);
                let mirror = kernel.evaluate(workspace.path(p + n_pairs), barrier, direction);
                sums.push(0.5 * (base + mirror));
            }
            sums
        };

        let blocks: Vec<BlockSums> = if n_pairs >= self.config.parallel_threshold() {
            (0..n_blocks).into_par_iter().map(block).collect()
        } else {
            (0..n_blocks).map(block).collect()
        };

        blocks
            .into_iter()
            .fold(BlockSums::default(), BlockSums::merge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::market_data::curves::FlatCurve;
    use pricer_core::types::Date;
    use pricer_models::instruments::TouchPayoffType;

    fn valuation() -> Date {
        Date::from_ymd(2024, 1, 2).unwrap()
    }

    fn option(payoff: TouchPayoffType, barrier: f64) -> TouchOption {
        TouchOption::new(valuation().add_days(365), payoff, barrier, 1.0).unwrap()
    }

    fn pricer(n_paths: usize) -> TouchMcPricer {
        TouchMcPricer::new(TouchMcConfig::builder().n_paths(n_paths).build().unwrap()).unwrap()
    }

    // ==========================================================
    // Kernels
    // ==========================================================

    #[test]
    fn test_kernel_hit_present_value_discounts_at_hit_step() {
        let kernel = Kernel::HitPresentValue {
            payment: 2.0,
            rate: 0.1,
            dt: 0.25,
        };
        let path = [100.0, 104.0, 111.0, 108.0, 120.0];
        let v = kernel.evaluate(&path, 110.0, BarrierDirection::Up);
        assert!((v - 2.0 * (-0.1_f64 * 0.5).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_kernel_hit_is_inclusive() {
        let kernel = Kernel::HitIndicator { payment: 1.0 };
        let touched = [100.0, 95.0, 90.0, 97.0];
        let missed = [100.0, 95.0, 90.01, 97.0];
        assert_eq!(kernel.evaluate(&touched, 90.0, BarrierDirection::Down), 1.0);
        assert_eq!(kernel.evaluate(&missed, 90.0, BarrierDirection::Down), 0.0);
    }

    #[test]
    fn test_kernel_terminal_variants() {
        let touched = [100.0, 89.0, 93.0];
        assert_eq!(
            Kernel::TerminalIfHit.evaluate(&touched, 90.0, BarrierDirection::Down),
            93.0
        );
        assert_eq!(
            Kernel::TerminalIfNoHit.evaluate(&touched, 90.0, BarrierDirection::Down),
            0.0
        );
        assert_eq!(
            Kernel::NoHitIndicator { payment: 3.0 }.evaluate(
                &touched,
                80.0,
                BarrierDirection::Down
            ),
            3.0
        );
    }

    #[test]
    fn test_kernel_selection() {
        let o = option(TouchPayoffType::UpAndInAssetAtHit, 110.0);
        assert_eq!(
            Kernel::select(&o, 0.05, 0.01),
            Kernel::HitPresentValue {
                payment: 110.0,
                rate: 0.05,
                dt: 0.01
            }
        );
        let o = option(TouchPayoffType::DownAndOutAssetOrNothing, 90.0);
        assert_eq!(Kernel::select(&o, 0.05, 0.01), Kernel::TerminalIfNoHit);
        assert!(!Kernel::select(&option(TouchPayoffType::DownAndInCashAtHit, 90.0), 0.0, 0.1)
            .discounted_at_expiry());
    }

    #[test]
    fn test_block_sums_statistics() {
        let mut sums = BlockSums::default();
        for x in [1.0, 2.0, 3.0, 4.0] {
            sums.push(x);
        }
        let (mean, error) = sums.mean_and_error();
        assert!((mean - 2.5).abs() < 1e-15);
        // sample variance 5/3
        assert!((error - (5.0_f64 / 3.0 / 4.0).sqrt()).abs() < 1e-12);
    }

    // ==========================================================
    // Valuation
    // ==========================================================

    #[test]
    fn test_barrier_guard() {
        let discount = FlatCurve::new(0.05);
        let market = TouchMarket::new(valuation(), 90.0, &discount, &discount, 0.2);
        let err = pricer(100)
            .price(&option(TouchPayoffType::DownAndInCashAtHit, 90.0), &market)
            .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::BarrierAlreadyCrossed {
                direction: BarrierDirection::Down,
                ..
            }
        ));
    }

    #[test]
    fn test_date_order() {
        let discount = FlatCurve::new(0.05);
        let late = valuation().add_days(400);
        let market = TouchMarket::new(late, 100.0, &discount, &discount, 0.2);
        let err = pricer(100)
            .price(&option(TouchPayoffType::UpAndInCashAtHit, 110.0), &market)
            .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidDateOrder { .. }));
    }

    #[test]
    fn test_reports_grid() {
        let discount = FlatCurve::new(0.05);
        let market = TouchMarket::new(valuation(), 100.0, &discount, &discount, 0.2);
        let result = pricer(500)
            .price(&option(TouchPayoffType::UpAndInCashAtHit, 110.0), &market)
            .unwrap();
        assert_eq!(result.n_paths, 1000);
        assert_eq!(result.n_steps, 253);
        assert!(result.std_error > 0.0);
    }

    #[test]
    fn test_nan_spot_rejected() {
        let discount = FlatCurve::new(0.05);
        let market = TouchMarket::new(valuation(), f64::NAN, &discount, &discount, 0.2);
        let err = pricer(100)
            .price(&option(TouchPayoffType::UpAndInCashAtHit, 110.0), &market)
            .unwrap_err();
        assert!(matches!(err, SimulationError::InvalidPathParameters { .. }));
    }

    #[test]
    fn test_non_finite_volatility_rejected() {
        let discount = FlatCurve::new(0.05);
        let dividend = FlatCurve::new(0.0);
        let o = option(TouchPayoffType::DownAndOutCashOrNothing, 90.0);
        for vol in [f64::NAN, f64::INFINITY] {
            let market = TouchMarket::new(valuation(), 100.0, &discount, &dividend, vol);
            let err = pricer(200).price(&o, &market).unwrap_err();
            assert!(matches!(err, SimulationError::InvalidVolatility { .. }));
        }
    }

    #[test]
    fn test_grid_limit_rejected_before_allocation() {
        let discount = FlatCurve::new(0.05);
        let market = TouchMarket::new(valuation(), 100.0, &discount, &discount, 0.2);
        let config = TouchMcConfig::builder()
            .n_paths(crate::mc::MAX_PATHS)
            .build()
            .unwrap();
        let mut p = TouchMcPricer::new(config).unwrap();
        let err = p
            .price(&option(TouchPayoffType::UpAndInCashAtHit, 110.0), &market)
            .unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Config(ConfigError::GridTooLarge { n_steps: 253, .. })
        ));
        assert_eq!(p.workspace.memory_usage(), 0);
    }

    #[test]
    fn test_repeat_calls_identical() {
        let discount = FlatCurve::new(0.03);
        let dividend = FlatCurve::new(0.01);
        let market = TouchMarket::new(valuation(), 100.0, &discount, &dividend, 0.25);
        let o = option(TouchPayoffType::DownAndInCashAtExpiry, 92.0);
        let mut p = pricer(1_000);
        let first = p.price(&o, &market).unwrap();
        let second = p.price(&o, &market).unwrap();
        assert_eq!(first, second);
    }
}
