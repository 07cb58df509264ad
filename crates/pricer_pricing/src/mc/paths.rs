//! Antithetic GBM path generation.
//!
//! Paths use the exact log-space step
//! ```text
//! S(t+dt) = S(t) × exp((μ - ½σ²)dt + σ√dt × Z)
//! ```
//! with `μ = r - q`. Each base path `p` consumes `n_steps` consecutive draws
//! `randoms[p * n_steps..]`; its antithetic partner `p + n_paths` replays
//! them negated.

use super::workspace::PathWorkspace;

/// Parameters for GBM path generation.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.03, 0.2, 1.0);
/// assert!(params.is_valid());
/// assert!(!GbmParams::new(-1.0, 0.03, 0.2, 1.0).is_valid());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-neutral drift `r - q`, annualised.
    pub drift: f64,
    /// Volatility (σ), annualised.
    pub volatility: f64,
    /// Time to maturity in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, drift: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            drift,
            volatility,
            maturity,
        }
    }

    /// Whether every field is finite, spot and maturity positive and
    /// volatility non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.spot > 0.0
            && self.spot.is_finite()
            && self.drift.is_finite()
            && self.volatility >= 0.0
            && self.volatility.is_finite()
            && self.maturity > 0.0
            && self.maturity.is_finite()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            drift: 0.05,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

/// Fills the workspace paths from its normal draws.
///
/// Expects `workspace.ensure_capacity(n_paths, n_steps)` and a filled
/// `randoms_mut()` beforehand. Writes `2 * n_paths` rows.
pub fn generate_antithetic_gbm_paths(
    workspace: &mut PathWorkspace,
    params: GbmParams,
    n_paths: usize,
    n_steps: usize,
) {
    debug_assert_eq!(n_paths, workspace.size_paths());
    debug_assert_eq!(n_steps, workspace.size_steps());

    let dt = params.maturity / n_steps as f64;
    let drift_dt = (params.drift - 0.5 * params.volatility * params.volatility) * dt;
    let vol_sqrt_dt = params.volatility * dt.sqrt();

    let (paths, randoms) = workspace.paths_mut_and_randoms();
    let row_len = n_steps + 1;
    let (base_rows, mirror_rows) = paths.split_at_mut(n_paths * row_len);

    for ((base, mirror), draws) in base_rows
        .chunks_exact_mut(row_len)
        .zip(mirror_rows.chunks_exact_mut(row_len))
        .zip(randoms.chunks_exact(n_steps.max(1)))
    {
        base[0] = params.spot;
        mirror[0] = params.spot;
        for (step, &z) in draws.iter().enumerate() {
            let shock = vol_sqrt_dt * z;
            base[step + 1] = base[step] * (drift_dt + shock).exp();
            mirror[step + 1] = mirror[step] * (drift_dt - shock).exp();
        }
    }
}

/// Terminal prices of every simulated row, antithetic partners included.
pub fn terminal_prices(workspace: &PathWorkspace) -> Vec<f64> {
    workspace
        .paths()
        .chunks_exact(workspace.row_len())
        .map(|row| row[row.len() - 1])
        .collect()
}
