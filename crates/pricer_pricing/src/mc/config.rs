//! Monte Carlo simulation configuration.
//!
//! [`TouchMcConfig`] is an explicit value handed to the pricer; there are no
//! process-wide defaults beyond [`Default`].

use super::error::ConfigError;

/// Maximum number of base (pre-antithetic) paths.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps derived for a single valuation.
pub const MAX_STEPS: usize = 100_000;

/// Maximum simulation grid size, base paths × time steps.
pub const MAX_CELLS: usize = 100_000_000;

/// Default number of base paths.
pub const DEFAULT_N_PATHS: usize = 10_000;

/// Default monitoring frequency (trading days).
pub const DEFAULT_STEPS_PER_YEAR: usize = 252;

/// Default seed.
pub const DEFAULT_SEED: u64 = 4242;

/// Default base-path count from which blocks run on the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// Monte Carlo touch valuation settings.
///
/// `n_paths` counts base paths; antithetic pairing doubles the number of
/// simulated paths. The step count of a valuation is derived from its
/// maturity as `floor(t * steps_per_year) + 1`.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::TouchMcConfig;
///
/// let config = TouchMcConfig::builder()
///     .n_paths(50_000)
///     .steps_per_year(365)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 50_000);
/// assert_eq!(config.n_steps_for(1.0).unwrap(), 366);
///
/// let defaults = TouchMcConfig::default();
/// assert_eq!(defaults.seed(), 4242);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct TouchMcConfig {
    n_paths: usize,
    steps_per_year: usize,
    seed: u64,
    parallel_threshold: usize,
}

impl Default for TouchMcConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_N_PATHS,
            steps_per_year: DEFAULT_STEPS_PER_YEAR,
            seed: DEFAULT_SEED,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl TouchMcConfig {
    /// Creates a builder seeded with the defaults.
    #[inline]
    pub fn builder() -> TouchMcConfigBuilder {
        TouchMcConfigBuilder::default()
    }

    /// Number of base paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Monitoring steps per year.
    #[inline]
    pub fn steps_per_year(&self) -> usize {
        self.steps_per_year
    }

    /// Seed of the normal stream.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Base-path count from which path blocks run in parallel.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidPathCount` if `n_paths` is 0 or above [`MAX_PATHS`]
    /// - `InvalidParameter` if `steps_per_year` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        if self.steps_per_year == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "steps_per_year",
                value: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Number of time steps for a valuation of maturity `t` years.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `t` is negative or not finite
    /// - `InvalidStepCount` if the derived count exceeds [`MAX_STEPS`]
    /// - `GridTooLarge` if `n_paths × n_steps` exceeds [`MAX_CELLS`]
    pub fn n_steps_for(&self, maturity: f64) -> Result<usize, ConfigError> {
        if !maturity.is_finite() || maturity < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "maturity",
                value: format!("{maturity} is not a non-negative year fraction"),
            });
        }
        let raw = (maturity * self.steps_per_year as f64).floor();
        if raw >= MAX_STEPS as f64 {
            return Err(ConfigError::InvalidStepCount(
                raw.min(usize::MAX as f64) as usize + 1,
            ));
        }
        let n_steps = raw as usize + 1;
        if self.n_paths.saturating_mul(n_steps) > MAX_CELLS {
            return Err(ConfigError::GridTooLarge {
                n_paths: self.n_paths,
                n_steps,
            });
        }
        Ok(n_steps)
    }
}

/// Builder for [`TouchMcConfig`].
///
/// Unset fields keep their defaults; `build` validates.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{ConfigError, TouchMcConfig};
///
/// let err = TouchMcConfig::builder().n_paths(0).build().unwrap_err();
/// assert_eq!(err, ConfigError::InvalidPathCount(0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TouchMcConfigBuilder {
    n_paths: Option<usize>,
    steps_per_year: Option<usize>,
    seed: Option<u64>,
    parallel_threshold: Option<usize>,
}

impl TouchMcConfigBuilder {
    /// Sets the number of base paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the monitoring frequency.
    #[inline]
    pub fn steps_per_year(mut self, steps_per_year: usize) -> Self {
        self.steps_per_year = Some(steps_per_year);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the base-path count from which blocks run in parallel.
    ///
    /// `usize::MAX` forces sequential evaluation; results do not depend on
    /// this setting.
    #[inline]
    pub fn parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = Some(parallel_threshold);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// As [`TouchMcConfig::validate`].
    pub fn build(self) -> Result<TouchMcConfig, ConfigError> {
        let defaults = TouchMcConfig::default();
        let config = TouchMcConfig {
            n_paths: self.n_paths.unwrap_or(defaults.n_paths),
            steps_per_year: self.steps_per_year.unwrap_or(defaults.steps_per_year),
            seed: self.seed.unwrap_or(defaults.seed),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
        };

        config.validate()?;
        Ok(config)
    }
}
