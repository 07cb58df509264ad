//! Monte Carlo touch option valuation.
//!
//! # Architecture
//!
//! ```text
//! TouchMcPricer
//! ├── TouchMcConfig   (paths, steps per year, seed, parallel threshold)
//! ├── PathWorkspace   (pre-allocated antithetic path buffers)
//! ├── PricerRng       (seeded normal draws)
//! └── Orchestration
//!     ├── generate_antithetic_gbm_paths()
//!     └── barrier-hit kernels over path blocks (rayon)
//! ```
//!
//! # Example
//!
//! ```rust
//! use pricer_core::market_data::curves::FlatCurve;
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{TouchOption, TouchPayoffType};
//! use pricer_models::market::TouchMarket;
//! use pricer_pricing::mc::{TouchMcConfig, TouchMcPricer};
//!
//! let valuation = Date::from_ymd(2024, 1, 2).unwrap();
//! let option = TouchOption::new(
//!     valuation.add_days(365),
//!     TouchPayoffType::UpAndInCashAtHit,
//!     110.0,
//!     1.0,
//! )
//! .unwrap();
//!
//! let discount = FlatCurve::new(0.05);
//! let dividend = FlatCurve::new(0.02);
//! let market = TouchMarket::new(valuation, 100.0, &discount, &dividend, 0.2);
//!
//! let mut pricer = TouchMcPricer::new(TouchMcConfig::default()).unwrap();
//! let result = pricer.price(&option, &market).unwrap();
//! println!("{:.4} +/- {:.4}", result.price, result.confidence_95());
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod touch;
pub mod workspace;

pub use config::{TouchMcConfig, TouchMcConfigBuilder, MAX_CELLS, MAX_PATHS, MAX_STEPS};
pub use error::{ConfigError, SimulationError};
pub use paths::{generate_antithetic_gbm_paths, terminal_prices, GbmParams};
pub use touch::{TouchMcPricer, TouchMcResult};
pub use workspace::PathWorkspace;
