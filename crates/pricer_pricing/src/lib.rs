//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! Monte Carlo valuation of single-barrier touch options.
//!
//! ## Layer 3 Role
//!
//! - Seeded random number generation ([`rng`])
//! - Antithetic GBM path simulation and barrier-hit kernels ([`mc`])
//!
//! Contracts and market snapshots come from Layer 2 (`pricer_models`),
//! dates and curves from Layer 1 (`pricer_core`). The analytic valuer in
//! `pricer_models::analytical` is the continuous-monitoring reference the
//! simulation converges to as the step count grows.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::curves::FlatCurve;
//! use pricer_core::types::Date;
//! use pricer_models::analytical::AnalyticTouchPricer;
//! use pricer_models::instruments::{TouchOption, TouchPayoffType};
//! use pricer_models::market::TouchMarket;
//! use pricer_pricing::mc::{TouchMcConfig, TouchMcPricer};
//!
//! let valuation = Date::from_ymd(2024, 1, 2).unwrap();
//! let option = TouchOption::new(
//!     valuation.add_days(365),
//!     TouchPayoffType::DownAndInCashAtExpiry,
//!     90.0,
//!     1.0,
//! )
//! .unwrap();
//! let discount = FlatCurve::new(0.04);
//! let dividend = FlatCurve::new(0.0);
//! let market = TouchMarket::new(valuation, 100.0, &discount, &dividend, 0.2);
//!
//! let analytic = AnalyticTouchPricer::new().price(&option, &market).unwrap();
//! let config = TouchMcConfig::builder().n_paths(4_000).build().unwrap();
//! let mc = TouchMcPricer::new(config).unwrap().price(&option, &market).unwrap();
//! assert!((mc.price - analytic).abs() < 0.1);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod mc;
pub mod rng;
