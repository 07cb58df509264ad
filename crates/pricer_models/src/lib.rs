//! # Pricer Models (L2: Business Logic)
//!
//! Touch option contracts and their closed-form valuation.
//!
//! This crate provides:
//! - The twelve-way touch payoff taxonomy and the [`TouchOption`] contract
//!   (`instruments`)
//! - The per-call market snapshot [`TouchMarket`] (`market`)
//! - The analytic valuer under continuous barrier monitoring (`analytical`)
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::curves::FlatCurve;
//! use pricer_core::types::Date;
//! use pricer_models::analytical::AnalyticTouchPricer;
//! use pricer_models::instruments::{TouchOption, TouchPayoffType};
//! use pricer_models::market::TouchMarket;
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
//! let value = AnalyticTouchPricer::new().price(&option, &market).unwrap();
//! assert!(value > 0.0 && value < 1.0);
//! ```
//!
//! [`TouchOption`]: instruments::TouchOption
//! [`TouchMarket`]: market::TouchMarket

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod market;
