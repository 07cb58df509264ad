//! # pricer_core: Foundation types for touch option pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Time types: `Date` and the ACT/365 `year_fraction` (`types::time`)
//! - Error types: `PricingError`, `DateError` (`types::error`)
//! - Discount and dividend curves: `YieldCurve`, `FlatCurve`, `ZeroCurve`
//!   (`market_data::curves`)
//!
//! Layer 1 has no dependencies on other pricer_* crates.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::curves::{FlatCurve, YieldCurve};
//! use pricer_core::types::{year_fraction, Date};
//!
//! let valuation = Date::from_ymd(2024, 1, 1).unwrap();
//! let expiry = Date::from_ymd(2025, 1, 1).unwrap();
//! let t = year_fraction(valuation, expiry);
//!
//! let curve = FlatCurve::new(0.05_f64);
//! let df = curve.discount_factor(t).unwrap();
//! assert!(df < 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date` and `FlatCurve`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
