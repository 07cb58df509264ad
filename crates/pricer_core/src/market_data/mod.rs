//! Market data consumed by the valuers.
//!
//! Curves are generic over `T: Float`; valuers query them at the year
//! fraction of the contract's expiry date.
//!
//! # Components
//!
//! - [`curves`]: Yield curve trait and implementations (FlatCurve, ZeroCurve)
//! - [`error`]: Market data error types (MarketDataError)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
//!
//! let discount = FlatCurve::new(0.05_f64);
//! let dividend = FlatCurve::new(0.02_f64);
//!
//! let df = discount.discount_factor(1.0).unwrap();
//! let q = dividend.zero_rate(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//! assert_eq!(q, 0.02);
//! ```

pub mod curves;
pub mod error;

pub use curves::{FlatCurve, YieldCurve, ZeroCurve};
pub use error::MarketDataError;
