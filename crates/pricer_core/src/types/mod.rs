//! Core time and error types.
//!
//! This module provides:
//! - `time`: `Date` and the ACT/365 year fraction used to turn a
//!   valuation/expiry pair into a time in years
//! - `error`: Structured error types for pricing and date operations
//!
//! # Re-exports
//!
//! - [`Date`], [`year_fraction`] from `time`
//! - [`PricingError`], [`DateError`] from `error`

pub mod error;
pub mod time;

pub use error::{DateError, PricingError};
pub use time::{year_fraction, Date};
