//! Touch option instrument definitions.
//!
//! - [`TouchPayoffType`]: closed set of the twelve single-barrier touch
//!   payoffs, with its axes [`BarrierDirection`], [`PaymentTiming`],
//!   [`KnockType`] and [`PayoffAsset`]
//! - [`TouchOption`]: immutable contract (expiry, payoff type, barrier,
//!   payment size)
//! - [`InstrumentError`]: construction and parsing failures
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::Date;
//! use pricer_models::instruments::{PaymentTiming, TouchOption, TouchPayoffType};
//!
//! let payoff: TouchPayoffType = "DOWN_AND_IN_CASH_AT_EXPIRY".parse().unwrap();
//! let expiry = Date::from_ymd(2025, 12, 19).unwrap();
//! let option = TouchOption::new(expiry, payoff, 95.0, 1_000.0).unwrap();
//!
//! assert_eq!(option.payoff_type().timing(), PaymentTiming::AtExpiry);
//! ```

mod error;
mod payoff;
mod touch;

pub use error::InstrumentError;
pub use payoff::{BarrierDirection, KnockType, PaymentTiming, PayoffAsset, TouchPayoffType};
pub use touch::TouchOption;
