//! Closed-form touch option pricing.
//!
//! - [`touch`]: Rubinstein-Reiner / Haug binary barrier formulas for the
//!   twelve touch payoffs, and the [`AnalyticTouchPricer`] valuer
//! - [`distributions`]: standard normal CDF
//! - [`error`]: [`AnalyticalError`]
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: the kernel [`touch_price`] runs on `f64`
//!   and `f32`
//! - **Exhaustive dispatch**: each payoff maps to a hit or expiry block
//!   through a `match` with no fallback arm

pub mod distributions;
pub mod error;
pub mod touch;

pub use distributions::norm_cdf;
pub use error::AnalyticalError;
pub use touch::{check_barrier_position, touch_price, AnalyticTouchPricer, TouchParams};
