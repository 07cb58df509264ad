//! Curve abstractions for discounting and dividend yields.
//!
//! This module provides:
//! - [`YieldCurve`]: Generic trait for discount factor and rate calculations
//! - [`FlatCurve`]: Constant rate yield curve implementation
//! - [`ZeroCurve`]: Pillar-based zero rate curve

mod flat;
mod interpolated;
mod traits;

pub use flat::FlatCurve;
pub use interpolated::ZeroCurve;
pub use traits::YieldCurve;
