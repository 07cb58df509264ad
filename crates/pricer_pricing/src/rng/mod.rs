//! # Random Number Generation
//!
//! Seeded normal variates for path simulation.
//!
//! - **Reproducibility**: every valuation reseeds from its configured seed
//! - **Efficiency**: batch generation into caller-owned `&mut [f64]` slices
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

pub use prng::PricerRng;
