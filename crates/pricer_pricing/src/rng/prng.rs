//! Seeded pseudo-random number generator for path simulation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Monte Carlo random number generator.
///
/// Wraps `StdRng` seeded from a `u64`; the same seed always yields the
/// same normal stream, which is what makes a touch valuation reproducible.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(4242);
/// let mut buffer = vec![0.0; 64];
/// rng.fill_normal(&mut buffer);
///
/// let mut again = PricerRng::from_seed(4242);
/// assert_eq!(again.gen_normal(), buffer[0]);
/// ```
pub struct PricerRng {
    inner: StdRng,
    seed: u64,
}

impl PricerRng {
    /// Creates a generator initialised with `seed`.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Rewinds the stream to the start of the seed's sequence.
    #[inline]
    pub fn reseed(&mut self) {
        self.inner = StdRng::seed_from_u64(self.seed);
    }

    /// Draws one standard normal variate (Ziggurat, `rand_distr::StandardNormal`).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills `buffer` with standard normal variates.
    ///
    /// Allocation-free; an empty buffer is a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}

impl std::fmt::Debug for PricerRng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PricerRng").field("seed", &self.seed).finish()
    }
}
