//! Sources of per-component tolerance factors.
//!
//! A practical evaluation asks its [`ToleranceSource`] for one multiplicative
//! factor per resistor. Production code draws them uniformly at random; tests
//! inject a seeded generator or a fixed sequence.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Supplies multiplicative tolerance factors.
pub trait ToleranceSource {
    /// Draw a factor in `[1 - tolerance, 1 + tolerance]`.
    fn factor(&mut self, tolerance: f64) -> f64;
}

/// Uniformly distributed tolerance factors from a random generator.
#[derive(Debug, Clone)]
pub struct UniformTolerance<R = SmallRng> {
    rng: R,
}

impl<R: Rng> UniformTolerance<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl UniformTolerance<SmallRng> {
    /// Generator seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ToleranceSource for UniformTolerance<R> {
    fn factor(&mut self, tolerance: f64) -> f64 {
        if tolerance <= 0.0 {
            return 1.0;
        }
        self.rng.gen_range(1.0 - tolerance..=1.0 + tolerance)
    }
}

/// Replays a fixed list of factors, wrapping around at the end.
///
/// The requested tolerance is ignored, so tests can assert exact results.
#[derive(Debug, Clone)]
pub struct FixedTolerance {
    factors: Vec<f64>,
    next: usize,
}

impl FixedTolerance {
    /// Replay `factors` in order. An empty list behaves like [`FixedTolerance::nominal`].
    pub fn new(factors: Vec<f64>) -> Self {
        let factors = if factors.is_empty() { vec![1.0] } else { factors };
        Self { factors, next: 0 }
    }

    /// Always return 1.0, i.e. every resistor at its nominal value.
    pub fn nominal() -> Self {
        Self::new(vec![1.0])
    }
}

impl ToleranceSource for FixedTolerance {
    fn factor(&mut self, _tolerance: f64) -> f64 {
        let value = self.factors[self.next];
        self.next = (self.next + 1) % self.factors.len();
        value
    }
}
