//! Sources of independent standard normal draws.
use rand::{distributions::Distribution, Rng};
use statrs::distribution::Normal;

/// Yields independent `N(0, 1)` values, one per call
pub trait NormalSource {
    /// Next draw
    fn draw(&mut self) -> f64;
}

/// Closures stand in for a sampler, e.g. to replay a fixed sequence
impl<F: FnMut() -> f64> NormalSource for F {
    fn draw(&mut self) -> f64 {
        self()
    }
}

/// Standard normal draws from a borrowed random number generator
#[derive(Debug)]
pub struct StandardNormals<'a, R: Rng + ?Sized> {
    rng: &'a mut R,
    norm: Normal,
}

impl<'a, R: Rng + ?Sized> StandardNormals<'a, R> {
    /// Draw through `rng` using the given standard normal
    pub fn new(rng: &'a mut R, norm: Normal) -> Self {
        Self { rng, norm }
    }
}

impl<R: Rng + ?Sized> NormalSource for StandardNormals<'_, R> {
    fn draw(&mut self) -> f64 {
        self.norm.sample(&mut *self.rng)
    }
}
