use rand::Rng;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Return a number in the inclusive range `min..=max`.
    fn generate(&mut self, min: u32, max: u32) -> u32;
}

/// [`RandomSource`] backed by any `rand` generator.
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn generate(&mut self, min: u32, max: u32) -> u32 {
        self.rng.random_range(min..=max)
    }
}
