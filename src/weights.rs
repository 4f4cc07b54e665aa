//! Sources of edge weights for grid construction.
//!
//! A `GridGraph` draws one weight per edge while it is being built. Where those
//! weights come from is up to the caller: `UniformWeights` draws them from a
//! random number generator, and any `FnMut() -> Weight` closure works too,
//! which is handy for tests that want specific weights.

use graph::Weight;
use xorshift::XorShift128Plus;

use rand::{self, Rng, RngCore};

/// The smallest weight a grid edge may carry.
pub const MIN_WEIGHT: Weight = 1;

/// The largest weight a grid edge may carry.
pub const MAX_WEIGHT: Weight = 10;

/// Something that can produce edge weights, one at a time.
///
/// Each call should return a value in `MIN_WEIGHT ..= MAX_WEIGHT`; grid
/// construction rejects anything else.
pub trait WeightSource {
    fn next_weight(&mut self) -> Weight;
}

impl<F> WeightSource for F
    where F: FnMut() -> Weight
{
    fn next_weight(&mut self) -> Weight { self() }
}

/// Weights drawn uniformly from `MIN_WEIGHT ..= MAX_WEIGHT`.
#[derive(Clone, Debug)]
pub struct UniformWeights<R: RngCore> {
    rng: R
}

impl<R: RngCore> UniformWeights<R> {
    pub fn new(rng: R) -> UniformWeights<R> {
        UniformWeights { rng }
    }
}

impl UniformWeights<XorShift128Plus> {
    /// Uniform weights from a generator with the given seed. Two sources
    /// built from the same seed produce the same weights.
    pub fn seeded(seed: u64) -> UniformWeights<XorShift128Plus> {
        UniformWeights::new(XorShift128Plus::from_u64(seed))
    }

    /// Uniform weights from a generator seeded by the thread-local RNG.
    pub fn from_entropy() -> UniformWeights<XorShift128Plus> {
        let mut seeder = rand::thread_rng();
        UniformWeights::new(XorShift128Plus::new([seeder.gen(), seeder.gen()]))
    }
}

impl<R: RngCore> WeightSource for UniformWeights<R> {
    fn next_weight(&mut self) -> Weight {
        self.rng.gen_range(MIN_WEIGHT, MAX_WEIGHT + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::{UniformWeights, WeightSource, MAX_WEIGHT, MIN_WEIGHT};

    #[test]
    fn uniform_stays_in_range() {
        let mut source = UniformWeights::seeded(12345);
        let mut seen = [false; 11];
        for _ in 0..2000 {
            let w = source.next_weight();
            assert!(MIN_WEIGHT <= w && w <= MAX_WEIGHT, "weight {} out of range", w);
            seen[w as usize] = true;
        }

        // With two thousand draws, every value should turn up.
        assert!(seen[1..].iter().all(|&s| s));
    }

    #[test]
    fn same_seed_same_weights() {
        let mut a = UniformWeights::seeded(99);
        let mut b = UniformWeights::seeded(99);
        let a: Vec<_> = (0..50).map(|_| a.next_weight()).collect();
        let b: Vec<_> = (0..50).map(|_| b.next_weight()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn entropy_seeded_stays_in_range() {
        let mut source = UniformWeights::from_entropy();
        for _ in 0..100 {
            let w = source.next_weight();
            assert!(MIN_WEIGHT <= w && w <= MAX_WEIGHT);
        }
    }

    #[test]
    fn closures_are_sources() {
        let mut next = 0u32;
        let mut counter = || { next += 1; next };
        assert_eq!(counter.next_weight(), 1);
        assert_eq!(counter.next_weight(), 2);
    }
}
