//! Utils to make benchmarking easier

use rand::distributions::{Distribution, Standard, Uniform};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::types::NativeType;

/// Returns fixed seedable RNG
pub fn seedable_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

/// Creates a random (but fixed-seeded) vector of a given size
pub fn create_values<T>(size: usize) -> Vec<T>
where
    T: NativeType,
    Standard: Distribution<T>,
{
    let mut rng = seedable_rng();
    (0..size).map(|_| rng.gen()).collect()
}

/// Creates a random (but fixed-seeded) vector of a given size whose values
/// are drawn from `0..max`, so that a fraction of them match keys drawn from the same range
pub fn create_values_in_range(size: usize, max: u64, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let range = Uniform::new(0, max.max(1));
    (0..size).map(|_| range.sample(&mut rng)).collect()
}

/// Creates `size` distinct keys (`0..size` shuffled) and `size` random replacements
pub fn create_replacement(size: usize) -> (Vec<u64>, Vec<u64>) {
    use rand::seq::SliceRandom;

    let mut rng = seedable_rng();
    let mut keys = (0..size as u64).collect::<Vec<_>>();
    keys.shuffle(&mut rng);
    let replacements = (0..size).map(|_| rng.gen()).collect();
    (keys, replacements)
}
