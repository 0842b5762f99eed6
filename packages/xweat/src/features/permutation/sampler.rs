//! Distinct random subset sampler
//!
//! Rejection-based accumulation: draw a random permutation of the universe,
//! keep its first `size` positions (sorted, so equal sets compare equal) and
//! discard repeats until `count` distinct subsets are collected. Draws are
//! bounded by `max_attempts`; collection slows down sharply as `count`
//! approaches the size of the partition space.

use ahash::AHashSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::errors::{Result, WeatError};

/// Uniform sampler of distinct size-`k` subsets of `0..n`
pub struct SubsetSampler<R: Rng = ChaCha8Rng> {
    rng: R,
}

impl SubsetSampler<ChaCha8Rng> {
    /// Seeded sampler for reproducible p-values; entropy-seeded otherwise
    pub fn from_seed(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }
}

impl<R: Rng> SubsetSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Collect `count` distinct subsets, returned in lexicographic order
    pub fn sample_distinct(
        &mut self,
        universe: usize,
        size: usize,
        count: usize,
        max_attempts: usize,
    ) -> Result<Vec<Vec<usize>>> {
        let mut pool: Vec<usize> = (0..universe).collect();
        let mut seen: AHashSet<Vec<usize>> = AHashSet::with_capacity(count);
        let mut attempts = 0usize;

        while seen.len() < count {
            if attempts >= max_attempts {
                return Err(WeatError::SamplingStalled {
                    requested: count,
                    collected: seen.len(),
                    attempts,
                });
            }
            attempts += 1;

            let (chosen, _) = pool.partial_shuffle(&mut self.rng, size);
            let mut candidate = chosen.to_vec();
            candidate.sort_unstable();
            seen.insert(candidate);
        }

        // set iteration order is per-process random
        let mut subsets: Vec<Vec<usize>> = seen.into_iter().collect();
        subsets.sort_unstable();
        Ok(subsets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::permutation::Combinations;

    #[test]
    fn test_subsets_are_distinct_sorted_and_sized() {
        let mut sampler = SubsetSampler::from_seed(Some(7));
        let subsets = sampler.sample_distinct(10, 5, 100, 10_000).unwrap();

        assert_eq!(subsets.len(), 100);
        let unique: AHashSet<&Vec<usize>> = subsets.iter().collect();
        assert_eq!(unique.len(), 100);
        for subset in &subsets {
            assert_eq!(subset.len(), 5);
            assert!(subset.windows(2).all(|w| w[0] < w[1]));
            assert!(subset.iter().all(|&p| p < 10));
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = SubsetSampler::from_seed(Some(42))
            .sample_distinct(8, 4, 20, 1_000)
            .unwrap();
        let b = SubsetSampler::from_seed(Some(42))
            .sample_distinct(8, 4, 20, 1_000)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_subsets_come_back_in_lexicographic_order() {
        let subsets = SubsetSampler::from_seed(Some(11))
            .sample_distinct(12, 6, 300, 30_000)
            .unwrap();
        assert_eq!(subsets.len(), 300);
        assert!(subsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_full_space_can_be_collected() {
        // C(4, 2) = 6; generous attempt budget
        let subsets = SubsetSampler::from_seed(Some(1))
            .sample_distinct(4, 2, 6, 10_000)
            .unwrap();
        assert_eq!(subsets, Combinations::new(4, 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_stall_is_reported() {
        // only 6 distinct subsets exist
        let err = SubsetSampler::from_seed(Some(3))
            .sample_distinct(4, 2, 7, 500)
            .unwrap_err();
        assert!(matches!(
            err,
            WeatError::SamplingStalled {
                requested: 7,
                collected: 6,
                attempts: 500
            }
        ));
    }
}
