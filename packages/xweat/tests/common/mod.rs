//! Common test utilities for xweat
//!
//! Synthetic embedding stores and word sets shared by the integration tests.

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use xweat::{InMemoryEmbeddingStore, WeatWordSets};

/// Flowers / insects against pleasant / unpleasant.
///
/// Axis 0 is "pleasant", axis 1 "unpleasant"; axes 2 and 3 give every word a
/// distinct direction.
pub fn flowers_insects_store() -> InMemoryEmbeddingStore {
    vec![
        ("flower", vec![1.0, 0.0, 0.2, 0.0]),
        ("rose", vec![1.0, 0.0, 0.0, 0.2]),
        ("tulip", vec![0.9, 0.1, 0.1, 0.1]),
        ("insect", vec![0.0, 1.0, 0.2, 0.0]),
        ("ant", vec![0.0, 1.0, 0.0, 0.2]),
        ("love", vec![1.0, 0.0, 0.1, 0.0]),
        ("joy", vec![1.0, 0.0, 0.0, 0.1]),
        ("hate", vec![0.0, 1.0, 0.1, 0.0]),
        ("filth", vec![0.0, 1.0, 0.0, 0.1]),
    ]
    .into_iter()
    .collect()
}

pub fn flowers_insects() -> WeatWordSets {
    WeatWordSets::new(
        ["flower", "rose"],
        ["insect", "ant"],
        ["love", "joy"],
        ["hate", "filth"],
    )
}

/// `n` target words per side and `m` attribute words per side with seeded
/// random vectors
pub fn random_case(seed: u64, n: usize, m: usize, dim: usize) -> (WeatWordSets, InMemoryEmbeddingStore) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let names = |prefix: &str, count: usize| -> Vec<String> {
        (0..count).map(|i| format!("{prefix}_{i}")).collect()
    };
    let sets = WeatWordSets::new(names("x", n), names("y", n), names("a", m), names("b", m));

    let store = sets
        .iter_words()
        .map(|w| {
            let vector: Vec<f64> = (0..dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
            (w.to_string(), vector)
        })
        .collect();
    (sets, store)
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "{} differs from {} by more than {}",
        actual,
        expected,
        tolerance
    );
}
