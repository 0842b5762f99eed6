//! Permutation test benchmarks
//!
//! - Exact enumeration: C(2n, n) partitions, n = 6 and 8
//! - Sampled mode: 10 000 distinct partitions of n = 12
//! - Parallel vs sequential candidate evaluation
//! - Similarity matrix per metric

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use xweat::features::association::AssociationScorer;
use xweat::features::permutation::{total_partitions, PermutationSettings, PermutationTestEngine};
use xweat::features::similarity::{CslsConfig, SimilarityEngine, SimilarityKind, SimilarityMatrix};
use xweat::shared::models::Matrix;

/// `2n` targets followed by `2m` attributes, random rows
fn setup(n: usize, m: usize, dim: usize) -> (SimilarityMatrix, Vec<usize>, Vec<usize>, Vec<usize>, Vec<usize>) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let rows = 2 * n + 2 * m;
    let data: Vec<f64> = (0..rows * dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let embeddings = Matrix::from_vec(rows, dim, data);
    let sims = SimilarityEngine::compute(SimilarityKind::Cosine, &CslsConfig::default(), &embeddings).unwrap();

    let t1 = (0..n).collect();
    let t2 = (n..2 * n).collect();
    let a1 = (2 * n..2 * n + m).collect();
    let a2 = (2 * n + m..rows).collect();
    (sims, t1, t2, a1, a2)
}

// ============================================================================
// Exact enumeration
// ============================================================================

fn bench_exact(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact");

    for n in [6usize, 8] {
        let (sims, t1, t2, a1, a2) = setup(n, 8, 300);
        group.throughput(Throughput::Elements(total_partitions(n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                let settings = PermutationSettings {
                    parallel: false,
                    ..Default::default()
                };
                let outcome = PermutationTestEngine::new(AssociationScorer::new(&sims), settings)
                    .run(&t1, &t2, &a1, &a2)
                    .unwrap();
                black_box(outcome)
            });
        });
    }

    group.finish();
}

// ============================================================================
// Sampled mode
// ============================================================================

fn bench_sampled(c: &mut Criterion) {
    let (sims, t1, t2, a1, a2) = setup(12, 8, 300);
    let mut group = c.benchmark_group("sampled");
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("n12_10k", |b| {
        b.iter(|| {
            let settings = PermutationSettings {
                samples: Some(10_000),
                seed: Some(7),
                parallel: false,
                ..Default::default()
            };
            let outcome = PermutationTestEngine::new(AssociationScorer::new(&sims), settings)
                .run(&t1, &t2, &a1, &a2)
                .unwrap();
            black_box(outcome)
        });
    });

    group.finish();
}

// ============================================================================
// Parallel vs sequential
// ============================================================================

fn bench_parallel(c: &mut Criterion) {
    let (sims, t1, t2, a1, a2) = setup(9, 8, 300);
    let mut group = c.benchmark_group("exact_n9");
    group.sample_size(20);

    for parallel in [false, true] {
        let label = if parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| {
                let settings = PermutationSettings {
                    parallel,
                    ..Default::default()
                };
                let outcome = PermutationTestEngine::new(AssociationScorer::new(&sims), settings)
                    .run(&t1, &t2, &a1, &a2)
                    .unwrap();
                black_box(outcome)
            });
        });
    }

    group.finish();
}

// ============================================================================
// Similarity matrix
// ============================================================================

fn bench_similarity(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let rows = 64;
    let dim = 300;
    let data: Vec<f64> = (0..rows * dim).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let embeddings = Matrix::from_vec(rows, dim, data);
    let csls = CslsConfig::default();

    let mut group = c.benchmark_group("similarity_64x300");
    for kind in [SimilarityKind::Cosine, SimilarityKind::Euclidean, SimilarityKind::Csls] {
        group.bench_with_input(BenchmarkId::from_parameter(kind), &kind, |b, &kind| {
            b.iter(|| black_box(SimilarityEngine::compute(kind, &csls, &embeddings).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact, bench_sampled, bench_parallel, bench_similarity);
criterion_main!(benches);
