//! Permutation test
//!
//! One-sided (upper tail) significance of the WEAT statistic under
//! exchangeable target labels.
//!
//! ```text
//! U = T1 ++ T2                       (2n positions; repeated words stay distinct)
//! total = C(2n, n)
//! exact:   every size-n subset Xi of U
//! sampled: `samples` distinct subsets, uniformly at random
//! p = |{ i : S(Xi, U \ Xi) > S(T1, T2) }| / |{ Xi }|
//! ```
//!
//! Per-position associations are computed once; each candidate is then a
//! pair of sums over the shared score vector, which makes candidates
//! independent and lets them fan out over rayon.

mod combinatorics;
mod engine;
mod sampler;

pub use combinatorics::{binomial, total_partitions, Combinations};
pub use engine::{PermutationMode, PermutationOutcome, PermutationSettings, PermutationTestEngine};
pub use sampler::SubsetSampler;
