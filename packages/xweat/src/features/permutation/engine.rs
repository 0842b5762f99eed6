//! Permutation test engine

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::{total_partitions, Combinations, SubsetSampler};
use crate::errors::{Result, WeatError};
use crate::features::association::AssociationScorer;
use crate::shared::models::WordListRole;

/// Progress is logged every this many evaluated candidates
const PROGRESS_INTERVAL: usize = 100_000;

/// Exhaustive enumeration above this many partitions is logged as a warning
const LARGE_EXACT_THRESHOLD: u128 = 10_000_000;

/// How the partition space was covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermutationMode {
    /// Every size-n subset was evaluated
    Exact,
    /// A fixed number of distinct random subsets was evaluated
    Sampled,
}

impl PermutationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Sampled => "sampled",
        }
    }
}

impl std::fmt::Display for PermutationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Engine settings
#[derive(Debug, Clone, PartialEq)]
pub struct PermutationSettings {
    /// Distinct partitions to sample; `None` (or ≥ total) means exact
    pub samples: Option<usize>,
    /// RNG seed for sampled mode
    pub seed: Option<u64>,
    /// Draw budget is `samples × max_attempts_factor`
    pub max_attempts_factor: usize,
    /// Fan candidate evaluation out over the rayon pool
    pub parallel: bool,
}

impl Default for PermutationSettings {
    fn default() -> Self {
        Self {
            samples: None,
            seed: None,
            max_attempts_factor: 100,
            parallel: false,
        }
    }
}

/// Result of one permutation test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermutationOutcome {
    /// One-sided p-value in [0, 1]
    pub p_value: f64,
    /// Statistic of the identity partition (T1 | T2)
    pub observed: f64,
    /// C(2n, n), saturating
    pub total_partitions: u128,
    /// Number of partitions actually evaluated
    pub evaluated: usize,
    pub mode: PermutationMode,
}

/// One-sided permutation test over a shared association score vector
pub struct PermutationTestEngine<'a> {
    scorer: AssociationScorer<'a>,
    settings: PermutationSettings,
}

impl<'a> PermutationTestEngine<'a> {
    pub fn new(scorer: AssociationScorer<'a>, settings: PermutationSettings) -> Self {
        Self { scorer, settings }
    }

    /// Test `t1` vs `t2` against attributes `a1` / `a2`.
    ///
    /// Target groups must be balanced. Ties with the observed statistic do
    /// not count towards the p-value.
    pub fn run(
        &self,
        t1: &[usize],
        t2: &[usize],
        a1: &[usize],
        a2: &[usize],
    ) -> Result<PermutationOutcome> {
        debug_assert_eq!(t1.len(), t2.len(), "target groups must be balanced");
        if t1.is_empty() {
            return Err(WeatError::empty_group(WordListRole::Target1));
        }
        if t2.is_empty() {
            return Err(WeatError::empty_group(WordListRole::Target2));
        }

        let n = t1.len().min(t2.len());
        let total = total_partitions(n);
        info!("Number of possible permutations: {}", total);
        if total <= 1 {
            return Err(WeatError::DegeneratePermutationSpace { total });
        }

        // scores[p] = s(U[p], A1, A2) with U = T1 ++ T2
        let universe: Vec<usize> = t1.iter().chain(t2.iter()).copied().collect();
        let scores = self.scorer.associations(&universe, a1, a2);
        let identity: Vec<usize> = (0..n).collect();
        let observed = partition_statistic(&scores, &identity);

        let sample_count = self
            .settings
            .samples
            .filter(|&samples| (samples as u128) < total);

        let (mode, (evaluated, exceeding)) = match sample_count {
            None => {
                if total > LARGE_EXACT_THRESHOLD {
                    warn!(
                        "Exact permutation test over {} partitions; consider sampling",
                        total
                    );
                }
                let candidates = Combinations::new(universe.len(), n);
                (PermutationMode::Exact, self.count_exceeding(candidates, &scores, observed))
            }
            Some(samples) => {
                info!("Sampling {} of {} partitions", samples, total);
                let max_attempts = samples.saturating_mul(self.settings.max_attempts_factor);
                let subsets = SubsetSampler::from_seed(self.settings.seed).sample_distinct(
                    universe.len(),
                    n,
                    samples,
                    max_attempts,
                )?;
                (
                    PermutationMode::Sampled,
                    self.count_exceeding(subsets.into_iter(), &scores, observed),
                )
            }
        };

        let p_value = exceeding as f64 / evaluated as f64;
        debug!("p = {}/{} = {} ({})", exceeding, evaluated, p_value, mode);

        Ok(PermutationOutcome {
            p_value,
            observed,
            total_partitions: total,
            evaluated,
            mode,
        })
    }

    /// `(evaluated, count with statistic strictly above observed)`
    fn count_exceeding<I>(&self, candidates: I, scores: &[f64], observed: f64) -> (usize, usize)
    where
        I: Iterator<Item = Vec<usize>> + Send,
    {
        #[cfg(feature = "parallel")]
        if self.settings.parallel {
            return candidates
                .par_bridge()
                .map(|xi| (1, (partition_statistic(scores, &xi) > observed) as usize))
                .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));
        }

        let mut evaluated = 0usize;
        let mut exceeding = 0usize;
        for xi in candidates {
            evaluated += 1;
            if partition_statistic(scores, &xi) > observed {
                exceeding += 1;
            }
            if evaluated % PROGRESS_INTERVAL == 0 {
                debug!("Iteration {}", evaluated);
            }
        }
        (evaluated, exceeding)
    }
}

/// `Σ scores[Xi] − Σ scores[complement]`, `xi` sorted ascending.
///
/// Both sums run in ascending position order so that the identity partition
/// reproduces the observed statistic bit for bit.
fn partition_statistic(scores: &[f64], xi: &[usize]) -> f64 {
    let mut sum_x = 0.0f64;
    let mut sum_y = 0.0f64;
    let mut next = xi.iter().peekable();
    for (position, &score) in scores.iter().enumerate() {
        if next.peek() == Some(&&position) {
            next.next();
            sum_x += score;
        } else {
            sum_y += score;
        }
    }
    sum_x - sum_y
}
