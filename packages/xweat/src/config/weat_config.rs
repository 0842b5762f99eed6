//! Test configuration

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use crate::features::permutation::PermutationSettings;
use crate::features::similarity::{CslsConfig, CslsWindow, SimilarityKind};

/// Settings for one WEAT run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatConfig {
    /// Similarity metric
    pub similarity: SimilarityKind,

    /// Distinct partitions to sample (None = exact enumeration)
    pub permutations: Option<usize>,

    /// CSLS neighbourhood and window (ignored by other metrics)
    pub csls: CslsConfig,

    /// Sampler seed (None = seeded from OS entropy)
    pub seed: Option<u64>,

    /// Sampling gives up after `permutations × factor` draws (1..=100000)
    pub max_sampling_attempts_factor: usize,

    /// Evaluate permutation candidates on the rayon pool
    pub parallel: bool,
}

impl Default for WeatConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl WeatConfig {
    /// Complete defaults for a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            similarity: SimilarityKind::Cosine,
            permutations: preset.permutations(),
            csls: CslsConfig::default(),
            seed: None,
            max_sampling_attempts_factor: 100,
            parallel: false,
        }
    }

    /// Builder: Set similarity
    pub fn similarity(mut self, v: SimilarityKind) -> Self {
        self.similarity = v;
        self
    }

    /// Builder: Set permutations
    pub fn permutations(mut self, v: Option<usize>) -> Self {
        self.permutations = v;
        self
    }

    /// Builder: Set CSLS k
    pub fn csls_k(mut self, v: usize) -> Self {
        self.csls.k = v;
        self
    }

    /// Builder: Set CSLS window
    pub fn csls_window(mut self, v: CslsWindow) -> Self {
        self.csls.window = v;
        self
    }

    /// Builder: Set seed
    pub fn seed(mut self, v: u64) -> Self {
        self.seed = Some(v);
        self
    }

    /// Builder: Set max_sampling_attempts_factor
    pub fn max_sampling_attempts_factor(mut self, v: usize) -> Self {
        self.max_sampling_attempts_factor = v;
        self
    }

    /// Builder: Set parallel
    pub fn parallel(mut self, v: bool) -> Self {
        self.parallel = v;
        self
    }

    /// Permutation engine view of this config
    pub fn permutation_settings(&self) -> PermutationSettings {
        PermutationSettings {
            samples: self.permutations,
            seed: self.seed,
            max_attempts_factor: self.max_sampling_attempts_factor,
            parallel: self.parallel,
        }
    }

    /// One-line summary for logs and report headers
    pub fn describe(&self) -> String {
        let sampling = match self.permutations {
            Some(n) => format!("{} sampled partitions", n),
            None => "exact enumeration".to_string(),
        };
        match self.similarity {
            SimilarityKind::Csls => format!("csls (k={}), {}", self.csls.k, sampling),
            other => format!("{}, {}", other, sampling),
        }
    }
}

impl Validatable for WeatConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.csls.k == 0 || self.csls.k > 1000 {
            return Err(ConfigError::range_with_hint(
                "csls.k",
                self.csls.k,
                1,
                1000,
                "CSLS averages over at least one neighbour",
            ));
        }

        if self.max_sampling_attempts_factor == 0 || self.max_sampling_attempts_factor > 100_000 {
            return Err(ConfigError::range_with_hint(
                "max_sampling_attempts_factor",
                self.max_sampling_attempts_factor,
                1,
                100_000,
                "Each requested partition needs at least one draw",
            ));
        }

        if self.permutations == Some(0) {
            return Err(ConfigError::Validation(
                "permutations must be positive; omit it for exact enumeration".to_string(),
            ));
        }

        Ok(())
    }
}
