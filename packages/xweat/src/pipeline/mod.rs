//! Test pipeline: single-test orchestration and suite runs

pub mod orchestrator;
pub mod outcome;
pub mod suite_runner;

pub use orchestrator::TestOrchestrator;
pub use outcome::{Diagnostics, TestWarning, WeatOutcome};
pub use suite_runner::{OovReport, SuiteRow, SuiteRunner};

use crate::config::WeatConfig;
use crate::errors::Result;
use crate::features::similarity::SimilarityKind;
use crate::shared::models::{EmbeddingStore, WeatWordSets};

/// Run one test with default settings for everything but the metric and
/// sample size (`None` = exact enumeration)
pub fn run_weat(
    sets: &WeatWordSets,
    store: &dyn EmbeddingStore,
    similarity: SimilarityKind,
    permutations: Option<usize>,
) -> Result<WeatOutcome> {
    let config = WeatConfig::default()
        .similarity(similarity)
        .permutations(permutations);
    TestOrchestrator::new(config).run(sets, store)
}
