//! Suite runner
//!
//! Runs every case of a suite file against one embedding store. Cases share
//! nothing mutable, so they fan out over rayon; a failing case becomes an
//! error row and the rest of the suite still runs.

use std::path::{Path, PathBuf};

use ahash::AHashSet;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::orchestrator::TestOrchestrator;
use super::outcome::WeatOutcome;
use crate::config::{SuiteFileV1, TestCaseSpec, WeatConfig};
use crate::errors::Result;
use crate::features::similarity::SimilarityKind;
use crate::infrastructure::WordListLoader;
use crate::shared::models::{EmbeddingStore, WeatWordSets};

/// One result row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteRow {
    pub test_id: String,
    pub similarity: SimilarityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_statistic: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p_value: Option<f64>,
    /// Warning summary (`NONE` when clean)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// `kind: message` of the fatal error, if the case failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SuiteRow {
    fn from_outcome(test_id: &str, outcome: &WeatOutcome) -> Self {
        Self {
            test_id: test_id.to_string(),
            similarity: outcome.diagnostics.similarity,
            test_statistic: Some(outcome.test_statistic),
            effect_size: Some(outcome.effect_size),
            p_value: Some(outcome.p_value),
            warning: Some(outcome.warning_code()),
            error: None,
        }
    }

    fn failed(test_id: &str, similarity: SimilarityKind, error: String) -> Self {
        Self {
            test_id: test_id.to_string(),
            similarity,
            test_statistic: None,
            effect_size: None,
            p_value: None,
            warning: None,
            error: Some(error),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Out-of-vocabulary share of one case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OovReport {
    pub test_id: String,
    /// Distinct words across the four lists
    pub distinct_words: usize,
    /// Distinct words missing from the store, in first-occurrence order
    pub oov_words: Vec<String>,
}

impl OovReport {
    pub fn compute(test_id: impl Into<String>, sets: &WeatWordSets, store: &dyn EmbeddingStore) -> Self {
        let mut seen = AHashSet::new();
        let mut oov_words = Vec::new();
        for word in sets.iter_words() {
            if seen.insert(word) && !store.contains(word) {
                oov_words.push(word.to_string());
            }
        }
        Self {
            test_id: test_id.into(),
            distinct_words: seen.len(),
            oov_words,
        }
    }

    /// Percentage of distinct words missing (0 for an empty case)
    pub fn percentage(&self) -> f64 {
        if self.distinct_words == 0 {
            return 0.0;
        }
        100.0 * self.oov_words.len() as f64 / self.distinct_words as f64
    }
}

/// Runs suite cases under a shared configuration
#[derive(Debug, Clone)]
pub struct SuiteRunner {
    config: WeatConfig,
    base_dir: PathBuf,
    lower: bool,
}

impl SuiteRunner {
    /// `base_dir` anchors relative `{ file: ... }` word sources
    pub fn new(config: WeatConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            base_dir: base_dir.into(),
            lower: false,
        }
    }

    /// Runner for a suite file loaded from `path`
    pub fn for_suite(suite: &SuiteFileV1, path: &Path) -> Result<Self> {
        let base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(Self::new(suite.config()?, base_dir))
    }

    /// Builder: Lower-case every word list before testing
    pub fn lower(mut self, v: bool) -> Self {
        self.lower = v;
        self
    }

    /// Word sets of a case, lower-cased if requested
    pub fn word_sets(&self, case: &TestCaseSpec) -> Result<WeatWordSets> {
        let sets = WordListLoader::load_case(case, &self.base_dir)?;
        Ok(if self.lower { sets.lowercased() } else { sets })
    }

    /// One row per case, in suite order
    pub fn run(&self, suite: &SuiteFileV1, store: &dyn EmbeddingStore) -> Vec<SuiteRow> {
        info!("Running {} test(s): {}", suite.tests.len(), self.config.describe());

        #[cfg(feature = "parallel")]
        let rows: Vec<SuiteRow> = suite
            .tests
            .par_iter()
            .map(|case| self.run_case(case, store))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let rows: Vec<SuiteRow> = suite.tests.iter().map(|case| self.run_case(case, store)).collect();

        let failed = rows.iter().filter(|r| r.is_error()).count();
        if failed > 0 {
            warn!("{} of {} test(s) failed", failed, rows.len());
        }
        rows
    }

    pub fn run_case(&self, case: &TestCaseSpec, store: &dyn EmbeddingStore) -> SuiteRow {
        let config = match case.similarity {
            Some(kind) => self.config.clone().similarity(kind),
            None => self.config.clone(),
        };
        let similarity = config.similarity;

        info!("Running {}", case.id);
        let result = self
            .word_sets(case)
            .and_then(|sets| TestOrchestrator::new(config).run(&sets, store));

        match result {
            Ok(outcome) => SuiteRow::from_outcome(&case.id, &outcome),
            Err(e) => {
                warn!("Test {} failed: {}", case.id, e);
                SuiteRow::failed(&case.id, similarity, format!("{}: {}", e.kind(), e))
            }
        }
    }

    /// OOV share of every case; unreadable word-list files are errors
    pub fn oov_reports(
        &self,
        suite: &SuiteFileV1,
        store: &dyn EmbeddingStore,
    ) -> Result<Vec<OovReport>> {
        suite
            .tests
            .iter()
            .map(|case| -> Result<OovReport> {
                let sets = self.word_sets(case)?;
                Ok(OovReport::compute(&case.id, &sets, store))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WordSource;
    use crate::shared::models::InMemoryEmbeddingStore;

    fn store() -> InMemoryEmbeddingStore {
        vec![
            ("flower", vec![1.0, 0.1]),
            ("rose", vec![0.9, 0.0]),
            ("insect", vec![0.1, 1.0]),
            ("ant", vec![0.0, 0.9]),
            ("love", vec![1.0, 0.0]),
            ("joy", vec![0.9, 0.1]),
            ("hate", vec![0.0, 1.0]),
            ("filth", vec![0.1, 0.9]),
        ]
        .into_iter()
        .collect()
    }

    fn inline(words: &[&str]) -> WordSource {
        WordSource::Inline(words.iter().map(|w| w.to_string()).collect())
    }

    fn case(id: &str, t1: &[&str], t2: &[&str], a1: &[&str], a2: &[&str]) -> TestCaseSpec {
        TestCaseSpec {
            id: id.to_string(),
            similarity: None,
            targets_1: inline(t1),
            targets_2: inline(t2),
            attributes_1: inline(a1),
            attributes_2: inline(a2),
        }
    }

    fn suite(tests: Vec<TestCaseSpec>) -> SuiteFileV1 {
        SuiteFileV1 {
            version: Some(1),
            preset: None,
            overrides: None,
            tests,
        }
    }

    #[test]
    fn test_failing_case_does_not_abort_suite() {
        let suite = suite(vec![
            case("ok", &["flower", "rose"], &["insect", "ant"], &["love", "joy"], &["hate", "filth"]),
            case("broken", &["flower"], &["insect"], &["love"], &["wrath"]),
            case("upper", &["Flower", "Rose"], &["Insect", "Ant"], &["Love"], &["Hate"]),
        ]);
        let rows = SuiteRunner::new(WeatConfig::default(), ".").run(&suite, &store());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].test_id, "ok");
        assert!(rows[0].test_statistic.unwrap() > 0.0);
        assert_eq!(rows[0].warning.as_deref(), Some("NONE"));

        assert_eq!(rows[1].test_id, "broken");
        assert!(rows[1].error.as_deref().unwrap().starts_with("empty_group"));
        assert!(rows[1].p_value.is_none());

        // case-sensitive store: every upper-case word is OOV
        assert!(rows[2].is_error());
    }

    #[test]
    fn test_lower_flag_lowercases_lists() {
        let suite = suite(vec![case(
            "upper",
            &["Flower", "Rose"],
            &["Insect", "Ant"],
            &["Love"],
            &["Hate"],
        )]);
        let rows = SuiteRunner::new(WeatConfig::default(), ".")
            .lower(true)
            .run(&suite, &store());
        assert!(!rows[0].is_error());
        assert_eq!(rows[0].warning.as_deref(), Some("NONE"));
    }

    #[test]
    fn test_case_similarity_override() {
        let mut spec = case("euclidean", &["flower"], &["insect"], &["love"], &["hate"]);
        spec.similarity = Some(SimilarityKind::Euclidean);
        let rows = SuiteRunner::new(WeatConfig::default(), ".").run(&suite(vec![spec]), &store());
        assert_eq!(rows[0].similarity, SimilarityKind::Euclidean);
    }

    #[test]
    fn test_oov_report() {
        let sets = WeatWordSets::new(
            ["flower", "rose", "tulip"],
            ["insect", "ant"],
            ["love", "peace"],
            ["hate", "flower"],
        );
        let report = OovReport::compute("t", &sets, &store());
        assert_eq!(report.distinct_words, 8);
        assert_eq!(report.oov_words, vec!["tulip", "peace"]);
        assert!((report.percentage() - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_oov_report() {
        let report = OovReport::compute("t", &WeatWordSets::default(), &store());
        assert_eq!(report.percentage(), 0.0);
    }
}
