//! Single-test orchestration
//!
//! vocabulary → group balancing → embedding matrix → similarity matrix →
//! statistic + effect size → permutation p-value. No I/O beyond logging.

use tracing::{debug, info};

use super::outcome::{Diagnostics, TestWarning, WeatOutcome};
use crate::config::{Validatable, WeatConfig};
use crate::errors::Result;
use crate::features::association::AssociationScorer;
use crate::features::permutation::{PermutationMode, PermutationTestEngine};
use crate::features::similarity::SimilarityEngine;
use crate::features::vocab::{EmbeddingMatrixBuilder, GroupIndices, VocabIndexer};
use crate::shared::models::{EmbeddingStore, WeatWordSets};

/// Runs one WEAT test under a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct TestOrchestrator {
    config: WeatConfig,
}

impl TestOrchestrator {
    pub fn new(config: WeatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WeatConfig {
        &self.config
    }

    pub fn run(&self, sets: &WeatWordSets, store: &dyn EmbeddingStore) -> Result<WeatOutcome> {
        self.config.validate()?;
        let mut warnings = Vec::new();

        let vocab = VocabIndexer::build(sets, store);
        if !vocab.oov_words.is_empty() {
            warnings.push(TestWarning::OovWordsDropped {
                words: vocab.oov_words.clone(),
            });
        }

        let (groups, truncations) = GroupIndices::build(sets, &vocab.index)?;
        warnings.extend(truncations.into_iter().map(|t| TestWarning::GroupTruncated {
            role: t.role,
            dropped: t.dropped,
        }));

        let embeddings = EmbeddingMatrixBuilder::build(&vocab.index, store)?;
        debug!(
            "Embedding matrix {} x {}",
            embeddings.rows(),
            embeddings.cols()
        );
        let sims = SimilarityEngine::compute(self.config.similarity, &self.config.csls, &embeddings)?;

        let scorer = AssociationScorer::new(&sims);
        let (t1, t2) = (&groups.targets_1, &groups.targets_2);
        let (a1, a2) = (&groups.attributes_1, &groups.attributes_2);

        let test_statistic = scorer.differential_association(t1, t2, a1, a2);
        let effect_size = scorer.effect_size(t1, t2, a1, a2);
        info!("Test statistic: {}", test_statistic);
        info!("Effect size: {}", effect_size);

        let permutation = PermutationTestEngine::new(scorer, self.config.permutation_settings())
            .run(t1, t2, a1, a2)?;
        info!("P-value: {}", permutation.p_value);

        if permutation.mode == PermutationMode::Sampled {
            warnings.push(TestWarning::SampledNotExact {
                requested: permutation.evaluated,
                total_partitions: permutation.total_partitions,
            });
        }

        Ok(WeatOutcome {
            test_statistic,
            effect_size,
            p_value: permutation.p_value,
            warnings,
            diagnostics: Diagnostics {
                similarity: self.config.similarity,
                union_size: vocab.union_size,
                vocab_size: vocab.index.len(),
                target_size: groups.target_size(),
                attribute_size: groups.attribute_size(),
                total_partitions: permutation.total_partitions,
                evaluated_partitions: permutation.evaluated,
                mode: permutation.mode,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, Preset};
    use crate::errors::WeatError;
    use crate::features::similarity::SimilarityKind;
    use crate::shared::models::{InMemoryEmbeddingStore, WordListRole};

    /// Axis 0 pleasant, axis 1 unpleasant; small off-axis noise keeps rows distinct
    fn store() -> InMemoryEmbeddingStore {
        vec![
            ("flower", vec![1.0, 0.1, 0.0]),
            ("rose", vec![0.9, 0.0, 0.1]),
            ("tulip", vec![0.8, 0.1, 0.1]),
            ("insect", vec![0.1, 1.0, 0.0]),
            ("ant", vec![0.0, 0.9, 0.1]),
            ("love", vec![1.0, 0.0, 0.0]),
            ("joy", vec![0.9, 0.1, 0.0]),
            ("hate", vec![0.0, 1.0, 0.0]),
            ("filth", vec![0.1, 0.9, 0.0]),
        ]
        .into_iter()
        .collect()
    }

    fn flowers_insects() -> WeatWordSets {
        WeatWordSets::new(
            ["flower", "rose"],
            ["insect", "ant"],
            ["love", "joy"],
            ["hate", "filth"],
        )
    }

    #[test]
    fn test_clean_run_has_no_warnings() {
        let outcome = TestOrchestrator::default()
            .run(&flowers_insects(), &store())
            .unwrap();

        assert!(outcome.test_statistic > 0.0);
        assert!(outcome.effect_size > 0.0);
        assert_eq!(outcome.p_value, 0.0);
        assert!(outcome.warnings.is_empty());
        assert_eq!(outcome.warning_code(), "NONE");
        assert!(outcome.is_exact());
        assert_eq!(outcome.diagnostics.total_partitions, 6);
        assert_eq!(outcome.diagnostics.evaluated_partitions, 6);
        assert_eq!(outcome.diagnostics.vocab_size, 8);
    }

    #[test]
    fn test_oov_and_truncation_warnings() {
        let sets = WeatWordSets::new(
            ["flower", "rose", "tulip"],
            ["insect", "ant", "mosquito"],
            ["love", "joy"],
            ["hate", "filth"],
        );
        let outcome = TestOrchestrator::default().run(&sets, &store()).unwrap();

        assert_eq!(
            outcome.warnings,
            vec![
                TestWarning::OovWordsDropped {
                    words: vec!["mosquito".to_string()]
                },
                TestWarning::GroupTruncated {
                    role: WordListRole::Target1,
                    dropped: vec!["tulip".to_string()]
                },
            ]
        );
        assert_eq!(outcome.diagnostics.target_size, 2);
        assert_eq!(outcome.diagnostics.union_size, 10);
    }

    #[test]
    fn test_sampled_run_warns() {
        let sets = WeatWordSets::new(
            ["flower", "rose", "tulip"],
            ["insect", "ant", "hate"],
            ["love", "joy"],
            ["filth"],
        );
        let config = WeatConfig::preset(Preset::Exact)
            .permutations(Some(5))
            .seed(3);
        let outcome = TestOrchestrator::new(config).run(&sets, &store()).unwrap();

        assert!(!outcome.is_exact());
        assert!(outcome.warnings.contains(&TestWarning::SampledNotExact {
            requested: 5,
            total_partitions: 20,
        }));
    }

    #[test]
    fn test_all_metrics_agree_on_direction() {
        for kind in [
            SimilarityKind::Cosine,
            SimilarityKind::Euclidean,
            SimilarityKind::Csls,
        ] {
            let config = WeatConfig::default().similarity(kind).csls_k(2);
            let outcome = TestOrchestrator::new(config)
                .run(&flowers_insects(), &store())
                .unwrap();
            assert!(outcome.test_statistic > 0.0, "{kind}");
            assert_eq!(outcome.diagnostics.similarity, kind);
        }
    }

    #[test]
    fn test_empty_group_is_fatal() {
        let sets = WeatWordSets::new(["flower"], ["insect"], ["love"], ["wrath", "envy"]);
        let err = TestOrchestrator::default().run(&sets, &store()).unwrap_err();
        assert!(matches!(
            err,
            WeatError::EmptyGroup {
                role: WordListRole::Attribute2
            }
        ));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = WeatConfig::default().csls_k(0);
        let err = TestOrchestrator::new(config)
            .run(&flowers_insects(), &store())
            .unwrap_err();
        assert!(matches!(err, WeatError::Config(ConfigError::Range { .. })));
    }
}
