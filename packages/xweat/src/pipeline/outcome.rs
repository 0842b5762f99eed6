//! Test outcome and non-fatal warnings

use serde::{Deserialize, Serialize};

use crate::features::permutation::PermutationMode;
use crate::features::similarity::SimilarityKind;
use crate::shared::models::WordListRole;

/// Non-fatal degradation of a test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestWarning {
    /// Words absent from the embedding store were excluded
    OovWordsDropped { words: Vec<String> },

    /// Trailing words were popped to balance a pair of groups
    GroupTruncated {
        role: WordListRole,
        dropped: Vec<String>,
    },

    /// The p-value was estimated from a sample of the partition space
    SampledNotExact {
        requested: usize,
        total_partitions: u128,
    },
}

impl TestWarning {
    pub fn code(&self) -> &'static str {
        match self {
            TestWarning::OovWordsDropped { .. } => "OOV_WORDS_DROPPED",
            TestWarning::GroupTruncated { .. } => "GROUP_TRUNCATED",
            TestWarning::SampledNotExact { .. } => "SAMPLED_NOT_EXACT",
        }
    }

    /// `NONE`, or the distinct codes of `warnings` joined by `; `
    pub fn summary(warnings: &[TestWarning]) -> String {
        if warnings.is_empty() {
            return "NONE".to_string();
        }
        let mut codes: Vec<&str> = Vec::new();
        for code in warnings.iter().map(TestWarning::code) {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        codes.join("; ")
    }
}

impl std::fmt::Display for TestWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestWarning::OovWordsDropped { words } => {
                write!(f, "{} word(s) not in vocabulary: {}", words.len(), words.join(", "))
            }
            TestWarning::GroupTruncated { role, dropped } => {
                write!(f, "{} truncated, dropped: {}", role, dropped.join(", "))
            }
            TestWarning::SampledNotExact {
                requested,
                total_partitions,
            } => write!(
                f,
                "p-value sampled from {} of {} partitions",
                requested, total_partitions
            ),
        }
    }
}

/// Bookkeeping of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub similarity: SimilarityKind,
    /// Distinct words across the four lists
    pub union_size: usize,
    /// Words found in the store
    pub vocab_size: usize,
    /// |T1| = |T2| after balancing
    pub target_size: usize,
    /// |A1| = |A2| after balancing
    pub attribute_size: usize,
    pub total_partitions: u128,
    pub evaluated_partitions: usize,
    pub mode: PermutationMode,
}

/// Result of one WEAT test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatOutcome {
    pub test_statistic: f64,
    pub effect_size: f64,
    pub p_value: f64,
    pub warnings: Vec<TestWarning>,
    pub diagnostics: Diagnostics,
}

impl WeatOutcome {
    /// Warning summary as used in result tables
    pub fn warning_code(&self) -> String {
        TestWarning::summary(&self.warnings)
    }

    pub fn is_exact(&self) -> bool {
        self.diagnostics.mode == PermutationMode::Exact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let oov = TestWarning::OovWordsDropped {
            words: vec!["zzz".into()],
        };
        let truncated = TestWarning::GroupTruncated {
            role: WordListRole::Target1,
            dropped: vec!["tulip".into()],
        };
        let sampled = TestWarning::SampledNotExact {
            requested: 10,
            total_partitions: 252,
        };
        assert_eq!(oov.code(), "OOV_WORDS_DROPPED");
        assert_eq!(truncated.code(), "GROUP_TRUNCATED");
        assert_eq!(sampled.code(), "SAMPLED_NOT_EXACT");
    }

    #[test]
    fn test_summary() {
        assert_eq!(TestWarning::summary(&[]), "NONE");

        let warnings = vec![
            TestWarning::GroupTruncated {
                role: WordListRole::Target1,
                dropped: vec!["a".into()],
            },
            TestWarning::GroupTruncated {
                role: WordListRole::Attribute2,
                dropped: vec!["b".into()],
            },
            TestWarning::OovWordsDropped {
                words: vec!["c".into()],
            },
        ];
        assert_eq!(
            TestWarning::summary(&warnings),
            "GROUP_TRUNCATED; OOV_WORDS_DROPPED"
        );
    }

    #[test]
    fn test_display() {
        let warning = TestWarning::GroupTruncated {
            role: WordListRole::Attribute1,
            dropped: vec!["joy".into(), "peace".into()],
        };
        assert_eq!(warning.to_string(), "attribute_1 truncated, dropped: joy, peace");
    }

    #[test]
    fn test_warning_json_shape() {
        let warning = TestWarning::SampledNotExact {
            requested: 100,
            total_partitions: 12_870,
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert_eq!(
            json,
            r#"{"sampled_not_exact":{"requested":100,"total_partitions":12870}}"#
        );
    }
}
