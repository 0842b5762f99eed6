//! Error types for xweat
//!
//! Recoverable degradations (OOV words, truncation, sampling) are not errors;
//! they travel as [`crate::pipeline::TestWarning`]s. Everything here is fatal.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::WordListRole;

/// Main error type for xweat operations
#[derive(Debug, Error)]
pub enum WeatError {
    /// Embedding rows do not share one dimensionality
    #[error("Embedding dimensionality mismatch for '{word}': expected {expected}, found {found}")]
    DimensionMismatch {
        word: String,
        expected: usize,
        found: usize,
    },

    /// First embedding row has no components
    #[error("Embedding vectors must have at least one component")]
    ZeroDimension,

    /// Row with zero L2 norm cannot be normalized
    #[error("Embedding row {row} has zero norm and cannot be normalized")]
    ZeroNorm { row: usize },

    /// Vector holds NaN or infinity
    #[error("Embedding for '{word}' contains a non-finite component")]
    NonFiniteEmbedding { word: String },

    /// Row whose L2 norm is NaN or overflows
    #[error("Embedding row {row} has a non-finite norm and cannot be normalized")]
    NonFiniteNorm { row: usize },

    /// Group emptied by OOV filtering
    #[error("Group {role} is empty after removing out-of-vocabulary words")]
    EmptyGroup { role: WordListRole },

    /// Permutation space with at most one partition
    #[error("Degenerate permutation space: {total} partition(s)")]
    DegeneratePermutationSpace { total: u128 },

    /// Unknown similarity metric name
    #[error("Unknown similarity metric '{0}'. Valid metrics: cosine, euclidean, csls")]
    UnknownMetric(String),

    /// Indexed word missing from the store (internal invariant violation)
    #[error("Indexed word '{0}' is missing from the embedding store")]
    MissingEmbedding(String),

    /// Distinct-subset collection did not converge
    #[error(
        "Sampling stalled: collected {collected} of {requested} distinct partitions after {attempts} draws"
    )]
    SamplingStalled {
        requested: usize,
        collected: usize,
        attempts: usize,
    },

    /// Malformed input file
    #[error("Parse error in {}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WeatError {
    /// Create a parse error for a file location
    pub fn parse(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        WeatError::Parse {
            path: path.into(),
            line,
            message: message.into(),
        }
    }

    /// Create an empty-group error
    pub fn empty_group(role: WordListRole) -> Self {
        WeatError::EmptyGroup { role }
    }

    /// Short machine-readable tag, used in suite result rows
    pub fn kind(&self) -> &'static str {
        match self {
            WeatError::DimensionMismatch { .. } => "dimension_mismatch",
            WeatError::ZeroDimension => "zero_dimension",
            WeatError::ZeroNorm { .. } => "zero_norm",
            WeatError::NonFiniteEmbedding { .. } => "non_finite_embedding",
            WeatError::NonFiniteNorm { .. } => "non_finite_norm",
            WeatError::EmptyGroup { .. } => "empty_group",
            WeatError::DegeneratePermutationSpace { .. } => "degenerate_permutation_space",
            WeatError::UnknownMetric(_) => "unknown_metric",
            WeatError::MissingEmbedding(_) => "missing_embedding",
            WeatError::SamplingStalled { .. } => "sampling_stalled",
            WeatError::Parse { .. } => "parse",
            WeatError::Config(_) => "config",
            WeatError::Io(_) => "io",
            WeatError::Serialization(_) => "serialization",
        }
    }
}

/// Result type alias for xweat operations
pub type Result<T> = std::result::Result<T, WeatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_display() {
        let err = WeatError::DimensionMismatch {
            word: "rose".to_string(),
            expected: 300,
            found: 299,
        };
        let msg = err.to_string();
        assert!(msg.contains("rose"));
        assert!(msg.contains("300"));
        assert!(msg.contains("299"));
        assert_eq!(err.kind(), "dimension_mismatch");
    }

    #[test]
    fn test_empty_group_display() {
        let err = WeatError::empty_group(WordListRole::Target2);
        assert_eq!(
            err.to_string(),
            "Group target_2 is empty after removing out-of-vocabulary words"
        );
    }

    #[test]
    fn test_parse_error_location() {
        let err = WeatError::parse("/tmp/emb.vec", 7, "invalid float 'x'");
        let msg = err.to_string();
        assert!(msg.contains("/tmp/emb.vec:7"));
        assert!(msg.contains("invalid float"));
    }

    #[test]
    fn test_io_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: WeatError = io_err.into();
        assert_eq!(err.kind(), "io");
    }

    #[test]
    fn test_result_propagation() {
        fn inner() -> Result<()> {
            Err(WeatError::UnknownMetric("manhattan".to_string()))
        }

        fn outer() -> Result<()> {
            inner()?;
            Ok(())
        }

        let err = outer().unwrap_err();
        assert!(matches!(err, WeatError::UnknownMetric(ref m) if m == "manhattan"));
    }
}
