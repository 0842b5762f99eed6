//! Metric selection and the similarity matrix type

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{CosineSimilarity, CslsConfig, CslsSimilarity, EuclideanSimilarity};
use crate::errors::{Result, WeatError};
use crate::shared::models::Matrix;

/// Square similarity matrix over vocabulary indices
///
/// `get(i, j)` is symmetric for cosine and euclidean. CSLS is direction
/// sensitive in general.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix(Matrix);

impl SimilarityMatrix {
    pub fn new(matrix: Matrix) -> Self {
        debug_assert_eq!(matrix.rows(), matrix.cols());
        Self(matrix)
    }

    /// Number of vocabulary entries (N)
    pub fn size(&self) -> usize {
        self.0.rows()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.0.get(i, j)
    }

    pub fn row(&self, i: usize) -> &[f64] {
        self.0.row(i)
    }

    pub fn as_matrix(&self) -> &Matrix {
        &self.0
    }
}

/// Similarity strategy
pub trait SimilarityMetric: Send + Sync {
    /// Metric name as accepted by [`SimilarityKind::from_str`]
    fn name(&self) -> &'static str;

    /// Pairwise similarities between all rows of `embeddings`
    fn compute(&self, embeddings: &Matrix) -> Result<SimilarityMatrix>;
}

/// Selectable metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityKind {
    #[default]
    Cosine,
    /// `1 / (1 + distance)` over normalized rows; bounded and similarity-like,
    /// but not a true kernel
    Euclidean,
    /// Cross-domain similarity local scaling (hubness correction)
    Csls,
}

impl SimilarityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityKind::Cosine => "cosine",
            SimilarityKind::Euclidean => "euclidean",
            SimilarityKind::Csls => "csls",
        }
    }
}

impl FromStr for SimilarityKind {
    type Err = WeatError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "cosine" => Ok(SimilarityKind::Cosine),
            "euclidean" => Ok(SimilarityKind::Euclidean),
            "csls" => Ok(SimilarityKind::Csls),
            other => Err(WeatError::UnknownMetric(other.to_string())),
        }
    }
}

impl std::fmt::Display for SimilarityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Builds the strategy for a [`SimilarityKind`]
pub struct SimilarityEngine;

impl SimilarityEngine {
    pub fn metric(kind: SimilarityKind, csls: &CslsConfig) -> Box<dyn SimilarityMetric> {
        match kind {
            SimilarityKind::Cosine => Box::new(CosineSimilarity),
            SimilarityKind::Euclidean => Box::new(EuclideanSimilarity),
            SimilarityKind::Csls => Box::new(CslsSimilarity::new(csls.clone())),
        }
    }

    /// Compute the similarity matrix once for a test
    pub fn compute(
        kind: SimilarityKind,
        csls: &CslsConfig,
        embeddings: &Matrix,
    ) -> Result<SimilarityMatrix> {
        Self::metric(kind, csls).compute(embeddings)
    }
}
