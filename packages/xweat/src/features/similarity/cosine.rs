//! Cosine similarity

use super::{normalize_rows, SimilarityMatrix, SimilarityMetric};
use crate::errors::Result;
use crate::shared::models::Matrix;

/// `cos(a, b) = â · b̂`
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineSimilarity;

impl CosineSimilarity {
    /// Cosine between every row of `a` and every row of `b`
    pub fn cross(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let norm_a = normalize_rows(a)?;
        let norm_b = normalize_rows(b)?;
        Ok(norm_a.mul_transpose(&norm_b))
    }
}

impl SimilarityMetric for CosineSimilarity {
    fn name(&self) -> &'static str {
        "cosine"
    }

    fn compute(&self, embeddings: &Matrix) -> Result<SimilarityMatrix> {
        Ok(SimilarityMatrix::new(Self::cross(embeddings, embeddings)?))
    }
}
