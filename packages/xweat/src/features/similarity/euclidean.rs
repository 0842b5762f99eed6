//! Euclidean-derived similarity

use super::{normalize_rows, SimilarityMatrix, SimilarityMetric};
use crate::errors::Result;
use crate::shared::models::Matrix;

/// `1 / (1 + ‖â − b̂‖)` over L2-normalized rows
///
/// Maps distances into (1/3, 1]; an approximation of a similarity, not a kernel.
#[derive(Debug, Clone, Copy, Default)]
pub struct EuclideanSimilarity;

impl EuclideanSimilarity {
    pub fn cross(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let norm_a = normalize_rows(a)?;
        let norm_b = normalize_rows(b)?;

        let mut out = Matrix::zeros(norm_a.rows(), norm_b.rows());
        for i in 0..norm_a.rows() {
            let x = norm_a.row(i);
            for j in 0..norm_b.rows() {
                let distance = x
                    .iter()
                    .zip(norm_b.row(j))
                    .map(|(p, q)| (p - q) * (p - q))
                    .sum::<f64>()
                    .sqrt();
                out.set(i, j, 1.0 / (1.0 + distance));
            }
        }
        Ok(out)
    }
}

impl SimilarityMetric for EuclideanSimilarity {
    fn name(&self) -> &'static str {
        "euclidean"
    }

    fn compute(&self, embeddings: &Matrix) -> Result<SimilarityMatrix> {
        Ok(SimilarityMatrix::new(Self::cross(embeddings, embeddings)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_rows_score_one() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 1.0, 2.0, 2.0]);
        let sims = EuclideanSimilarity.compute(&m).unwrap();
        assert!((sims.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((sims.get(1, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_rows() {
        // normalized distance between opposite unit vectors is 2
        let m = Matrix::from_vec(2, 1, vec![1.0, -3.0]);
        let sims = EuclideanSimilarity.compute(&m).unwrap();
        assert!((sims.get(0, 1) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(sims.get(0, 1), sims.get(1, 0));
    }

    #[test]
    fn test_orthogonal_rows() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 0.0, 0.0, 5.0]);
        let sims = EuclideanSimilarity.compute(&m).unwrap();
        let expected = 1.0 / (1.0 + 2f64.sqrt());
        assert!((sims.get(0, 1) - expected).abs() < 1e-12);
    }
}
