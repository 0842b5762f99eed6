//! Row normalization

use crate::errors::{Result, WeatError};
use crate::shared::models::Matrix;

/// Divide every row by its L2 norm. Zero and non-finite norms are rejected.
pub fn normalize_rows(matrix: &Matrix) -> Result<Matrix> {
    let mut out = matrix.clone();
    for i in 0..out.rows() {
        let row = out.row_mut(i);
        let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
        if !norm.is_finite() {
            return Err(WeatError::NonFiniteNorm { row: i });
        }
        if norm == 0.0 {
            return Err(WeatError::ZeroNorm { row: i });
        }
        for x in row.iter_mut() {
            *x /= norm;
        }
    }
    Ok(out)
}
