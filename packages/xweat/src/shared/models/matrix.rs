//! Dense row-major matrix

/// Dense row-major `f64` matrix
///
/// Used for both the embedding matrix (N × D) and the similarity matrix (N × N).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Build from a flat row-major buffer. `data.len()` must equal `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        assert_eq!(data.len(), rows * cols, "buffer does not match shape");
        Self { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        self.data[i * self.cols + j] = value;
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let cols = self.cols;
        &mut self.data[i * cols..(i + 1) * cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on zero-sized chunks
        let cols = self.cols.max(1);
        self.data.chunks_exact(cols).take(self.rows)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// `self · otherᵀ`
    pub fn mul_transpose(&self, other: &Matrix) -> Matrix {
        assert_eq!(self.cols, other.cols, "inner dimensions differ");
        let mut out = Matrix::zeros(self.rows, other.rows);
        for i in 0..self.rows {
            let a = self.row(i);
            for j in 0..other.rows {
                out.set(i, j, dot(a, other.row(j)));
            }
        }
        out
    }
}

#[inline]
pub(crate) fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_access() {
        let mut m = Matrix::zeros(2, 3);
        m.set(1, 2, 5.0);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(1, 2), 5.0);
        assert_eq!(m.row(1), &[0.0, 0.0, 5.0]);
    }

    #[test]
    fn test_mul_transpose() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
        let p = a.mul_transpose(&a);
        assert_eq!(p.as_slice(), &[5.0, 11.0, 11.0, 25.0]);
    }

    #[test]
    fn test_iter_rows() {
        let a = Matrix::from_vec(3, 1, vec![1.0, 2.0, 3.0]);
        let rows: Vec<&[f64]> = a.iter_rows().collect();
        assert_eq!(rows, vec![&[1.0][..], &[2.0][..], &[3.0][..]]);
    }

    #[test]
    #[should_panic(expected = "buffer does not match shape")]
    fn test_from_vec_shape_mismatch() {
        Matrix::from_vec(2, 2, vec![1.0]);
    }
}
