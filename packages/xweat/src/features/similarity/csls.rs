//! Cross-domain similarity local scaling (CSLS)
//!
//! ```text
//! CSLS(a, b) = 2·cos(a, b) − r(a) − r(b)
//! r(x)       = mean of a window over x's sorted self-similarities
//! ```
//!
//! Each row of the self-similarity matrix is sorted ascending and a window of
//! up to `k` entries is averaged. The default window is the `[-k-1:-1]` slice:
//! it stops one short of the row maximum, which for normalized rows is the
//! diagonal (or a neighbour tied with it). [`CslsWindow::IncludeTop`] takes the
//! `[-k:]` slice instead. Windows are clamped at the row start, so rows with
//! fewer than `k + 1` entries average what is available; an empty window
//! contributes 0.

use serde::{Deserialize, Serialize};

use super::{normalize_rows, SimilarityMatrix, SimilarityMetric};
use crate::errors::Result;
use crate::shared::models::Matrix;

/// Local-density window policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CslsWindow {
    /// `sorted[-k-1:-1]`: skip the largest entry
    #[default]
    SkipTop,
    /// `sorted[-k:]`: include the largest entry
    IncludeTop,
}

/// CSLS parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CslsConfig {
    /// Neighbourhood size (1..=1000)
    pub k: usize,

    /// Window policy over sorted self-similarities
    pub window: CslsWindow,
}

impl Default for CslsConfig {
    fn default() -> Self {
        Self {
            k: 10,
            window: CslsWindow::SkipTop,
        }
    }
}

impl CslsConfig {
    /// Builder: Set k
    pub fn k(mut self, v: usize) -> Self {
        self.k = v;
        self
    }

    /// Builder: Set window
    pub fn window(mut self, v: CslsWindow) -> Self {
        self.window = v;
        self
    }
}

/// CSLS strategy
#[derive(Debug, Clone, Default)]
pub struct CslsSimilarity {
    config: CslsConfig,
}

impl CslsSimilarity {
    pub fn new(config: CslsConfig) -> Self {
        Self { config }
    }

    /// `r(x)` for every row of `normalized`
    pub fn local_density(&self, normalized: &Matrix) -> Vec<f64> {
        let self_sims = normalized.mul_transpose(normalized);
        self_sims
            .iter_rows()
            .map(|row| {
                let mut sorted = row.to_vec();
                sorted.sort_by(|a, b| a.total_cmp(b));
                let window = self.window_of(&sorted);
                if window.is_empty() {
                    0.0
                } else {
                    window.iter().sum::<f64>() / window.len() as f64
                }
            })
            .collect()
    }

    fn window_of<'a>(&self, sorted: &'a [f64]) -> &'a [f64] {
        let n = sorted.len();
        let k = self.config.k;
        match self.config.window {
            CslsWindow::SkipTop => {
                let end = n.saturating_sub(1);
                let start = n.saturating_sub(k + 1).min(end);
                &sorted[start..end]
            }
            CslsWindow::IncludeTop => &sorted[n.saturating_sub(k)..],
        }
    }

    /// CSLS between every row of `a` and every row of `b`.
    ///
    /// Densities of `a` come from `a`'s own neighbourhood and densities of `b`
    /// from `b`'s, so the result is not symmetric when `a != b`.
    pub fn cross(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let norm_a = normalize_rows(a)?;
        let norm_b = normalize_rows(b)?;
        let r_a = self.local_density(&norm_a);
        let r_b = self.local_density(&norm_b);

        let mut out = norm_a.mul_transpose(&norm_b);
        for i in 0..out.rows() {
            for j in 0..out.cols() {
                let cos = out.get(i, j);
                out.set(i, j, 2.0 * cos - r_a[i] - r_b[j]);
            }
        }
        Ok(out)
    }
}

impl SimilarityMetric for CslsSimilarity {
    fn name(&self) -> &'static str {
        "csls"
    }

    fn compute(&self, embeddings: &Matrix) -> Result<SimilarityMatrix> {
        Ok(SimilarityMatrix::new(self.cross(embeddings, embeddings)?))
    }
}
