//! Similarity engine
//!
//! One strategy per metric behind [`SimilarityMetric`]; [`SimilarityKind`]
//! selects the strategy at orchestration time. All metrics L2-normalize rows
//! first and return an N × N [`SimilarityMatrix`] that is computed once per
//! test and only read afterwards.
//!
//! | Metric | Definition | Symmetric |
//! |--------|------------|-----------|
//! | cosine | `â · b̂` | yes |
//! | euclidean | `1 / (1 + ‖â − b̂‖)` | yes |
//! | csls | `2·cos(a, b) − r(a) − r(b)` | only when a == b |

mod cosine;
mod csls;
mod euclidean;
mod metric;
mod normalize;

pub use cosine::CosineSimilarity;
pub use csls::{CslsConfig, CslsSimilarity, CslsWindow};
pub use euclidean::EuclideanSimilarity;
pub use metric::{SimilarityEngine, SimilarityKind, SimilarityMatrix, SimilarityMetric};
pub use normalize::normalize_rows;
