//! Association scoring
//!
//! WEAT statistics over a precomputed [`SimilarityMatrix`]. Nothing here
//! recomputes a similarity; every value is a lookup.
//!
//! ```text
//! s(w, A, B)       = mean_a sim(w, a) − mean_b sim(w, b)
//! S(X, Y, A, B)    = Σ_x s(x, A, B) − Σ_y s(y, A, B)
//! d(X, Y, A, B)    = (mean_x s − mean_y s) / σ_{w ∈ X∪Y} s(w, A, B)
//! ```
//!
//! σ is the population standard deviation.
//!
//! [`SimilarityMatrix`]: crate::features::similarity::SimilarityMatrix

mod scorer;

pub use scorer::{population_std, AssociationScorer};
