//! Embedding matrix construction

use super::VocabIndex;
use crate::errors::{Result, WeatError};
use crate::shared::models::{EmbeddingStore, Matrix};

/// Projects a [`VocabIndex`] into an index-ordered embedding matrix
pub struct EmbeddingMatrixBuilder;

impl EmbeddingMatrixBuilder {
    /// Row `i` is the store's vector for `vocab.word(i)`.
    ///
    /// The dimensionality is taken from the first row; every other row must
    /// match it, and every component must be finite. A word missing from the
    /// store at this stage means the index was not built from this store.
    pub fn build(vocab: &VocabIndex, store: &dyn EmbeddingStore) -> Result<Matrix> {
        let Some(first) = vocab.words().first() else {
            return Ok(Matrix::zeros(0, 0));
        };
        let dim = store
            .get(first)
            .ok_or_else(|| WeatError::MissingEmbedding(first.clone()))?
            .len();
        if dim == 0 {
            return Err(WeatError::ZeroDimension);
        }

        let mut data = Vec::with_capacity(vocab.len() * dim);
        for word in vocab.words() {
            let vector = store
                .get(word)
                .ok_or_else(|| WeatError::MissingEmbedding(word.clone()))?;
            if vector.len() != dim {
                return Err(WeatError::DimensionMismatch {
                    word: word.clone(),
                    expected: dim,
                    found: vector.len(),
                });
            }
            if !vector.iter().all(|x| x.is_finite()) {
                return Err(WeatError::NonFiniteEmbedding { word: word.clone() });
            }
            data.extend_from_slice(vector);
        }

        Ok(Matrix::from_vec(vocab.len(), dim, data))
    }
}
