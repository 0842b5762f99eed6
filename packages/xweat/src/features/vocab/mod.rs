//! Vocabulary indexing and embedding-matrix construction
//!
//! - [`VocabIndexer`]: dense index over the in-vocabulary words of one test
//! - [`GroupIndices`]: the four word lists as index sequences, balanced
//! - [`EmbeddingMatrixBuilder`]: index-ordered embedding rows

mod embedding_matrix;
mod group_indices;
mod vocab_index;

pub use embedding_matrix::EmbeddingMatrixBuilder;
pub use group_indices::{GroupIndices, Truncation};
pub use vocab_index::{VocabBuild, VocabIndex, VocabIndexer};
