//! Shared models

mod embedding_store;
mod matrix;
mod word_list;

pub use embedding_store::{EmbeddingStore, InMemoryEmbeddingStore};
pub use matrix::Matrix;
pub use word_list::{WeatWordSets, WordList, WordListRole};
