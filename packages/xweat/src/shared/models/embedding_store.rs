//! Embedding store port
//!
//! The store is supplied whole by a collaborator (a `.vec` loader, a model
//! server, a test fixture). The core only reads from it; absent keys are
//! out-of-vocabulary.

use std::collections::HashMap;
use std::hash::BuildHasher;

use ahash::AHashMap;

/// Read-only word → vector mapping
pub trait EmbeddingStore: Send + Sync {
    /// Vector for `word`, or `None` when the word is out of vocabulary
    fn get(&self, word: &str) -> Option<&[f64]>;

    fn contains(&self, word: &str) -> bool {
        self.get(word).is_some()
    }

    /// Number of stored words
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S: BuildHasher + Send + Sync> EmbeddingStore for HashMap<String, Vec<f64>, S> {
    fn get(&self, word: &str) -> Option<&[f64]> {
        HashMap::get(self, word).map(Vec::as_slice)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }
}

/// In-memory store backed by an `AHashMap`
///
/// Dimensionality is not checked on insert; the embedding matrix builder
/// rejects mismatched rows when a test actually uses them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmbeddingStore {
    vectors: AHashMap<String, Vec<f64>>,
}

impl InMemoryEmbeddingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vectors: AHashMap::with_capacity(capacity),
        }
    }

    /// Insert or replace a vector. Returns the previous vector, if any.
    pub fn insert(&mut self, word: impl Into<String>, vector: Vec<f64>) -> Option<Vec<f64>> {
        self.vectors.insert(word.into(), vector)
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.vectors.keys().map(String::as_str)
    }
}

impl EmbeddingStore for InMemoryEmbeddingStore {
    fn get(&self, word: &str) -> Option<&[f64]> {
        self.vectors.get(word).map(Vec::as_slice)
    }

    fn len(&self) -> usize {
        self.vectors.len()
    }
}

impl<W: Into<String>> FromIterator<(W, Vec<f64>)> for InMemoryEmbeddingStore {
    fn from_iter<I: IntoIterator<Item = (W, Vec<f64>)>>(iter: I) -> Self {
        Self {
            vectors: iter.into_iter().map(|(w, v)| (w.into(), v)).collect(),
        }
    }
}
