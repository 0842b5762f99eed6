//! Vocabulary index
//!
//! Built once per test from the union of the four word lists, restricted to
//! words the embedding store knows. Indices are dense and start at 0; insertion
//! follows first occurrence so repeated runs produce the same layout.

use ahash::{AHashMap, AHashSet};
use tracing::warn;

use crate::shared::models::{EmbeddingStore, WeatWordSets};

/// Word → dense index mapping
#[derive(Debug, Clone, Default)]
pub struct VocabIndex {
    words: Vec<String>,
    positions: AHashMap<String, usize>,
}

impl VocabIndex {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.positions.get(word).copied()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.positions.contains_key(word)
    }

    /// Word at `index`
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// Words in index order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Convert words to indices, skipping words not in the index
    pub fn convert(&self, words: &[String]) -> Vec<usize> {
        words.iter().filter_map(|w| self.index_of(w)).collect()
    }

    fn push(&mut self, word: &str) {
        let index = self.words.len();
        self.words.push(word.to_string());
        self.positions.insert(word.to_string(), index);
    }
}

/// Result of vocabulary construction
#[derive(Debug, Clone)]
pub struct VocabBuild {
    pub index: VocabIndex,
    /// Distinct out-of-vocabulary words, in first-occurrence order
    pub oov_words: Vec<String>,
    /// Number of distinct words across all four lists
    pub union_size: usize,
}

/// Builds a [`VocabIndex`] for one test
pub struct VocabIndexer;

impl VocabIndexer {
    pub fn build(sets: &WeatWordSets, store: &dyn EmbeddingStore) -> VocabBuild {
        let mut index = VocabIndex::default();
        let mut seen: AHashSet<&str> = AHashSet::new();
        let mut oov_words = Vec::new();

        for word in sets.iter_words() {
            if !seen.insert(word) {
                continue;
            }
            if store.contains(word) {
                index.push(word);
            } else {
                warn!("Not in vocab: {}", word);
                oov_words.push(word.to_string());
            }
        }

        VocabBuild {
            index,
            oov_words,
            union_size: seen.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::InMemoryEmbeddingStore;

    fn store(words: &[&str]) -> InMemoryEmbeddingStore {
        words.iter().map(|w| (*w, vec![1.0, 0.0])).collect()
    }

    #[test]
    fn test_indices_are_dense_and_unique() {
        let sets = WeatWordSets::new(["rose", "tulip"], ["ant", "rose"], ["love"], ["hate"]);
        let build = VocabIndexer::build(&sets, &store(&["rose", "tulip", "ant", "love", "hate"]));

        assert_eq!(build.index.len(), 5);
        assert_eq!(build.union_size, 5);
        assert!(build.oov_words.is_empty());

        let mut indices: Vec<usize> = build
            .index
            .words()
            .iter()
            .map(|w| build.index.index_of(w).unwrap())
            .collect();
        indices.sort();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_first_occurrence_order() {
        let sets = WeatWordSets::new(["b", "a"], ["c"], ["a"], ["d"]);
        let build = VocabIndexer::build(&sets, &store(&["a", "b", "c", "d"]));
        assert_eq!(build.index.words(), &["b", "a", "c", "d"]);
        assert_eq!(build.index.word(1), "a");
    }

    #[test]
    fn test_oov_words_excluded_and_reported_once() {
        let sets = WeatWordSets::new(["rose", "zyx"], ["ant"], ["zyx"], ["hate"]);
        let build = VocabIndexer::build(&sets, &store(&["rose", "ant", "hate"]));

        assert_eq!(build.oov_words, vec!["zyx"]);
        assert!(!build.index.contains("zyx"));
        assert!(build.index.len() < build.union_size);
    }

    #[test]
    fn test_convert_skips_missing() {
        let sets = WeatWordSets::new(["a", "x", "a"], ["b"], ["c"], ["d"]);
        let build = VocabIndexer::build(&sets, &store(&["a", "b", "c", "d"]));
        let converted = build.index.convert(&sets.targets_1);
        // duplicates survive conversion; only the vocabulary is deduplicated
        assert_eq!(converted, vec![0, 0]);
    }
}
