//! `.vec` embedding files
//!
//! Format: one `word v1 v2 ... vD` entry per line, single-space separated.
//! An optional fastText header line `count dim` is recognised and skipped.
//! Dimensionality is not checked here; the embedding matrix builder rejects
//! ragged stores.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use ahash::AHashSet;
use tracing::{debug, info};

use crate::errors::{Result, WeatError};
use crate::shared::models::{EmbeddingStore, InMemoryEmbeddingStore};

/// Keep only listed words while loading
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    words: AHashSet<String>,
    case_insensitive: bool,
}

impl WordFilter {
    pub fn new<I, S>(words: I, case_insensitive: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| {
                if case_insensitive {
                    w.as_ref().to_lowercase()
                } else {
                    w.as_ref().to_string()
                }
            })
            .collect();
        Self {
            words,
            case_insensitive,
        }
    }

    pub fn accepts(&self, word: &str) -> bool {
        if self.case_insensitive {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }
}

/// Reader for `.vec` text embeddings
#[derive(Debug, Clone, Default)]
pub struct VecLoader {
    filter: Option<WordFilter>,
}

impl VecLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Restrict loading to `filter`
    pub fn with_filter(mut self, filter: WordFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<InMemoryEmbeddingStore> {
        let path = path.as_ref();
        info!("Loading embeddings from {}", path.display());
        let file = File::open(path)?;
        let store = self.read(BufReader::new(file), path)?;
        info!("Loaded {} embeddings", store.len());
        Ok(store)
    }

    /// Parse from any reader; `origin` only labels parse errors
    pub fn read<R: BufRead>(&self, reader: R, origin: &Path) -> Result<InMemoryEmbeddingStore> {
        let mut store = InMemoryEmbeddingStore::new();
        let mut skipped = 0usize;

        for (i, line) in reader.lines().enumerate() {
            let line_no = i + 1;
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if line_no == 1 && is_header(&line) {
                debug!("Skipping header line '{}'", line);
                continue;
            }

            let mut fields = line.split(' ').filter(|f| !f.is_empty());
            let word = match fields.next() {
                Some(word) => word,
                None => continue,
            };
            if let Some(filter) = &self.filter {
                if !filter.accepts(word) {
                    skipped += 1;
                    continue;
                }
            }

            let vector = fields
                .map(|f| {
                    f.parse::<f64>().map_err(|e| {
                        WeatError::parse(origin, line_no, format!("invalid number '{}': {}", f, e))
                    })
                })
                .collect::<Result<Vec<f64>>>()?;
            store.insert(word, vector);
        }

        if skipped > 0 {
            debug!("Filtered out {} embeddings", skipped);
        }
        Ok(store)
    }
}

/// `count dim` with both fields unsigned integers
fn is_header(line: &str) -> bool {
    let fields: Vec<&str> = line.split_whitespace().collect();
    fields.len() == 2 && fields.iter().all(|f| f.parse::<u64>().is_ok())
}

/// Writer for `.vec` text embeddings (no header)
pub struct VecWriter;

impl VecWriter {
    /// Write `store` sorted by word, one entry per line
    pub fn save(store: &InMemoryEmbeddingStore, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        Self::write(store, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write<W: Write>(store: &InMemoryEmbeddingStore, writer: &mut W) -> Result<()> {
        let mut words: Vec<&str> = store.words().collect();
        words.sort_unstable();
        for word in words {
            write!(writer, "{}", word)?;
            if let Some(vector) = store.get(word) {
                for v in vector {
                    write!(writer, " {}", v)?;
                }
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}
