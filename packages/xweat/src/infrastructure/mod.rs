//! File-backed adapters: embedding files and word-list files
//!
//! The core never touches the filesystem; everything here produces the
//! in-memory models it consumes.

pub mod vec_loader;
pub mod word_list_loader;

pub use vec_loader::{VecLoader, VecWriter, WordFilter};
pub use word_list_loader::WordListLoader;
