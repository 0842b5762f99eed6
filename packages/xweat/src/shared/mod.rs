//! Shared module - Common types
//!
//! Types shared by every feature: word lists, the embedding store port and the
//! dense matrix used for embeddings and similarities.

pub mod models;

// Re-exports for convenience
pub use models::*;
