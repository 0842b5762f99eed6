/*
 * xweat - Word Embedding Association Test engine
 *
 * Feature-First Architecture:
 * - shared/          : Common models (word lists, embedding store, matrix)
 * - features/        : Vertical slices (vocab → similarity → association → permutation)
 * - pipeline/        : Orchestration (single test, suites)
 * - config/          : Presets, validation, YAML suite schema
 * - infrastructure/  : Embedding and word-list files
 * - report/          : JSON / Markdown / terminal output
 *
 * Performance:
 * - Similarity matrix computed once per test
 * - Rayon work-stealing over permutation candidates and suite cases
 */

// Crate-level lint configuration
#![allow(clippy::should_implement_trait)] // from_str naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::needless_range_loop)] // Range loop for matrix indexing

use tracing::{info, warn};

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules (vertical slices)
pub mod features;

/// Test orchestration
pub mod pipeline;

/// Configuration
pub mod config;

/// File-backed adapters
pub mod infrastructure;

/// Result reporters
pub mod report;

/// Error types
pub mod errors;

// Re-exports
pub use config::{Preset, SuiteFileV1, WeatConfig};
pub use errors::{Result, WeatError};
pub use features::similarity::SimilarityKind;
pub use pipeline::{run_weat, SuiteRunner, TestOrchestrator, TestWarning, WeatOutcome};
pub use shared::models::{EmbeddingStore, InMemoryEmbeddingStore, WeatWordSets, WordListRole};

// ═══════════════════════════════════════════════════════════════════════════
// Rayon
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the global Rayon pool with 75% of cores (once per process)
pub fn init_rayon() {
    use std::sync::Once;
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let num_cpus = num_cpus::get();
        let threads = std::cmp::max(1, (num_cpus * 3) / 4);

        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            Ok(()) => info!("Rayon pool: {} threads (75% of {})", threads, num_cpus),
            Err(e) => warn!("Rayon pool already initialized: {}", e),
        }
    });
}
