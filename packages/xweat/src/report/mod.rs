//! Report generation
//!
//! Writes results in multiple formats: JSON, Markdown, Terminal.

pub mod json;
pub mod markdown;
pub mod terminal;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use terminal::TerminalReporter;

use serde::{Deserialize, Serialize};

use crate::config::WeatConfig;
use crate::pipeline::{SuiteRow, WeatOutcome};

/// A single test run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestReport {
    pub test_id: String,
    /// Embedding file the test ran against
    pub embeddings: String,
    pub config: WeatConfig,
    pub outcome: WeatOutcome,
}

/// A suite run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub suite: String,
    pub embeddings: String,
    pub config: WeatConfig,
    pub rows: Vec<SuiteRow>,
}

impl SuiteReport {
    pub fn failed(&self) -> usize {
        self.rows.iter().filter(|r| r.is_error()).count()
    }
}

/// Fixed-precision cell for optional statistics
fn cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.4}", v),
        None => "-".to_string(),
    }
}
