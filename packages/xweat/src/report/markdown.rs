//! Markdown report generation

use std::path::{Path, PathBuf};

use super::{cell, SuiteReport};
use crate::errors::Result;

pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Write `<output_dir>/report.md`
    pub fn save(report: &SuiteReport, output_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;
        let path = output_dir.join("report.md");
        std::fs::write(&path, Self::generate(report))?;
        Ok(path)
    }

    pub fn generate(report: &SuiteReport) -> String {
        let rows = report
            .rows
            .iter()
            .map(|row| {
                format!(
                    "| {} | {} | {} | {} | {} | {} |",
                    row.test_id,
                    row.similarity,
                    cell(row.test_statistic),
                    cell(row.effect_size),
                    cell(row.p_value),
                    row.error
                        .as_deref()
                        .or(row.warning.as_deref())
                        .unwrap_or("-"),
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            r#"# WEAT Report: {}

**Embeddings**: {}
**Configuration**: {}
**Tests**: {} ({} failed)

## Results

| Test | Similarity | Statistic | Effect size | p-value | Warning / error |
|------|------------|-----------|-------------|---------|-----------------|
{}
"#,
            report.suite,
            report.embeddings,
            report.config.describe(),
            report.rows.len(),
            report.failed(),
            rows
        )
    }
}
