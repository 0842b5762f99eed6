//! JSON report generation

use std::path::{Path, PathBuf};

use super::{SuiteReport, TestReport};
use crate::errors::Result;

pub struct JsonReporter;

impl JsonReporter {
    /// Write `<output_dir>/results.json`
    pub fn save(report: &SuiteReport, output_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir)?;
        let path = output_dir.join("results.json");
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(&path, json)?;
        Ok(path)
    }

    /// Write a single-test report to `path`
    pub fn save_test(report: &TestReport, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
