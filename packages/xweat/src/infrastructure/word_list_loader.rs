//! Word-list files and suite word sources

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::{NameGender, TestCaseSpec, WordSource};
use crate::errors::Result;
use crate::shared::models::{WeatWordSets, WordListRole};

const MALE_HEADER: &str = "Male:";
const FEMALE_HEADER: &str = "Female:";

/// Reads word lists: one word per line, trimmed, blank lines skipped
///
/// Name lists add structure on top: lines starting with `source` cite where
/// the names came from, and `Male:` / `Female:` headers split the file into
/// two sections. Names above the first header count as male.
pub struct WordListLoader;

impl WordListLoader {
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let words = Self::parse(&content);
        debug!("Read {} words from {}", words.len(), path.display());
        Ok(words)
    }

    pub fn parse(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }

    pub fn load_names(path: impl AsRef<Path>, gender: NameGender) -> Result<Vec<String>> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let names = Self::parse_names(&content, gender);
        debug!("Read {} {} names from {}", names.len(), gender, path.display());
        Ok(names)
    }

    /// Names of one section (or both), without citations or headers
    pub fn parse_names(content: &str, gender: NameGender) -> Vec<String> {
        let mut in_female = false;
        let mut names = Vec::new();

        for line in content.lines().map(str::trim) {
            if line.is_empty() || line.starts_with("source") {
                continue;
            }
            match line {
                MALE_HEADER => in_female = false,
                FEMALE_HEADER => in_female = true,
                name => {
                    let wanted = match gender {
                        NameGender::Both => true,
                        NameGender::Male => !in_female,
                        NameGender::Female => in_female,
                    };
                    if wanted {
                        names.push(name.to_string());
                    }
                }
            }
        }
        names
    }

    /// Inline words as given, file references read relative to `base_dir`
    pub fn resolve(source: &WordSource, base_dir: &Path) -> Result<Vec<String>> {
        match (source, source.path_in(base_dir)) {
            (WordSource::Inline(words), _) => Ok(words.clone()),
            (WordSource::Names { gender, .. }, Some(path)) => Self::load_names(path, *gender),
            (WordSource::File { .. }, Some(path)) => Self::load(path),
            (_, None) => Ok(Vec::new()),
        }
    }

    /// The four lists of a suite test case
    pub fn load_case(case: &TestCaseSpec, base_dir: &Path) -> Result<WeatWordSets> {
        let [t1, t2, a1, a2] = WordListRole::ALL.map(|role| Self::resolve(case.source(role), base_dir));
        Ok(WeatWordSets::new(t1?, t2?, a1?, a2?))
    }
}
