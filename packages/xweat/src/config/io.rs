//! Suite file I/O (YAML)
//!
//! Schema types only; word-list files referenced by `{ file: ... }` are read
//! by the infrastructure loader, relative to the suite file's directory.
//!
//! ```yaml
//! version: 1
//! preset: fast
//! overrides:
//!   similarity: csls
//!   seed: 42
//! tests:
//!   - id: flowers_insects
//!     targets_1: [flower, rose]
//!     targets_2: { file: lists/insects.txt }
//!     attributes_1: [love, joy]
//!     attributes_2: [hate, filth]
//!   - id: migrant_names
//!     targets_1: { names: lists/german_names.txt, gender: female }
//!     targets_2: { names: lists/turkish_names.txt, gender: female }
//!     attributes_1: [love, joy]
//!     attributes_2: [hate, filth]
//! ```

use std::path::{Path, PathBuf};

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use super::validation::Validatable;
use super::weat_config::WeatConfig;
use crate::features::similarity::{CslsWindow, SimilarityKind};
use crate::shared::models::WordListRole;

/// Supported suite schema versions
const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuiteFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Base preset (default: exact)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Field overrides applied on top of the preset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<WeatConfigPatch>,

    /// Test cases, run in order
    pub tests: Vec<TestCaseSpec>,
}

/// All-optional view of [`WeatConfig`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeatConfigPatch {
    pub similarity: Option<SimilarityKind>,
    pub permutations: Option<usize>,
    pub csls_k: Option<usize>,
    pub csls_window: Option<CslsWindow>,
    pub seed: Option<u64>,
    pub max_sampling_attempts_factor: Option<usize>,
    pub parallel: Option<bool>,
}

impl WeatConfigPatch {
    /// Apply set fields over `base`
    pub fn apply(&self, mut base: WeatConfig) -> WeatConfig {
        if let Some(v) = self.similarity {
            base.similarity = v;
        }
        if let Some(v) = self.permutations {
            base.permutations = Some(v);
        }
        if let Some(v) = self.csls_k {
            base.csls.k = v;
        }
        if let Some(v) = self.csls_window {
            base.csls.window = v;
        }
        if let Some(v) = self.seed {
            base.seed = Some(v);
        }
        if let Some(v) = self.max_sampling_attempts_factor {
            base.max_sampling_attempts_factor = v;
        }
        if let Some(v) = self.parallel {
            base.parallel = v;
        }
        base
    }
}

/// One test case of a suite
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TestCaseSpec {
    /// Unique id, used as the result row key
    pub id: String,

    /// Per-case metric, overriding the suite config
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<SimilarityKind>,

    pub targets_1: WordSource,
    pub targets_2: WordSource,
    pub attributes_1: WordSource,
    pub attributes_2: WordSource,
}

impl TestCaseSpec {
    pub fn source(&self, role: WordListRole) -> &WordSource {
        match role {
            WordListRole::Target1 => &self.targets_1,
            WordListRole::Target2 => &self.targets_2,
            WordListRole::Attribute1 => &self.attributes_1,
            WordListRole::Attribute2 => &self.attributes_2,
        }
    }
}

/// Section of a name-list file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameGender {
    /// Every name, both sections
    #[default]
    Both,
    /// Names before the `Female:` header
    Male,
    /// Names after the `Female:` header
    Female,
}

impl NameGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameGender::Both => "both",
            NameGender::Male => "male",
            NameGender::Female => "female",
        }
    }
}

impl std::fmt::Display for NameGender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Word list given inline, as a plain word file, or as a sectioned name list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WordSource {
    Inline(Vec<String>),
    File {
        file: PathBuf,
    },
    /// `source...` lines and `Male:` / `Female:` headers are not names
    Names {
        names: PathBuf,
        #[serde(default)]
        gender: NameGender,
    },
}

impl WordSource {
    /// File path resolved against `base_dir`; `None` for inline lists
    pub fn path_in(&self, base_dir: &Path) -> Option<PathBuf> {
        let path = match self {
            WordSource::Inline(_) => return None,
            WordSource::File { file } => file,
            WordSource::Names { names, .. } => names,
        };
        if path.is_absolute() {
            Some(path.clone())
        } else {
            Some(base_dir.join(path))
        }
    }
}

impl SuiteFileV1 {
    /// Load and check a suite file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&content)
    }

    /// Parse and check suite YAML
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let suite: SuiteFileV1 = serde_yaml::from_str(content)?;

        // Version check
        match suite.version {
            None => return Err(ConfigError::MissingVersion),
            Some(found) if !SUPPORTED_VERSIONS.contains(&found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                });
            }
            Some(_) => {}
        }

        let mut seen = AHashSet::new();
        for test in &suite.tests {
            if !seen.insert(test.id.as_str()) {
                return Err(ConfigError::DuplicateTestId(test.id.clone()));
            }
        }

        // Surface preset and range errors at load time
        suite.config()?;
        Ok(suite)
    }

    /// Preset defaults with overrides applied, validated
    pub fn config(&self) -> ConfigResult<WeatConfig> {
        let preset = match &self.preset {
            Some(name) => Preset::from_str(name)?,
            None => Preset::default(),
        };

        let base = WeatConfig::preset(preset);
        let config = match &self.overrides {
            Some(patch) => patch.apply(base),
            None => base,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
