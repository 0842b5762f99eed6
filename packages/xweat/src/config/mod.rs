//! Configuration
//!
//! Two tiers:
//! - Preset: one name picks complete defaults (exact, fast, balanced, thorough)
//! - Override: builder methods or a YAML `overrides` block adjust single fields
//!
//! # Examples
//!
//! ```rust,ignore
//! use xweat::config::{Preset, WeatConfig};
//! use xweat::features::similarity::SimilarityKind;
//!
//! let config = WeatConfig::preset(Preset::Fast)
//!     .similarity(SimilarityKind::Csls)
//!     .seed(42);
//! config.validate()?;
//!
//! let suite = SuiteFileV1::from_yaml("suite.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod preset;
pub mod validation;
pub mod weat_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::{NameGender, SuiteFileV1, TestCaseSpec, WeatConfigPatch, WordSource};
pub use preset::Preset;
pub use validation::Validatable;
pub use weat_config::WeatConfig;
