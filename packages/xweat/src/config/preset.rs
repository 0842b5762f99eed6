//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Enumerate every partition (default)
    ///
    /// Feasible up to roughly n = 12 words per target group (C(24, 12) ≈ 2.7M).
    Exact,

    /// Quick look: 1 000 sampled partitions
    Fast,

    /// Everyday runs: 10 000 sampled partitions
    Balanced,

    /// Publication runs: 100 000 sampled partitions
    Thorough,
}

impl Preset {
    /// Sampled partition count; `None` means exact enumeration
    pub fn permutations(&self) -> Option<usize> {
        match self {
            Self::Exact => None,
            Self::Fast => Some(1_000),
            Self::Balanced => Some(10_000),
            Self::Thorough => Some(100_000),
        }
    }

    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "fast" => Ok(Self::Fast),
            "balanced" => Ok(Self::Balanced),
            "thorough" => Ok(Self::Thorough),
            _ => Err(ConfigError::UnknownPreset(s.to_string())),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fast => "fast",
            Self::Balanced => "balanced",
            Self::Thorough => "thorough",
        }
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::Exact
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
