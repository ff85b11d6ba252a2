use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Which graph adaptation path enumeration runs on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdaptationPaths {
    /// The acyclic reduction.
    #[default]
    Acyclic,
    /// The graph before acyclic reduction.
    Raw,
}

impl FromStr for AdaptationPaths {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "acyclic" => Ok(Self::Acyclic),
            "raw" => Ok(Self::Raw),
            other => Err(ConfigError::InvalidValue {
                field: "solutions.adaptation_paths".to_string(),
                message: format!("expected 'acyclic' or 'raw', got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for AdaptationPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acyclic => f.write_str("acyclic"),
            Self::Raw => f.write_str("raw"),
        }
    }
}

/// What to do when an effect turns up in its own adaptation list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelfAdaptationPolicy {
    /// Remove the effect from its own list.
    #[default]
    Drop,
    /// Fail the pipeline.
    Reject,
}

/// Solution discovery configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolutionConfig {
    pub adaptation_paths: AdaptationPaths,
    pub self_adaptation: SelfAdaptationPolicy,
    /// Enumerate adaptation paths per effect on the rayon pool.
    pub parallel: bool,
}

impl Default for SolutionConfig {
    fn default() -> Self {
        Self {
            adaptation_paths: AdaptationPaths::default(),
            self_adaptation: SelfAdaptationPolicy::default(),
            parallel: defaults::DEFAULT_PARALLEL_SOLUTIONS,
        }
    }
}
