//! Top-level climind configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    defaults, AdaptationPaths, ObservabilityConfig, OutputConfig, SolutionConfig,
    VocabularyConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CLIMIND_*`)
/// 3. Explicit config file, or `climind.toml` in the working directory
/// 4. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ClimindConfig {
    pub vocabulary: VocabularyConfig,
    pub solutions: SolutionConfig,
    pub output: OutputConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub root_concept: Option<String>,
    pub adaptation_paths: Option<AdaptationPaths>,
    pub pretty: Option<bool>,
    pub log_level: Option<String>,
    pub log_json: Option<bool>,
}

impl ClimindConfig {
    /// Load configuration with layered resolution.
    ///
    /// `config_path` names an explicit file that must exist. Without one,
    /// `climind.toml` in `working_dir` is read when present.
    pub fn load(
        working_dir: &Path,
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => {
                let project = working_dir.join(defaults::DEFAULT_CONFIG_FILENAME);
                if project.exists() {
                    Self::from_file(&project)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides()?;

        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read one TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vocabulary.validate()?;
        let files = [
            ("output.graph_file", &self.output.graph_file),
            ("output.views_file", &self.output.views_file),
            ("output.test_ontology_file", &self.output.test_ontology_file),
        ];
        for (field, name) in files {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if files[0].1 == files[1].1 || files[0].1 == files[2].1 || files[1].1 == files[2].1 {
            return Err(ConfigError::ValidationFailed {
                field: "output".to_string(),
                message: "output file names must be distinct".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// A malformed `CLIMIND_ADAPTATION_PATHS` is an error; other unparsable
    /// values are ignored.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CLIMIND_ROOT_CONCEPT") {
            self.vocabulary.root_concept = val;
        }
        if let Ok(val) = std::env::var("CLIMIND_ADAPTATION_PATHS") {
            self.solutions.adaptation_paths = val.parse()?;
        }
        if let Ok(val) = std::env::var("CLIMIND_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Ok(val) = std::env::var("CLIMIND_LOG_JSON") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json = v;
            }
        }
        if let Ok(val) = std::env::var("CLIMIND_OUTPUT_PRETTY") {
            if let Ok(v) = val.parse::<bool>() {
                self.output.pretty = v;
            }
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref v) = cli.root_concept {
            self.vocabulary.root_concept = v.clone();
        }
        if let Some(v) = cli.adaptation_paths {
            self.solutions.adaptation_paths = v;
        }
        if let Some(v) = cli.pretty {
            self.output.pretty = v;
        }
        if let Some(ref v) = cli.log_level {
            self.observability.log_level = v.clone();
        }
        if let Some(v) = cli.log_json {
            self.observability.json = v;
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
