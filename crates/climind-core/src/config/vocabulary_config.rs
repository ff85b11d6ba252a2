use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// The open domain vocabulary injected into the pipeline: the root concept,
/// class names and data property names the stages key on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Label of the concept all directional traversals start from.
    pub root_concept: String,
    /// Universal ancestor class, dropped from class lists at ingestion.
    pub universal_class: String,
    pub feedback_loop_class: String,
    /// Classes whose incoming feedback edges are cut by acyclic reduction.
    pub cycle_target_classes: Vec<String>,
    pub myth_class: String,
    pub risk_solution_class: String,
    pub co2_reduction_property: String,
    pub myth_frequency_property: String,
    pub conservative_property: String,
    pub liberal_property: String,
    pub long_description_property: String,
    pub test_ontology_classes: Vec<String>,
    pub non_test_ontology_classes: Vec<String>,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            root_concept: defaults::DEFAULT_ROOT_CONCEPT.to_string(),
            universal_class: defaults::DEFAULT_UNIVERSAL_CLASS.to_string(),
            feedback_loop_class: defaults::DEFAULT_FEEDBACK_LOOP_CLASS.to_string(),
            cycle_target_classes: to_owned(defaults::DEFAULT_CYCLE_TARGET_CLASSES),
            myth_class: defaults::DEFAULT_MYTH_CLASS.to_string(),
            risk_solution_class: defaults::DEFAULT_RISK_SOLUTION_CLASS.to_string(),
            co2_reduction_property: defaults::DEFAULT_CO2_REDUCTION_PROPERTY.to_string(),
            myth_frequency_property: defaults::DEFAULT_MYTH_FREQUENCY_PROPERTY.to_string(),
            conservative_property: defaults::DEFAULT_CONSERVATIVE_PROPERTY.to_string(),
            liberal_property: defaults::DEFAULT_LIBERAL_PROPERTY.to_string(),
            long_description_property: defaults::DEFAULT_LONG_DESCRIPTION_PROPERTY.to_string(),
            test_ontology_classes: to_owned(defaults::DEFAULT_TEST_ONTOLOGY_CLASSES),
            non_test_ontology_classes: to_owned(defaults::DEFAULT_NON_TEST_ONTOLOGY_CLASSES),
        }
    }
}

impl VocabularyConfig {
    /// Startup validation of the injected vocabulary.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("vocabulary.root_concept", &self.root_concept),
            ("vocabulary.universal_class", &self.universal_class),
            ("vocabulary.feedback_loop_class", &self.feedback_loop_class),
            ("vocabulary.myth_class", &self.myth_class),
            ("vocabulary.risk_solution_class", &self.risk_solution_class),
            ("vocabulary.co2_reduction_property", &self.co2_reduction_property),
            ("vocabulary.myth_frequency_property", &self.myth_frequency_property),
            ("vocabulary.conservative_property", &self.conservative_property),
            ("vocabulary.liberal_property", &self.liberal_property),
            ("vocabulary.long_description_property", &self.long_description_property),
        ];
        for (field, value) in named {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if self.cycle_target_classes.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "vocabulary.cycle_target_classes".to_string(),
                message: "at least one class is required".to_string(),
            });
        }
        if let Some(class) = self
            .test_ontology_classes
            .iter()
            .find(|c| self.non_test_ontology_classes.contains(c))
        {
            return Err(ConfigError::ValidationFailed {
                field: "vocabulary.test_ontology_classes".to_string(),
                message: format!("'{class}' is also listed as a non-test class"),
            });
        }
        Ok(())
    }
}

fn to_owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
