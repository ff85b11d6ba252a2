//! ConceptNode: one concept of the causal knowledge graph.

use std::collections::BTreeMap;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use super::scores::{data_score, DataProperties, DataValue, PoliticalValue, Score};
use crate::vocabulary::SourceType;

/// A concept. `label` is its unique identifier within a graph.
///
/// The fixed fields are populated at ingestion. The `Option<Vec<String>>`
/// fields are written by later pipeline stages and are omitted from JSON
/// until a stage sets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConceptNode {
    pub label: String,
    pub iri: String,
    pub comment: String,
    pub direct_classes: Vec<String>,
    pub all_classes: Vec<String>,
    /// Top-level supercategory → ancestor categories under it.
    pub superclasses: BTreeMap<String, Vec<String>>,
    /// Annotation properties, citation lists keyed by source type among them.
    pub properties: BTreeMap<String, Vec<String>>,
    pub data_properties: DataProperties,
    pub personal_values_19: [Score; 19],
    pub personal_values_10: [Score; 10],
    pub political_value: PoliticalValue,
    pub is_myth: bool,
    pub is_risk_solution: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mitigation_solutions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adaptation_solutions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causal_sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub myth_sources: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_myths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact_myths: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_myths: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cyto_classes: Vec<String>,
}

impl ConceptNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_direct_class(mut self, class: impl Into<String>) -> Self {
        self.direct_classes.push(class.into());
        self
    }

    pub fn with_source(mut self, source_type: SourceType, url: impl Into<String>) -> Self {
        let list = self.properties.entry(source_type.as_str().to_string()).or_default();
        let url = url.into();
        if !list.contains(&url) {
            list.push(url);
        }
        self
    }

    pub fn with_data(mut self, name: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.data_properties.insert(name.into(), value.into());
        self
    }

    /// Whether `class` is one of the concept's direct classes.
    pub fn has_direct_class(&self, class: &str) -> bool {
        self.direct_classes.iter().any(|c| c == class)
    }

    /// Whether the concept's direct classes intersect `classes`.
    pub fn has_any_direct_class(&self, classes: &[String]) -> bool {
        classes.iter().any(|c| self.has_direct_class(c))
    }

    /// Citation URLs of one source type, empty when absent.
    pub fn sources(&self, source_type: SourceType) -> &[String] {
        self.properties
            .get(source_type.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn sources_mut(&mut self, source_type: SourceType) -> Option<&mut Vec<String>> {
        self.properties.get_mut(source_type.as_str())
    }

    /// Citations of every source type, flattened in canonical source type
    /// order with duplicates removed.
    pub fn flattened_sources(&self) -> Vec<String> {
        let mut seen: IndexSet<&str> = IndexSet::new();
        for source_type in SourceType::ALL {
            seen.extend(self.sources(source_type).iter().map(String::as_str));
        }
        seen.into_iter().map(str::to_string).collect()
    }

    pub fn has_any_source(&self) -> bool {
        SourceType::ALL
            .iter()
            .any(|t| !self.sources(*t).is_empty())
    }

    /// Whether an annotation property is absent or empty.
    pub fn lacks_annotation(&self, name: &str) -> bool {
        self.properties.get(name).map_or(true, Vec::is_empty)
    }

    /// A numeric data property, unset when absent, null or not a number.
    pub fn data(&self, name: &str) -> Score {
        data_score(&self.data_properties, name)
    }

    /// Whether any of the 10 collapsed personal values is set and non-zero.
    pub fn has_personal_value(&self) -> bool {
        self.personal_values_10
            .iter()
            .any(|v| super::scores::is_significant(*v))
    }
}
