//! RelationEdge: a typed, directed relation between two concepts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::vocabulary::{Relation, SourceType};

/// A directed relation instance. Endpoints live in the graph, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEdge {
    #[serde(rename = "type")]
    pub relation: Relation,
    /// Citations shared by both endpoints, per source type. Empty on
    /// inhibition edges and before propagation runs.
    #[serde(default)]
    pub properties: BTreeMap<SourceType, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cyto_classes: Vec<String>,
}

impl RelationEdge {
    pub fn new(relation: Relation) -> Self {
        Self {
            relation,
            properties: BTreeMap::new(),
            cyto_classes: Vec::new(),
        }
    }

    pub fn is(&self, relation: &Relation) -> bool {
        &self.relation == relation
    }

    /// Whether any source type carries at least one propagated citation.
    pub fn has_sources(&self) -> bool {
        self.properties.values().any(|urls| !urls.is_empty())
    }

    /// Propagated citations flattened in canonical source type order.
    pub fn flattened_sources(&self) -> impl Iterator<Item = &String> {
        self.properties.values().flatten()
    }
}
