//! JSON boundary documents: the ontology export read at ingestion and the
//! node-link document every processed graph and view is written as.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use climind_core::errors::GraphError;
use climind_core::models::DataProperties;
use climind_core::vocabulary::{Relation, SourceType};
use climind_core::{ConceptNode, RelationEdge};

use super::ConceptGraph;

/// Output of the ontology-loading collaborator: reasoned concept records
/// plus the edge list the graph is built from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OntologyExport {
    pub concepts: Vec<ConceptRecord>,
    pub edges: Vec<EdgeRecord>,
}

/// One reasoned ontology concept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConceptRecord {
    pub label: String,
    pub iri: String,
    pub comment: String,
    pub direct_classes: Vec<String>,
    pub all_classes: Vec<String>,
    pub superclasses: BTreeMap<String, Vec<String>>,
    pub properties: BTreeMap<String, Vec<String>>,
    pub data_properties: DataProperties,
    pub is_myth: bool,
    pub is_risk_solution: bool,
}

/// One row of the edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub relation: Relation,
}

impl EdgeRecord {
    pub fn new(source: &str, target: &str, relation: Relation) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            relation,
        }
    }
}

/// Node-link serialization of a [`ConceptGraph`]. Reloads without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub nodes: Vec<ConceptNode>,
    pub edges: Vec<EdgeDocument>,
}

/// A serialized edge with its endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDocument {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub relation: Relation,
    #[serde(default)]
    pub properties: BTreeMap<SourceType, Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cyto_classes: Vec<String>,
}

impl GraphDocument {
    /// Snapshot a graph, nodes and edges in insertion order.
    pub fn from_graph(graph: &ConceptGraph) -> Self {
        let nodes = graph
            .node_indices()
            .map(|n| graph.node(n).clone())
            .collect();
        let edges = graph
            .edge_indices()
            .filter_map(|e| {
                let (s, t) = graph.endpoints(e)?;
                let edge = graph.edge(e);
                Some(EdgeDocument {
                    source: graph.label(s).to_string(),
                    target: graph.label(t).to_string(),
                    relation: edge.relation.clone(),
                    properties: edge.properties.clone(),
                    cyto_classes: edge.cyto_classes.clone(),
                })
            })
            .collect();
        Self { nodes, edges }
    }

    /// Rebuild the graph. An edge naming an unknown node is `NodeNotFound`.
    pub fn into_graph(self) -> Result<ConceptGraph, GraphError> {
        let mut graph = ConceptGraph::new();
        for node in self.nodes {
            graph.add_concept(node);
        }
        for edge in self.edges {
            let s = graph.require(&edge.source)?;
            let t = graph.require(&edge.target)?;
            graph.add_relation(
                s,
                t,
                RelationEdge {
                    relation: edge.relation,
                    properties: edge.properties,
                    cyto_classes: edge.cyto_classes,
                },
            );
        }
        Ok(graph)
    }
}
