//! Build the raw attributed graph from an ontology export.

use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use climind_core::errors::{GraphError, PipelineError};
use climind_core::models::scores::{personal_values_10, personal_values_19, PoliticalValue};
use climind_core::{ConceptNode, RelationEdge, VocabularyConfig};

use super::document::{ConceptRecord, OntologyExport};
use super::ConceptGraph;

/// Counts reported by ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub nodes: usize,
    pub edges: usize,
    /// Concept records that no edge references.
    pub unreferenced_concepts: usize,
}

/// Build the graph from the edge list, then attach each node's record.
///
/// Nodes exist only when an edge references them, in order of first
/// appearance. A referenced label without a record is `NodeNotFound`.
pub fn ingest(
    export: &OntologyExport,
    vocab: &VocabularyConfig,
) -> Result<(ConceptGraph, IngestReport), PipelineError> {
    let mut records: FxHashMap<&str, &ConceptRecord> = FxHashMap::default();
    for record in &export.concepts {
        if records.insert(record.label.as_str(), record).is_some() {
            debug!(label = %record.label, "duplicate concept record, last one wins");
        }
    }

    let mut graph = ConceptGraph::new();
    for edge in &export.edges {
        let s = graph.ensure_node(&edge.source);
        let t = graph.ensure_node(&edge.target);
        graph.add_relation(s, t, RelationEdge::new(edge.relation.clone()));
    }

    let indices: Vec<_> = graph.node_indices().collect();
    for idx in indices {
        let label = graph.label(idx).to_string();
        let record = records
            .get(label.as_str())
            .ok_or(GraphError::NodeNotFound { label: label.clone() })?;
        *graph.node_mut(idx) = build_concept(record, vocab)?;
    }

    let unreferenced = export
        .concepts
        .iter()
        .filter(|c| !graph.contains(&c.label))
        .count();
    if unreferenced > 0 {
        warn!(count = unreferenced, "concepts not referenced by any edge were skipped");
    }

    let report = IngestReport {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        unreferenced_concepts: unreferenced,
    };
    info!(nodes = report.nodes, edges = report.edges, "graph ingested");
    Ok((graph, report))
}

/// Turn one record into a fully initialised concept.
pub fn build_concept(
    record: &ConceptRecord,
    vocab: &VocabularyConfig,
) -> Result<ConceptNode, PipelineError> {
    let universal = vocab.universal_class.as_str();
    let data = record.data_properties.clone();

    let personal_values_19 = personal_values_19(&data);
    let personal_values_10 = personal_values_10(&data, &record.label)?;
    let political_value =
        PoliticalValue::from_data(&data, &vocab.conservative_property, &vocab.liberal_property);

    let superclasses = record
        .superclasses
        .iter()
        .map(|(k, v)| (k.clone(), unique_without(v, universal)))
        .collect::<std::collections::BTreeMap<_, _>>();

    let is_myth = record.is_myth || superclasses.contains_key(&vocab.myth_class);
    let is_risk_solution =
        record.is_risk_solution || superclasses.contains_key(&vocab.risk_solution_class);

    Ok(ConceptNode {
        label: record.label.clone(),
        iri: record.iri.clone(),
        comment: record.comment.clone(),
        direct_classes: unique_without(&record.direct_classes, ""),
        all_classes: unique_without(&record.all_classes, universal),
        superclasses,
        properties: record
            .properties
            .iter()
            .map(|(k, v)| (k.clone(), unique_without(v, "")))
            .collect(),
        data_properties: data,
        personal_values_19,
        personal_values_10,
        political_value,
        is_myth,
        is_risk_solution,
        ..Default::default()
    })
}

/// De-duplicate preserving first occurrence, dropping `excluded`.
fn unique_without(values: &[String], excluded: &str) -> Vec<String> {
    values
        .iter()
        .filter(|v| v.as_str() != excluded)
        .cloned()
        .collect::<IndexSet<String>>()
        .into_iter()
        .collect()
}
