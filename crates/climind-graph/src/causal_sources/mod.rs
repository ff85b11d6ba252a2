//! Causal source aggregation: the citations evidencing the causal edges
//! into each concept.

use indexmap::IndexSet;
use tracing::{info, warn};

use climind_core::Relation;

use crate::citations::is_valid_url;
use crate::graph::ConceptGraph;

/// Counts reported by causal source aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CausalSourceReport {
    /// Nodes that received a `causal_sources` list.
    pub nodes: usize,
    /// Citations dropped as malformed URLs.
    pub invalid_dropped: usize,
}

/// Set `causal_sources` on every node with at least one cited incoming
/// `causes_or_promotes` edge. Malformed URLs are dropped silently.
pub fn aggregate_causal_sources(graph: &mut ConceptGraph) -> CausalSourceReport {
    let mut report = CausalSourceReport::default();
    let nodes: Vec<_> = graph.node_indices().collect();

    for node in nodes {
        let cited: Vec<_> = graph
            .incoming(node)
            .into_iter()
            .map(|adj| graph.edge(adj.edge))
            .filter(|edge| edge.is(&Relation::CausesOrPromotes) && edge.has_sources())
            .collect();
        if cited.is_empty() {
            continue;
        }

        let unique: IndexSet<&String> = cited.iter().flat_map(|e| e.flattened_sources()).collect();
        let before = unique.len();
        let sources: Vec<String> = unique
            .into_iter()
            .filter(|url| is_valid_url(url))
            .cloned()
            .collect();
        report.invalid_dropped += before - sources.len();
        report.nodes += 1;
        graph.node_mut(node).causal_sources = Some(sources);
    }

    if report.invalid_dropped > 0 {
        warn!(count = report.invalid_dropped, "malformed causal source URLs dropped");
    }
    info!(nodes = report.nodes, "causal sources aggregated");
    report
}
