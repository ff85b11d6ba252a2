//! Citation propagation from nodes onto the edges between them.
//!
//! A citation listed under the same source type on both endpoints of a
//! non-inhibition edge evidences the relation itself: it moves onto the edge
//! and is removed from both nodes. Removals accumulate across all edges
//! before any node is touched, so this pass is single-threaded and must run
//! exactly once per graph.

use std::collections::BTreeMap;

use indexmap::{IndexMap, IndexSet};
use petgraph::stable_graph::NodeIndex;
use tracing::info;

use climind_core::{Relation, SourceType};

use crate::graph::ConceptGraph;

/// Counts reported by propagation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropagationReport {
    /// Edges that received at least one citation.
    pub cited_edges: usize,
    /// Total citations written onto edges.
    pub edge_citations: usize,
    /// Total citations removed from nodes.
    pub removed_from_nodes: usize,
}

/// Return a copy of `graph` with edge citations derived and node citations
/// pruned. Every edge's citation map is reset; inhibition edges stay empty.
pub fn propagate_citations(graph: &ConceptGraph) -> (ConceptGraph, PropagationReport) {
    let mut out = graph.clone();
    let mut report = PropagationReport::default();
    let mut to_remove: IndexMap<(NodeIndex, SourceType), IndexSet<String>> = IndexMap::new();

    let edges: Vec<_> = graph.edge_indices().collect();
    for e in edges {
        let Some((a, b)) = graph.endpoints(e) else {
            continue;
        };
        let mut shared_by_type = BTreeMap::new();

        if !graph.edge(e).is(&Relation::IsInhibitedBy) {
            let (node_a, node_b) = (graph.node(a), graph.node(b));
            for source_type in SourceType::ALL {
                let b_sources = node_b.sources(source_type);
                let shared: Vec<String> = node_a
                    .sources(source_type)
                    .iter()
                    .filter(|url| b_sources.contains(url))
                    .cloned()
                    .collect();
                if shared.is_empty() {
                    continue;
                }
                for endpoint in [a, b] {
                    to_remove
                        .entry((endpoint, source_type))
                        .or_default()
                        .extend(shared.iter().cloned());
                }
                report.edge_citations += shared.len();
                shared_by_type.insert(source_type, shared);
            }
        }

        if !shared_by_type.is_empty() {
            report.cited_edges += 1;
        }
        out.edge_mut(e).properties = shared_by_type;
    }

    for ((node, source_type), urls) in &to_remove {
        if let Some(list) = out.node_mut(*node).sources_mut(*source_type) {
            let before = list.len();
            list.retain(|url| !urls.contains(url));
            report.removed_from_nodes += before - list.len();
        }
    }

    info!(
        cited_edges = report.cited_edges,
        edge_citations = report.edge_citations,
        removed_from_nodes = report.removed_from_nodes,
        "citations propagated to edges"
    );
    (out, report)
}
