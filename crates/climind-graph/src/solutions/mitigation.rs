//! Mitigations: solutions inhibiting anything causally upstream of the root.

use std::cmp::Ordering;

use indexmap::IndexSet;
use petgraph::stable_graph::NodeIndex;
use tracing::info;

use crate::graph::ConceptGraph;
use crate::traversal::{reachable, RelationFilter, TraversalDirection};

use super::inhibiting_solutions;

/// Upstream set and ranked mitigation solutions.
#[derive(Debug, Clone, Default)]
pub struct MitigationOutcome {
    /// Nodes causally upstream of the root, root included, in BFS order.
    pub upstream: Vec<NodeIndex>,
    /// Mitigation solutions, best first.
    pub ranked: Vec<NodeIndex>,
}

/// Find and rank the mitigation solutions on the reduced graph.
///
/// Indices in the outcome address `reduced` and every clone sharing its
/// indices.
pub fn discover_mitigations(
    reduced: &ConceptGraph,
    root: NodeIndex,
    co2_property: &str,
) -> MitigationOutcome {
    let upstream = reachable(reduced, root, TraversalDirection::Reverse, &RelationFilter::causal());

    let mut candidates: IndexSet<NodeIndex> = IndexSet::new();
    for &node in &upstream {
        candidates.extend(inhibiting_solutions(reduced, node));
    }
    let candidates: Vec<NodeIndex> = candidates.into_iter().collect();
    let ranked = rank_by_co2(reduced, &candidates, co2_property);

    info!(
        upstream = upstream.len(),
        mitigations = ranked.len(),
        "mitigation solutions ranked"
    );
    MitigationOutcome { upstream, ranked }
}

/// Solutions with a non-zero CO2 reduction first, highest first, then the
/// rest in encounter order. Ties keep encounter order.
pub fn rank_by_co2(graph: &ConceptGraph, candidates: &[NodeIndex], co2_property: &str) -> Vec<NodeIndex> {
    let mut with_co2: Vec<(NodeIndex, f64)> = Vec::new();
    let mut without_co2: Vec<NodeIndex> = Vec::new();
    for &candidate in candidates {
        match graph.node(candidate).data(co2_property) {
            Some(v) if v != 0.0 && !v.is_nan() => with_co2.push((candidate, v)),
            _ => without_co2.push(candidate),
        }
    }
    with_co2.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    with_co2
        .into_iter()
        .map(|(n, _)| n)
        .chain(without_co2)
        .collect()
}
