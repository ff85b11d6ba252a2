//! Mitigation and adaptation solution discovery and ranking.

pub mod adaptation;
pub mod mitigation;
pub mod sources;

pub use adaptation::{discover_adaptations, AdaptationOutcome};
pub use mitigation::{discover_mitigations, rank_by_co2, MitigationOutcome};
pub use sources::attach_solution_sources;

use petgraph::stable_graph::NodeIndex;

use climind_core::Relation;

use crate::graph::ConceptGraph;

/// Targets of `node`'s outgoing inhibition edges, in edge order.
pub(crate) fn inhibiting_solutions(graph: &ConceptGraph, node: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
    graph
        .outgoing(node)
        .into_iter()
        .filter(|adj| graph.edge(adj.edge).is(&Relation::IsInhibitedBy))
        .map(|adj| adj.node)
}
