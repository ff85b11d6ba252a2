//! Subgraph union.

use rustc_hash::FxHashSet;

use super::ConceptGraph;

/// Induced subgraph of `base` over the union of the members' node sets.
///
/// Edges are re-derived from `base`, so an edge joining nodes that came from
/// different members is present even though no single member holds it.
/// Member nodes absent from `base` are ignored.
pub fn union_subgraph(members: &[&ConceptGraph], base: &ConceptGraph) -> ConceptGraph {
    let keep: FxHashSet<_> = members
        .iter()
        .flat_map(|m| m.node_indices().map(move |n| m.label(n)))
        .filter_map(|label| base.get_node(label))
        .collect();
    base.induced_subgraph(&keep)
}
