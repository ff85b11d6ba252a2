use petgraph::stable_graph::NodeIndex;

use crate::graph::ConceptGraph;

/// Set `solution_sources` on each solution to its flattened citations.
/// With `keep_empty` false an empty list leaves the field unset.
pub fn attach_solution_sources(graph: &mut ConceptGraph, solutions: &[NodeIndex], keep_empty: bool) {
    for &solution in solutions {
        let sources = graph.node(solution).flattened_sources();
        if keep_empty || !sources.is_empty() {
            graph.node_mut(solution).solution_sources = Some(sources);
        }
    }
}
