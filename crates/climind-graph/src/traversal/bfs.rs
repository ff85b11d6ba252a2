//! Worklist BFS with visit-once semantics.

use std::collections::VecDeque;

use petgraph::stable_graph::NodeIndex;
use rustc_hash::FxHashSet;

use crate::graph::ConceptGraph;

use super::{RelationFilter, TraversalDirection};

/// Every node reachable from `start`, including `start`, in discovery order.
///
/// Incoming edges are examined before outgoing ones when both directions
/// are followed. A node is queued at most once.
pub fn reachable(
    graph: &ConceptGraph,
    start: NodeIndex,
    direction: TraversalDirection,
    filter: &RelationFilter,
) -> Vec<NodeIndex> {
    let mut order = vec![start];
    let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
    visited.insert(start);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        let mut frontier = Vec::new();
        if direction.follows_incoming() {
            frontier.extend(graph.incoming(current));
        }
        if direction.follows_outgoing() {
            frontier.extend(graph.outgoing(current));
        }
        for adj in frontier {
            if filter.matches(&graph.edge(adj.edge).relation) && visited.insert(adj.node) {
                order.push(adj.node);
                queue.push_back(adj.node);
            }
        }
    }

    order
}

/// Context subgraph around `start`: the induced subgraph over every
/// reachable node. All edges between discovered nodes are kept, including
/// relation types the exploration did not follow.
pub fn explore(
    graph: &ConceptGraph,
    start: NodeIndex,
    direction: TraversalDirection,
    filter: &RelationFilter,
) -> ConceptGraph {
    let keep: FxHashSet<NodeIndex> = reachable(graph, start, direction, filter)
        .into_iter()
        .collect();
    graph.induced_subgraph(&keep)
}
