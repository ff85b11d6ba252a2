//! Simple path enumeration between two concepts.

use indexmap::IndexSet;
use petgraph::stable_graph::NodeIndex;
use rustc_hash::FxHashSet;

use super::ConceptGraph;

/// Depth-first iterator over every simple path from `source` to `target`,
/// following edges of any relation in insertion order.
///
/// A path from a node to itself is never produced.
pub struct SimplePaths<'g> {
    graph: &'g ConceptGraph,
    target: NodeIndex,
    path: Vec<NodeIndex>,
    on_path: FxHashSet<NodeIndex>,
    /// Per path position: successors and the next one to try.
    stack: Vec<(Vec<NodeIndex>, usize)>,
}

impl<'g> SimplePaths<'g> {
    pub fn new(graph: &'g ConceptGraph, source: NodeIndex, target: NodeIndex) -> Self {
        let mut paths = Self {
            graph,
            target,
            path: Vec::new(),
            on_path: FxHashSet::default(),
            stack: Vec::new(),
        };
        if source != target {
            paths.push(source);
        }
        paths
    }

    fn push(&mut self, node: NodeIndex) {
        self.path.push(node);
        self.on_path.insert(node);
        let successors = self.graph.outgoing(node).into_iter().map(|a| a.node).collect();
        self.stack.push((successors, 0));
    }

    fn pop(&mut self) {
        self.stack.pop();
        if let Some(node) = self.path.pop() {
            self.on_path.remove(&node);
        }
    }
}

impl Iterator for SimplePaths<'_> {
    type Item = Vec<NodeIndex>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (successors, cursor) = self.stack.last_mut()?;
            let Some(&child) = successors.get(*cursor) else {
                self.pop();
                continue;
            };
            *cursor += 1;

            if self.on_path.contains(&child) {
                continue;
            }
            if child == self.target {
                let mut found = self.path.clone();
                found.push(child);
                return Some(found);
            }
            self.push(child);
        }
    }
}

/// Every node on any simple path from `source` to `target`, de-duplicated in
/// order of first appearance across paths.
pub fn nodes_on_simple_paths(
    graph: &ConceptGraph,
    source: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut nodes = IndexSet::new();
    for path in SimplePaths::new(graph, source, target) {
        nodes.extend(path);
    }
    nodes.into_iter().collect()
}
