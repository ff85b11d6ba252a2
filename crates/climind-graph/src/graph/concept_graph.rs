//! petgraph::StableGraph wrapper keyed by concept label.
//!
//! Neighbour iteration in petgraph runs newest edge first, and a removed
//! edge's slot is reused by the next insertion. Every accessor here returns
//! edges in insertion order instead, tracked by a per-edge sequence number,
//! so traversals and the lists derived from them are deterministic and
//! match the ontology's edge list order.

use std::collections::hash_map::Entry;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableGraph};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use rustc_hash::{FxHashMap, FxHashSet};

use climind_core::errors::GraphError;
use climind_core::{ConceptNode, RelationEdge};

/// The underlying directed graph type.
pub type ConceptStableGraph = StableGraph<ConceptNode, RelationEdge, Directed>;

/// One edge seen from a node: the edge and the node at its other end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacent {
    pub edge: EdgeIndex,
    pub node: NodeIndex,
}

/// Wrapper providing label-indexed access to the concept graph.
///
/// Clones share node and edge indices with the original, so an index found
/// in one clone addresses the same concept in another. Induced subgraphs
/// are rebuilt and get fresh indices; cross them by label.
///
/// Edges must be added and removed through [`add_relation`](Self::add_relation)
/// and [`remove_relation`](Self::remove_relation) so their insertion order
/// stays known.
#[derive(Debug, Clone, Default)]
pub struct ConceptGraph {
    /// The petgraph stable graph.
    pub graph: ConceptStableGraph,
    /// Map from label → NodeIndex for O(1) lookup.
    pub node_index: FxHashMap<String, NodeIndex>,
    edge_seq: FxHashMap<EdgeIndex, u64>,
    next_seq: u64,
}

impl ConceptGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create a placeholder node for `label`.
    pub fn ensure_node(&mut self, label: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(label) {
            return idx;
        }
        let idx = self.graph.add_node(ConceptNode::new(label));
        self.node_index.insert(label.to_string(), idx);
        idx
    }

    /// Insert a concept, replacing the attributes of an existing one with
    /// the same label.
    pub fn add_concept(&mut self, node: ConceptNode) -> NodeIndex {
        match self.node_index.get(&node.label) {
            Some(&idx) => {
                self.graph[idx] = node;
                idx
            }
            None => {
                let label = node.label.clone();
                let idx = self.graph.add_node(node);
                self.node_index.insert(label, idx);
                idx
            }
        }
    }

    /// Add a relation. An existing edge for the same ordered pair is
    /// updated in place and keeps its position.
    pub fn add_relation(&mut self, source: NodeIndex, target: NodeIndex, edge: RelationEdge) -> EdgeIndex {
        let idx = self.graph.update_edge(source, target, edge);
        if let Entry::Vacant(slot) = self.edge_seq.entry(idx) {
            slot.insert(self.next_seq);
            self.next_seq += 1;
        }
        idx
    }

    /// Remove a relation, returning its payload.
    pub fn remove_relation(&mut self, edge: EdgeIndex) -> Option<RelationEdge> {
        self.edge_seq.remove(&edge);
        self.graph.remove_edge(edge)
    }

    /// Look up a node index by label.
    pub fn get_node(&self, label: &str) -> Option<NodeIndex> {
        self.node_index.get(label).copied()
    }

    /// Look up a node index, failing with `NodeNotFound`.
    pub fn require(&self, label: &str) -> Result<NodeIndex, GraphError> {
        self.get_node(label).ok_or_else(|| GraphError::NodeNotFound {
            label: label.to_string(),
        })
    }

    /// Look up the root concept, failing with `RootNotFound`.
    pub fn require_root(&self, root: &str) -> Result<NodeIndex, GraphError> {
        self.get_node(root).ok_or_else(|| GraphError::RootNotFound {
            root: root.to_string(),
        })
    }

    pub fn contains(&self, label: &str) -> bool {
        self.node_index.contains_key(label)
    }

    pub fn node(&self, idx: NodeIndex) -> &ConceptNode {
        &self.graph[idx]
    }

    pub fn node_mut(&mut self, idx: NodeIndex) -> &mut ConceptNode {
        &mut self.graph[idx]
    }

    /// Concept attributes by label.
    pub fn concept(&self, label: &str) -> Option<&ConceptNode> {
        self.get_node(label).map(|idx| &self.graph[idx])
    }

    pub fn label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx].label
    }

    pub fn labels_of(&self, nodes: &[NodeIndex]) -> Vec<String> {
        nodes.iter().map(|&n| self.label(n).to_string()).collect()
    }

    pub fn edge(&self, idx: EdgeIndex) -> &RelationEdge {
        &self.graph[idx]
    }

    pub fn edge_mut(&mut self, idx: EdgeIndex) -> &mut RelationEdge {
        &mut self.graph[idx]
    }

    /// Source and target of an edge.
    pub fn endpoints(&self, idx: EdgeIndex) -> Option<(NodeIndex, NodeIndex)> {
        self.graph.edge_endpoints(idx)
    }

    /// The edge from `source` to `target`, if any.
    pub fn find_edge(&self, source: NodeIndex, target: NodeIndex) -> Option<EdgeIndex> {
        self.graph.find_edge(source, target)
    }

    /// Relation between two labelled concepts, if connected.
    pub fn relation_between(&self, source: &str, target: &str) -> Option<&RelationEdge> {
        let s = self.get_node(source)?;
        let t = self.get_node(target)?;
        self.find_edge(s, t).map(|e| &self.graph[e])
    }

    /// Node indices in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    /// Edge indices in insertion order.
    pub fn edge_indices(&self) -> impl Iterator<Item = EdgeIndex> + '_ {
        let mut edges: Vec<EdgeIndex> = self.graph.edge_indices().collect();
        self.sort_by_insertion(&mut edges);
        edges.into_iter()
    }

    fn sort_by_insertion(&self, edges: &mut [EdgeIndex]) {
        edges.sort_by_key(|e| (self.edge_seq.get(e).copied().unwrap_or(u64::MAX), *e));
    }

    /// Outgoing edges of `node`, in insertion order.
    pub fn outgoing(&self, node: NodeIndex) -> Vec<Adjacent> {
        self.adjacent(node, Direction::Outgoing)
    }

    /// Incoming edges of `node`, in insertion order.
    pub fn incoming(&self, node: NodeIndex) -> Vec<Adjacent> {
        self.adjacent(node, Direction::Incoming)
    }

    fn adjacent(&self, node: NodeIndex, direction: Direction) -> Vec<Adjacent> {
        let mut edges: Vec<EdgeIndex> = self
            .graph
            .edges_directed(node, direction)
            .map(|e| e.id())
            .collect();
        self.sort_by_insertion(&mut edges);
        edges
            .into_iter()
            .filter_map(|edge| {
                let (source, target) = self.graph.edge_endpoints(edge)?;
                let other = match direction {
                    Direction::Outgoing => target,
                    Direction::Incoming => source,
                };
                Some(Adjacent { edge, node: other })
            })
            .collect()
    }

    /// Node-induced subgraph over `keep`, preserving node and edge order.
    /// Every edge between two kept nodes is retained, whatever its type.
    pub fn induced_subgraph(&self, keep: &FxHashSet<NodeIndex>) -> ConceptGraph {
        let mut sub = ConceptGraph::new();
        let mut mapping: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
        for idx in self.graph.node_indices().filter(|n| keep.contains(n)) {
            mapping.insert(idx, sub.add_concept(self.graph[idx].clone()));
        }
        for e in self.edge_indices() {
            let Some((s, t)) = self.graph.edge_endpoints(e) else {
                continue;
            };
            if let (Some(&ns), Some(&nt)) = (mapping.get(&s), mapping.get(&t)) {
                sub.add_relation(ns, nt, self.graph[e].clone());
            }
        }
        sub
    }

    /// Induced subgraph over the concepts with these labels. Unknown labels
    /// are skipped.
    pub fn induced_by_labels<'a>(&self, labels: impl IntoIterator<Item = &'a str>) -> ConceptGraph {
        let keep: FxHashSet<NodeIndex> = labels
            .into_iter()
            .filter_map(|l| self.get_node(l))
            .collect();
        self.induced_subgraph(&keep)
    }

    /// Copy of the graph without the nodes matching `drop`, and their edges.
    pub fn without_nodes(&self, drop: impl Fn(&ConceptNode) -> bool) -> ConceptGraph {
        let keep: FxHashSet<NodeIndex> = self
            .graph
            .node_indices()
            .filter(|&n| !drop(&self.graph[n]))
            .collect();
        self.induced_subgraph(&keep)
    }

    /// Labels in node order.
    pub fn labels(&self) -> Vec<String> {
        self.graph
            .node_indices()
            .map(|n| self.graph[n].label.clone())
            .collect()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
