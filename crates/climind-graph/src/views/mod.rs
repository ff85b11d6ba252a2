//! Named views for the visualization consumer.
//!
//! Views are derived from a visualization-only copy: the acyclic reduction
//! of the processed graph with every myth removed. The processed graph is
//! never modified here.

pub mod annotate;
pub mod test_ontology;

pub use annotate::annotate;
pub use test_ontology::extract_test_ontology;

use indexmap::IndexMap;
use petgraph::stable_graph::NodeIndex;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use climind_core::constants::views;
use climind_core::errors::GraphError;
use climind_core::models::scores::is_significant;
use climind_core::vocabulary::PERSONAL_VALUES_10;
use climind_core::{RelationEdge, VocabularyConfig};

use crate::graph::{make_acyclic, union_subgraph, ConceptGraph, GraphDocument};
use crate::traversal::{explore, reachable, RelationFilter, TraversalDirection};

/// Views by name, in bundle order.
#[derive(Debug, Clone, Default)]
pub struct GraphViews {
    views: IndexMap<String, ConceptGraph>,
}

impl GraphViews {
    pub fn get(&self, name: &str) -> Option<&ConceptGraph> {
        self.views.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.views.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConceptGraph)> {
        self.views.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    fn insert(&mut self, name: &str, view: ConceptGraph) {
        self.views.insert(name.to_string(), view);
    }

    /// Serializable bundle, in bundle order.
    pub fn to_documents(&self) -> IndexMap<String, GraphDocument> {
        self.views
            .iter()
            .map(|(name, view)| (name.clone(), GraphDocument::from_graph(view)))
            .collect()
    }
}

/// The acyclic reduction of `graph` with myths removed.
pub fn visualization_base(graph: &ConceptGraph, vocab: &VocabularyConfig) -> ConceptGraph {
    make_acyclic(graph, vocab).graph.without_nodes(|n| n.is_myth)
}

/// Labels forward-reachable from the root by any relation on `base`.
pub fn downstream_labels(base: &ConceptGraph, root: &str) -> Result<FxHashSet<String>, GraphError> {
    let root = base.require_root(root)?;
    Ok(reachable(base, root, TraversalDirection::Forward, &RelationFilter::Any)
        .into_iter()
        .map(|n| base.label(n).to_string())
        .collect())
}

/// Build every named view from the processed graph.
///
/// `mitigations` are the ranked mitigation solution labels.
pub fn compose_views(
    processed: &ConceptGraph,
    mitigations: &[String],
    vocab: &VocabularyConfig,
) -> Result<GraphViews, GraphError> {
    let mut base = visualization_base(processed, vocab);
    annotate(&mut base, vocab);
    let root = base.require_root(&vocab.root_concept)?;

    let causal = RelationFilter::causal();
    let upstream = explore(&base, root, TraversalDirection::Reverse, &causal);
    let downstream = explore(&base, root, TraversalDirection::Forward, &causal);
    let downstream_adaptations = explore(&base, root, TraversalDirection::Forward, &RelationFilter::Any);
    let mitigation_graph = base.induced_by_labels(mitigations.iter().map(String::as_str));
    let upstream_mitigations = union_subgraph(&[&upstream, &mitigation_graph], &base);

    let mut out = GraphViews::default();
    out.insert(views::UPSTREAM_MITIGATIONS, upstream_mitigations);
    out.insert(views::DOWNSTREAM_ADAPTATIONS, downstream_adaptations.clone());
    out.insert(views::UPSTREAM, upstream);
    out.insert(views::DOWNSTREAM, downstream);

    let variant = reverse_adaptation_edges(&base);
    for (slot, group) in PERSONAL_VALUES_10.iter().enumerate() {
        let seeds: Vec<NodeIndex> = downstream_adaptations
            .node_indices()
            .filter(|&n| is_significant(downstream_adaptations.node(n).personal_values_10[slot]))
            .filter_map(|n| variant.get_node(downstream_adaptations.label(n)))
            .collect();
        if seeds.is_empty() {
            debug!(value = group.name, "no seeds for personal value view");
            continue;
        }
        let subtrees: Vec<ConceptGraph> = seeds
            .iter()
            .map(|&seed| explore(&variant, seed, TraversalDirection::Reverse, &RelationFilter::Any))
            .collect();
        let members: Vec<&ConceptGraph> = subtrees.iter().collect();
        out.insert(group.name, union_subgraph(&members, &variant));
    }

    info!(
        views = out.len(),
        base_nodes = base.node_count(),
        base_edges = base.edge_count(),
        "views composed"
    );
    Ok(out)
}

/// Copy of `base` where every edge into an adaptation solution points the
/// other way, so a solution leads into the concept it adapts.
///
/// An edge whose reverse already exists in `base` keeps its direction, so
/// the variant has exactly as many edges as `base`.
pub fn reverse_adaptation_edges(base: &ConceptGraph) -> ConceptGraph {
    let adaptation_solutions: FxHashSet<&str> = base
        .node_indices()
        .filter_map(|n| base.node(n).adaptation_solutions.as_ref())
        .flatten()
        .map(String::as_str)
        .collect();

    let mut variant = ConceptGraph::new();
    for n in base.node_indices() {
        variant.add_concept(base.node(n).clone());
    }
    for e in base.edge_indices() {
        let Some((s, t)) = base.endpoints(e) else {
            continue;
        };
        let (from, to) = if adaptation_solutions.contains(base.label(t)) && base.find_edge(t, s).is_none() {
            (t, s)
        } else {
            (s, t)
        };
        let (Some(from), Some(to)) = (variant.get_node(base.label(from)), variant.get_node(base.label(to))) else {
            continue;
        };
        let edge: RelationEdge = base.edge(e).clone();
        variant.add_relation(from, to, edge);
    }
    variant
}
