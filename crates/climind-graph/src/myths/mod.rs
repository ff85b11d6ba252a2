//! Myth attribution: solution myths, impact myths, and the ranked list of
//! general myths attached to the root.

use std::cmp::Ordering;

use indexmap::IndexSet;
use petgraph::stable_graph::NodeIndex;
use rustc_hash::FxHashSet;
use tracing::info;

use climind_core::Relation;

use crate::graph::ConceptGraph;

/// Counts reported by myth attribution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MythReport {
    pub myths: usize,
    pub solution_myths: usize,
    pub impact_myths: usize,
    pub general_myths: usize,
}

/// Inputs computed by earlier stages.
pub struct MythContext<'a> {
    pub root: NodeIndex,
    /// Labels of the downstream-by-any-relation view.
    pub downstream: &'a FxHashSet<String>,
    /// Nodes causally upstream of the root, as indices of the graph being
    /// attributed.
    pub upstream: &'a FxHashSet<NodeIndex>,
    pub myth_frequency_property: &'a str,
}

/// Attribute every myth in place and set `general_myths` on the root.
pub fn attribute_myths(graph: &mut ConceptGraph, ctx: &MythContext<'_>) -> MythReport {
    let mut report = MythReport::default();
    let mut general: IndexSet<NodeIndex> = IndexSet::new();

    let myths: Vec<NodeIndex> = graph
        .node_indices()
        .filter(|&n| graph.node(n).is_myth)
        .collect();

    for &myth in &myths {
        let myth_label = graph.label(myth).to_string();
        let targets: Vec<NodeIndex> = graph
            .outgoing(myth)
            .into_iter()
            .filter(|adj| graph.edge(adj.edge).is(&Relation::IsAMythAbout))
            .map(|adj| adj.node)
            .collect();

        for target in targets {
            let in_downstream = ctx.downstream.contains(graph.label(target));
            let node = graph.node_mut(target);
            if node.is_risk_solution {
                node.solution_myths
                    .get_or_insert_with(Vec::new)
                    .push(myth_label.clone());
                report.solution_myths += 1;
            }
            if in_downstream {
                node.impact_myths
                    .get_or_insert_with(Vec::new)
                    .push(myth_label.clone());
                report.impact_myths += 1;
            }
            if ctx.upstream.contains(&target) {
                general.insert(myth);
            }
        }

        let sources = graph.node(myth).flattened_sources();
        graph.node_mut(myth).myth_sources = Some(sources);
    }

    let ranked = rank_by_frequency(graph, general.into_iter().collect(), ctx.myth_frequency_property);
    report.myths = myths.len();
    report.general_myths = ranked.len();
    let labels = graph.labels_of(&ranked);
    graph.node_mut(ctx.root).general_myths = Some(labels);

    info!(
        myths = report.myths,
        general = report.general_myths,
        solution_links = report.solution_myths,
        impact_links = report.impact_myths,
        "myths attributed"
    );
    report
}

/// Descending by frequency; myths without one go last. Stable.
pub fn rank_by_frequency(graph: &ConceptGraph, mut myths: Vec<NodeIndex>, property: &str) -> Vec<NodeIndex> {
    myths.sort_by(|a, b| {
        match (graph.node(*a).data(property), graph.node(*b).data(property)) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
    myths
}
