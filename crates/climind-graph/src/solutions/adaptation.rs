//! Adaptations: solutions inhibiting any node on any route from the root
//! to a downstream effect.

use indexmap::IndexSet;
use petgraph::stable_graph::NodeIndex;
use rayon::prelude::*;
use tracing::{debug, info};

use climind_core::config::{SelfAdaptationPolicy, SolutionConfig};
use climind_core::errors::GraphError;

use crate::graph::{nodes_on_simple_paths, ConceptGraph};
use crate::traversal::{reachable, RelationFilter, TraversalDirection};

use super::inhibiting_solutions;

/// Adaptation solutions per downstream effect.
#[derive(Debug, Clone, Default)]
pub struct AdaptationOutcome {
    /// (effect, its adaptation solutions), effects in discovery order.
    pub per_effect: Vec<(NodeIndex, Vec<NodeIndex>)>,
    /// Effects that listed themselves and were dropped.
    pub dropped_self: usize,
}

impl AdaptationOutcome {
    /// Every solution across all effects, first occurrence order.
    pub fn all_solutions(&self) -> Vec<NodeIndex> {
        let set: IndexSet<NodeIndex> = self
            .per_effect
            .iter()
            .flat_map(|(_, s)| s.iter().copied())
            .collect();
        set.into_iter().collect()
    }
}

/// Compute adaptation solutions for every effect downstream of `root`.
///
/// Effects are found on `reduced` by following any relation. Paths are
/// enumerated on `paths_graph`; inhibiting neighbours are looked up on
/// `graph`. All three must share node indices.
pub fn discover_adaptations(
    graph: &ConceptGraph,
    reduced: &ConceptGraph,
    paths_graph: &ConceptGraph,
    root: NodeIndex,
    config: &SolutionConfig,
) -> Result<AdaptationOutcome, GraphError> {
    let mut effects = reachable(reduced, root, TraversalDirection::Forward, &RelationFilter::Any);
    if reduced.outgoing(root).is_empty() {
        effects.clear();
    }

    let solve = |effect: NodeIndex| -> (NodeIndex, Vec<NodeIndex>) {
        let mut solutions: IndexSet<NodeIndex> = IndexSet::new();
        for node in nodes_on_simple_paths(paths_graph, root, effect) {
            solutions.extend(inhibiting_solutions(graph, node));
        }
        (effect, solutions.into_iter().collect())
    };

    let raw: Vec<(NodeIndex, Vec<NodeIndex>)> = if config.parallel {
        effects.par_iter().map(|&e| solve(e)).collect()
    } else {
        effects.iter().map(|&e| solve(e)).collect()
    };

    let mut outcome = AdaptationOutcome::default();
    for (effect, mut solutions) in raw {
        if solutions.contains(&effect) {
            match config.self_adaptation {
                SelfAdaptationPolicy::Reject => {
                    return Err(GraphError::SelfAdaptation {
                        node: graph.label(effect).to_string(),
                    });
                }
                SelfAdaptationPolicy::Drop => {
                    debug!(node = %graph.label(effect), "dropped self-adaptation");
                    solutions.retain(|&s| s != effect);
                    outcome.dropped_self += 1;
                }
            }
        }
        outcome.per_effect.push((effect, solutions));
    }

    info!(
        effects = outcome.per_effect.len(),
        solutions = outcome.all_solutions().len(),
        dropped_self = outcome.dropped_self,
        "adaptation solutions discovered"
    );
    Ok(outcome)
}
