//! Targeted feedback-loop cycle breaking.
//!
//! Only outgoing `causes_or_promotes` edges of feedback-loop concepts into
//! greenhouse-gas / human-cause concepts are cut. Any other cycle survives.

use tracing::debug;

use climind_core::{Relation, VocabularyConfig};

use super::ConceptGraph;

/// The reduced graph and the edges removed to produce it.
#[derive(Debug, Clone)]
pub struct AcyclicReduction {
    pub graph: ConceptGraph,
    /// (source, target) labels of every removed edge, in removal order.
    pub removed: Vec<(String, String)>,
}

/// Copy `graph` and cut its feedback edges. Node and surviving edge indices
/// are unchanged, so the result can be addressed with `graph`'s indices.
pub fn make_acyclic(graph: &ConceptGraph, vocab: &VocabularyConfig) -> AcyclicReduction {
    let mut reduced = graph.clone();
    let mut to_remove = Vec::new();

    for node in graph.node_indices() {
        if !graph.node(node).has_direct_class(&vocab.feedback_loop_class) {
            continue;
        }
        for adj in graph.outgoing(node) {
            let target = graph.node(adj.node);
            if target.has_any_direct_class(&vocab.cycle_target_classes)
                && graph.edge(adj.edge).is(&Relation::CausesOrPromotes)
            {
                to_remove.push(adj.edge);
            }
        }
    }

    let mut removed = Vec::with_capacity(to_remove.len());
    for edge in to_remove {
        if let Some((s, t)) = reduced.endpoints(edge) {
            let pair = (reduced.label(s).to_string(), reduced.label(t).to_string());
            debug!(source = %pair.0, target = %pair.1, "removed feedback edge");
            reduced.remove_relation(edge);
            removed.push(pair);
        }
    }

    AcyclicReduction {
        graph: reduced,
        removed,
    }
}
