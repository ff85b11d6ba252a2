//! Cytoscape class tags for the visualization views.

use climind_core::constants::cyto;
use climind_core::VocabularyConfig;

use crate::graph::ConceptGraph;

/// Tag nodes and edges of `graph` in place. Existing tags are replaced.
pub fn annotate(graph: &mut ConceptGraph, vocab: &VocabularyConfig) {
    let nodes: Vec<_> = graph.node_indices().collect();
    for idx in &nodes {
        let node = graph.node_mut(*idx);
        let mut classes = Vec::new();
        if node.label == vocab.root_concept {
            classes.push(cyto::TREE_ROOT);
        }
        let personal_value = node.has_personal_value();
        if node.is_risk_solution {
            classes.push(cyto::RISK_SOLUTION);
        }
        if personal_value {
            classes.push(cyto::PERSONAL_VALUE);
        }
        if personal_value || node.is_risk_solution {
            if !node.has_any_source() {
                classes.push(cyto::NO_SOURCE);
            }
            if node.lacks_annotation(&vocab.long_description_property) {
                classes.push(cyto::NO_LONG_DESCRIPTION);
            }
        }
        node.cyto_classes = classes.into_iter().map(str::to_string).collect();
    }

    let edges: Vec<_> = graph.edge_indices().collect();
    for e in edges {
        let Some((s, t)) = graph.endpoints(e) else {
            continue;
        };
        let touches_solution = graph.node(s).is_risk_solution || graph.node(t).is_risk_solution;
        let edge = graph.edge_mut(e);
        edge.cyto_classes.clear();
        if touches_solution {
            edge.cyto_classes.push(cyto::SOLUTION_EDGE.to_string());
        } else if !edge.has_sources() {
            edge.cyto_classes.push(cyto::EDGE_NO_SOURCE.to_string());
        }
    }
}
