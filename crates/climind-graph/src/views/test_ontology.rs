//! The test-ontology subgraph: personal value concepts without solution
//! classes.

use climind_core::VocabularyConfig;

use crate::graph::ConceptGraph;

/// Induced subgraph over nodes with at least one test-ontology direct class
/// and no excluded solution class.
pub fn extract_test_ontology(graph: &ConceptGraph, vocab: &VocabularyConfig) -> ConceptGraph {
    graph.without_nodes(|node| {
        !(node.has_any_direct_class(&vocab.test_ontology_classes)
            && !node.has_any_direct_class(&vocab.non_test_ontology_classes))
    })
}
