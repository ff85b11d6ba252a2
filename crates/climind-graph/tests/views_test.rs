//! View composition, visualization annotation and test-ontology extraction.

use climind_core::constants::{cyto, views};
use climind_core::errors::GraphError;
use climind_core::{ConceptNode, Relation, RelationEdge, SourceType, VocabularyConfig};
use climind_graph::views::{
    annotate, compose_views, extract_test_ontology, reverse_adaptation_edges, visualization_base,
};
use climind_graph::ConceptGraph;

const SECURITY: usize = 5;

fn link(graph: &mut ConceptGraph, source: &str, target: &str, relation: Relation) {
    let s = graph.ensure_node(source);
    let t = graph.ensure_node(target);
    graph.add_relation(s, t, RelationEdge::new(relation));
}

fn risk_solution(label: &str) -> ConceptNode {
    let mut node = ConceptNode::new(label);
    node.is_risk_solution = true;
    node
}

/// cause → root → impact, cause ⊣ solar, impact ⊣ shade, myth ⇢ cause.
/// `impact` appeals to security and lists `shade` as its adaptation.
fn processed_graph(vocab: &VocabularyConfig) -> ConceptGraph {
    let mut graph = ConceptGraph::new();
    graph.add_concept(ConceptNode::new(vocab.root_concept.as_str()));
    graph.add_concept(ConceptNode::new("cause"));
    let mut impact = ConceptNode::new("impact");
    impact.personal_values_10[SECURITY] = Some(1.0);
    impact.adaptation_solutions = Some(vec!["shade".to_string()]);
    graph.add_concept(impact);
    graph.add_concept(risk_solution("solar"));
    graph.add_concept(risk_solution("shade"));
    let mut myth = ConceptNode::new("myth");
    myth.is_myth = true;
    graph.add_concept(myth);

    let root = vocab.root_concept.as_str();
    link(&mut graph, "cause", root, Relation::CausesOrPromotes);
    link(&mut graph, root, "impact", Relation::CausesOrPromotes);
    link(&mut graph, "cause", "solar", Relation::IsInhibitedBy);
    link(&mut graph, "impact", "shade", Relation::IsInhibitedBy);
    link(&mut graph, "myth", "cause", Relation::IsAMythAbout);
    graph
}

#[test]
fn bundle_holds_fixed_views_then_value_views() {
    let vocab = VocabularyConfig::default();
    let graph = processed_graph(&vocab);
    let bundle = compose_views(&graph, &["solar".to_string()], &vocab).unwrap();

    let names: Vec<&str> = bundle.names().collect();
    assert_eq!(
        names,
        vec![
            views::UPSTREAM_MITIGATIONS,
            views::DOWNSTREAM_ADAPTATIONS,
            views::UPSTREAM,
            views::DOWNSTREAM,
            "security",
        ]
    );
}

#[test]
fn directional_views_contain_the_expected_concepts() {
    let vocab = VocabularyConfig::default();
    let root = vocab.root_concept.clone();
    let graph = processed_graph(&vocab);
    let bundle = compose_views(&graph, &["solar".to_string()], &vocab).unwrap();

    let upstream = bundle.get(views::UPSTREAM).unwrap();
    assert_eq!(upstream.labels(), vec![root.clone(), "cause".to_string()]);
    assert_eq!(upstream.edge_count(), 1);

    let downstream = bundle.get(views::DOWNSTREAM).unwrap();
    assert_eq!(downstream.labels(), vec![root.clone(), "impact".to_string()]);

    let adaptations = bundle.get(views::DOWNSTREAM_ADAPTATIONS).unwrap();
    assert_eq!(
        adaptations.labels(),
        vec![root.clone(), "impact".to_string(), "shade".to_string()]
    );
    assert_eq!(adaptations.edge_count(), 2);

    let mitigations = bundle.get(views::UPSTREAM_MITIGATIONS).unwrap();
    assert_eq!(
        mitigations.labels(),
        vec![root, "cause".to_string(), "solar".to_string()]
    );
    // Joins the upstream subtree to the mitigation subgraph.
    assert!(mitigations.relation_between("cause", "solar").is_some());
}

#[test]
fn myths_never_appear_in_views() {
    let vocab = VocabularyConfig::default();
    let graph = processed_graph(&vocab);
    let bundle = compose_views(&graph, &[], &vocab).unwrap();
    for (name, view) in bundle.iter() {
        assert!(!view.contains("myth"), "myth leaked into {name}");
    }
}

#[test]
fn value_view_follows_reversed_adaptation_edges() {
    let vocab = VocabularyConfig::default();
    let root = vocab.root_concept.clone();
    let graph = processed_graph(&vocab);
    let bundle = compose_views(&graph, &[], &vocab).unwrap();

    let security = bundle.get("security").unwrap();
    assert_eq!(
        security.labels(),
        vec![root.clone(), "cause".to_string(), "impact".to_string(), "shade".to_string()]
    );
    assert!(security.relation_between("shade", "impact").is_some());
    assert!(security.relation_between("impact", "shade").is_none());
    assert!(security.relation_between("cause", &root).is_some());
    assert_eq!(bundle.len(), 5);
}

#[test]
fn views_leave_the_processed_graph_untouched() {
    let vocab = VocabularyConfig::default();
    let graph = processed_graph(&vocab);
    let before = graph.edge_count();
    compose_views(&graph, &["solar".to_string()], &vocab).unwrap();

    assert_eq!(graph.edge_count(), before);
    assert!(graph.contains("myth"));
    assert!(graph.node_indices().all(|n| graph.node(n).cyto_classes.is_empty()));
}

#[test]
fn missing_root_fails_composition() {
    let vocab = VocabularyConfig {
        root_concept: "absent".to_string(),
        ..Default::default()
    };
    let graph = processed_graph(&VocabularyConfig::default());
    let err = compose_views(&graph, &[], &vocab).unwrap_err();
    assert_eq!(err, GraphError::RootNotFound { root: "absent".to_string() });
}

#[test]
fn reversal_only_flips_edges_into_adaptation_solutions() {
    let vocab = VocabularyConfig::default();
    let base = visualization_base(&processed_graph(&vocab), &vocab);
    let variant = reverse_adaptation_edges(&base);

    assert_eq!(variant.labels(), base.labels());
    assert_eq!(variant.edge_count(), base.edge_count());
    assert!(variant.relation_between("shade", "impact").is_some());
    assert!(variant.relation_between("cause", "solar").is_some());
}

#[test]
fn reversal_keeps_both_edges_when_the_reverse_already_exists() {
    let mut graph = ConceptGraph::new();
    let mut heat = ConceptNode::new("heat");
    heat.adaptation_solutions = Some(vec!["fans".to_string()]);
    graph.add_concept(heat);
    graph.add_concept(risk_solution("fans"));
    link(&mut graph, "heat", "fans", Relation::IsInhibitedBy);
    link(&mut graph, "fans", "heat", Relation::Other("has_side_effect".to_string()));

    let variant = reverse_adaptation_edges(&graph);

    assert_eq!(variant.edge_count(), 2);
    assert_eq!(variant.relation_between("heat", "fans").unwrap().relation, Relation::IsInhibitedBy);
    assert_eq!(
        variant.relation_between("fans", "heat").unwrap().relation,
        Relation::Other("has_side_effect".to_string())
    );
}

#[test]
fn annotation_tags_nodes_and_edges() {
    let vocab = VocabularyConfig::default();
    let mut base = visualization_base(&processed_graph(&vocab), &vocab);
    let solar = base.get_node("solar").unwrap();
    base.node_mut(solar)
        .properties
        .insert(vocab.long_description_property.clone(), vec!["Rooftop panels.".to_string()]);
    let shade = base.get_node("shade").unwrap();
    *base.node_mut(shade) = risk_solution("shade").with_source(SourceType::Government, "https://gov.example.org/shade");
    annotate(&mut base, &vocab);

    let classes = |label: &str| base.concept(label).unwrap().cyto_classes.clone();
    assert_eq!(classes(vocab.root_concept.as_str()), vec![cyto::TREE_ROOT]);
    assert_eq!(classes("solar"), vec![cyto::RISK_SOLUTION, cyto::NO_SOURCE]);
    assert_eq!(classes("shade"), vec![cyto::RISK_SOLUTION, cyto::NO_LONG_DESCRIPTION]);
    assert_eq!(
        classes("impact"),
        vec![cyto::PERSONAL_VALUE, cyto::NO_SOURCE, cyto::NO_LONG_DESCRIPTION]
    );
    assert!(classes("cause").is_empty());

    let edge_classes = |s: &str, t: &str| base.relation_between(s, t).unwrap().cyto_classes.clone();
    assert_eq!(edge_classes("cause", "solar"), vec![cyto::SOLUTION_EDGE]);
    assert_eq!(edge_classes("cause", vocab.root_concept.as_str()), vec![cyto::EDGE_NO_SOURCE]);
}

#[test]
fn annotation_replaces_previous_tags() {
    let vocab = VocabularyConfig::default();
    let mut base = visualization_base(&processed_graph(&vocab), &vocab);
    annotate(&mut base, &vocab);
    annotate(&mut base, &vocab);
    assert_eq!(base.concept("solar").unwrap().cyto_classes.len(), 3);
}

#[test]
fn test_ontology_keeps_value_concepts_without_solution_classes() {
    let mut graph = ConceptGraph::new();
    graph.add_concept(ConceptNode::new("safety").with_direct_class("security personal"));
    graph.add_concept(ConceptNode::new("values").with_direct_class("personal value"));
    graph.add_concept(
        ConceptNode::new("shelters")
            .with_direct_class("test ontology")
            .with_direct_class("adaptation"),
    );
    graph.add_concept(ConceptNode::new("storms").with_direct_class("climate impact"));
    link(&mut graph, "safety", "values", Relation::Other("is_a".to_string()));
    link(&mut graph, "safety", "shelters", Relation::CausesOrPromotes);
    link(&mut graph, "storms", "safety", Relation::CausesOrPromotes);

    let extracted = extract_test_ontology(&graph, &VocabularyConfig::default());
    assert_eq!(extracted.labels(), vec!["safety", "values"]);
    assert_eq!(extracted.edge_count(), 1);
}
