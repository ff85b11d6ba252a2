//! Directional, relation-filtered exploration.

use climind_core::{ConceptNode, Relation, RelationEdge};
use climind_graph::traversal::{explore, reachable};
use climind_graph::{ConceptGraph, RelationFilter, TraversalDirection};

fn link(graph: &mut ConceptGraph, source: &str, target: &str, relation: Relation) {
    let s = graph.ensure_node(source);
    let t = graph.ensure_node(target);
    graph.add_relation(s, t, RelationEdge::new(relation));
}

/// a → b → c ⊣ d, x → b, b ~ y (opaque), c ⇢ a (myth about).
fn build_graph() -> ConceptGraph {
    let mut graph = ConceptGraph::new();
    link(&mut graph, "a", "b", Relation::CausesOrPromotes);
    link(&mut graph, "b", "c", Relation::CausesOrPromotes);
    link(&mut graph, "c", "d", Relation::IsInhibitedBy);
    link(&mut graph, "x", "b", Relation::CausesOrPromotes);
    link(&mut graph, "b", "y", Relation::Other("affects".to_string()));
    link(&mut graph, "c", "a", Relation::IsAMythAbout);
    graph
}

fn labels(graph: &ConceptGraph, start: &str, direction: TraversalDirection, filter: &RelationFilter) -> Vec<String> {
    let start = graph.get_node(start).unwrap();
    graph.labels_of(&reachable(graph, start, direction, filter))
}

#[test]
fn forward_causal_stops_at_other_relations() {
    let graph = build_graph();
    let got = labels(&graph, "a", TraversalDirection::Forward, &RelationFilter::causal());
    assert_eq!(got, vec!["a", "b", "c"]);
}

#[test]
fn forward_any_follows_every_relation_in_edge_order() {
    let graph = build_graph();
    let got = labels(&graph, "a", TraversalDirection::Forward, &RelationFilter::Any);
    assert_eq!(got, vec!["a", "b", "c", "y", "d"]);
}

#[test]
fn reverse_causal_walks_causes() {
    let graph = build_graph();
    let got = labels(&graph, "c", TraversalDirection::Reverse, &RelationFilter::causal());
    assert_eq!(got, vec!["c", "b", "a", "x"]);
}

#[test]
fn both_directions_examine_incoming_first() {
    let graph = build_graph();
    let got = labels(&graph, "d", TraversalDirection::Both, &RelationFilter::Any);
    assert_eq!(got, vec!["d", "c", "b", "a", "x", "y"]);
}

#[test]
fn only_filter_selects_single_relation() {
    let graph = build_graph();
    let filter = RelationFilter::Only(Relation::IsInhibitedBy);
    assert_eq!(labels(&graph, "c", TraversalDirection::Forward, &filter), vec!["c", "d"]);
    assert_eq!(labels(&graph, "a", TraversalDirection::Forward, &filter), vec!["a"]);
}

#[test]
fn explore_keeps_edges_it_did_not_follow() {
    let graph = build_graph();
    let a = graph.get_node("a").unwrap();
    let sub = explore(&graph, a, TraversalDirection::Forward, &RelationFilter::causal());

    assert_eq!(sub.labels(), vec!["a", "b", "c"]);
    assert_eq!(sub.edge_count(), 3);
    let myth = sub.relation_between("c", "a").expect("myth edge retained");
    assert_eq!(myth.relation, Relation::IsAMythAbout);
}

#[test]
fn cycles_terminate_and_visit_once() {
    let mut graph = ConceptGraph::new();
    link(&mut graph, "a", "b", Relation::CausesOrPromotes);
    link(&mut graph, "b", "a", Relation::CausesOrPromotes);
    link(&mut graph, "b", "b", Relation::CausesOrPromotes);

    let got = labels(&graph, "a", TraversalDirection::Both, &RelationFilter::Any);
    assert_eq!(got, vec!["a", "b"]);
}

#[test]
fn isolated_start_yields_single_node_view() {
    let mut graph = build_graph();
    let lone = graph.add_concept(ConceptNode::new("lone"));
    let sub = explore(&graph, lone, TraversalDirection::Both, &RelationFilter::Any);
    assert_eq!(sub.labels(), vec!["lone"]);
    assert_eq!(sub.edge_count(), 0);
}

#[test]
fn filter_matching() {
    assert!(RelationFilter::Any.matches(&Relation::Other("x".to_string())));
    assert!(RelationFilter::causal().matches(&Relation::CausesOrPromotes));
    assert!(!RelationFilter::causal().matches(&Relation::IsInhibitedBy));
    assert_eq!(TraversalDirection::Reverse.name(), "reverse");
}
