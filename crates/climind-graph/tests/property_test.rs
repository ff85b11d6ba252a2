//! Property tests: exploration closure, targeted acyclic reduction and the
//! propagation intersection law.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use climind_core::{ConceptNode, Relation, RelationEdge, SourceType, VocabularyConfig};
use climind_graph::graph::make_acyclic;
use climind_graph::propagation::propagate_citations;
use climind_graph::traversal::reachable;
use climind_graph::{ConceptGraph, RelationFilter, TraversalDirection};

const CLASSES: [&str; 4] = [
    "climate impact",
    "feedback loop",
    "increase in atmospheric greenhouse gas",
    "root cause linked to humans",
];

const SOURCE_TYPES: [SourceType; 2] = [SourceType::DirectCitation, SourceType::Media];

fn relation(code: u8) -> Relation {
    match code % 4 {
        0 => Relation::CausesOrPromotes,
        1 => Relation::IsInhibitedBy,
        2 => Relation::IsAMythAbout,
        _ => Relation::Other("relates".to_string()),
    }
}

fn build(classes: &[usize], edges: &[(usize, usize, u8)]) -> ConceptGraph {
    let n = classes.len();
    let mut graph = ConceptGraph::new();
    for (i, class) in classes.iter().enumerate() {
        graph.add_concept(ConceptNode::new(format!("n{i}")).with_direct_class(CLASSES[*class]));
    }
    for &(s, t, rel) in edges {
        if s < n && t < n && s != t {
            let si = graph.get_node(&format!("n{s}")).unwrap();
            let ti = graph.get_node(&format!("n{t}")).unwrap();
            graph.add_relation(si, ti, RelationEdge::new(relation(rel)));
        }
    }
    graph
}

fn graph_strategy() -> impl Strategy<Value = ConceptGraph> {
    (2_usize..16).prop_flat_map(|n| {
        (
            prop::collection::vec(0_usize..4, n),
            prop::collection::vec((0..n, 0..n, any::<u8>()), 0..n * 3),
        )
            .prop_map(|(classes, edges)| build(&classes, &edges))
    })
}

fn direction_strategy() -> impl Strategy<Value = TraversalDirection> {
    prop_oneof![
        Just(TraversalDirection::Forward),
        Just(TraversalDirection::Reverse),
        Just(TraversalDirection::Both),
    ]
}

fn filter_strategy() -> impl Strategy<Value = RelationFilter> {
    prop_oneof![
        Just(RelationFilter::Any),
        Just(RelationFilter::causal()),
        Just(RelationFilter::Only(Relation::IsInhibitedBy)),
    ]
}

proptest! {
    #[test]
    fn exploration_is_closed_under_re_exploration(
        graph in graph_strategy(),
        direction in direction_strategy(),
        filter in filter_strategy(),
    ) {
        let start = graph.get_node("n0").unwrap();
        let found: FxHashSet<_> = reachable(&graph, start, direction, &filter).into_iter().collect();
        prop_assert!(found.contains(&start));
        for &node in &found {
            for again in reachable(&graph, node, direction, &filter) {
                prop_assert!(found.contains(&again), "{} escaped the closure", graph.label(again));
            }
        }
    }

    #[test]
    fn acyclic_reduction_touches_only_feedback_edges(graph in graph_strategy()) {
        let vocab = VocabularyConfig::default();
        let reduction = make_acyclic(&graph, &vocab);

        prop_assert_eq!(reduction.graph.node_count(), graph.node_count());
        for e in graph.edge_indices() {
            let (s, t) = graph.endpoints(e).unwrap();
            let targeted = graph.node(s).has_direct_class(&vocab.feedback_loop_class)
                && graph.node(t).has_any_direct_class(&vocab.cycle_target_classes)
                && graph.edge(e).is(&Relation::CausesOrPromotes);
            let kept = reduction.graph.find_edge(s, t).is_some();
            prop_assert_eq!(kept, !targeted, "{} -> {}", graph.label(s), graph.label(t));
        }
        prop_assert_eq!(reduction.removed.len(), graph.edge_count() - reduction.graph.edge_count());
    }

    #[test]
    fn propagation_obeys_intersection_law(
        graph in graph_strategy(),
        citations in prop::collection::vec(prop::collection::vec((0_usize..2, 0_u8..6), 0..6), 16),
    ) {
        let mut graph = graph;
        let nodes: Vec<_> = graph.node_indices().collect();
        for (node, cites) in nodes.iter().zip(&citations) {
            let mut concept = graph.node(*node).clone();
            for &(kind, url) in cites {
                concept = concept.with_source(SOURCE_TYPES[kind], format!("https://cite.example.org/{url}"));
            }
            *graph.node_mut(*node) = concept;
        }

        let (out, _) = propagate_citations(&graph);

        for e in graph.edge_indices() {
            let (a, b) = graph.endpoints(e).unwrap();
            let inhibition = graph.edge(e).is(&Relation::IsInhibitedBy);
            for source_type in SOURCE_TYPES {
                let expected: Vec<String> = if inhibition {
                    Vec::new()
                } else {
                    graph
                        .node(a)
                        .sources(source_type)
                        .iter()
                        .filter(|u| graph.node(b).sources(source_type).contains(u))
                        .cloned()
                        .collect()
                };
                let actual = out.edge(e).properties.get(&source_type).cloned().unwrap_or_default();
                prop_assert_eq!(&actual, &expected);

                for url in &actual {
                    prop_assert!(!out.node(a).sources(source_type).contains(url));
                    prop_assert!(!out.node(b).sources(source_type).contains(url));
                }
            }
        }
    }
}
