//! Typed pipeline stages. Each stage consumes the previous one and returns
//! a new value, so stages cannot run out of order.

use petgraph::stable_graph::NodeIndex;
use rustc_hash::FxHashSet;
use tracing::{info, info_span};

use climind_core::config::{AdaptationPaths, SolutionConfig};
use climind_core::errors::ClimindResult;
use climind_core::VocabularyConfig;

use crate::causal_sources::{aggregate_causal_sources, CausalSourceReport};
use crate::graph::{ingest, make_acyclic, ConceptGraph, IngestReport, OntologyExport};
use crate::myths::{attribute_myths, MythContext, MythReport};
use crate::propagation::{propagate_citations, PropagationReport};
use crate::solutions::{attach_solution_sources, discover_adaptations, discover_mitigations};
use crate::views::{compose_views, downstream_labels, extract_test_ontology, visualization_base, GraphViews};

use super::PipelineSummary;

/// Raw attributed graph with the root located.
#[derive(Debug)]
pub struct IngestedGraph {
    graph: ConceptGraph,
    root: NodeIndex,
    summary: PipelineSummary,
}

impl IngestedGraph {
    pub fn ingest(export: &OntologyExport, vocab: &VocabularyConfig) -> ClimindResult<Self> {
        let _span = info_span!("stage", name = "ingest").entered();
        let (graph, report) = ingest(export, vocab)?;
        let root = graph.require_root(&vocab.root_concept)?;
        let IngestReport {
            nodes,
            edges,
            unreferenced_concepts,
        } = report;
        Ok(Self {
            graph,
            root,
            summary: PipelineSummary {
                nodes,
                edges,
                unreferenced_concepts,
                ..Default::default()
            },
        })
    }

    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    /// Move shared citations onto edges.
    pub fn propagate(self) -> PropagatedGraph {
        let _span = info_span!("stage", name = "propagate").entered();
        let (graph, report) = propagate_citations(&self.graph);
        let PropagationReport { cited_edges, .. } = report;
        PropagatedGraph {
            graph,
            root: self.root,
            summary: PipelineSummary {
                cited_edges,
                ..self.summary
            },
        }
    }
}

/// Graph with edge citations derived.
#[derive(Debug)]
pub struct PropagatedGraph {
    graph: ConceptGraph,
    root: NodeIndex,
    summary: PipelineSummary,
}

impl PropagatedGraph {
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    /// Compute the acyclic reduction alongside the graph.
    pub fn reduce(self, vocab: &VocabularyConfig) -> ReducedGraph {
        let _span = info_span!("stage", name = "reduce").entered();
        let reduction = make_acyclic(&self.graph, vocab);
        info!(removed = reduction.removed.len(), "feedback edges cut");
        ReducedGraph {
            summary: PipelineSummary {
                feedback_edges_removed: reduction.removed.len(),
                ..self.summary
            },
            graph: self.graph,
            reduced: reduction.graph,
            root: self.root,
        }
    }
}

/// Graph plus its acyclic reduction, sharing node indices.
#[derive(Debug)]
pub struct ReducedGraph {
    graph: ConceptGraph,
    reduced: ConceptGraph,
    root: NodeIndex,
    summary: PipelineSummary,
}

impl ReducedGraph {
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    pub fn reduced(&self) -> &ConceptGraph {
        &self.reduced
    }

    /// Attach mitigation solutions to the root and adaptation solutions to
    /// every downstream effect.
    pub fn solve(self, config: &SolutionConfig, vocab: &VocabularyConfig) -> ClimindResult<SolvedGraph> {
        let _span = info_span!("stage", name = "solve").entered();
        let Self {
            mut graph,
            reduced,
            root,
            summary,
        } = self;

        let mitigation = discover_mitigations(&reduced, root, &vocab.co2_reduction_property);
        let mitigations = graph.labels_of(&mitigation.ranked);
        graph.node_mut(root).mitigation_solutions = Some(mitigations.clone());
        attach_solution_sources(&mut graph, &mitigation.ranked, false);

        let paths_graph = match config.adaptation_paths {
            AdaptationPaths::Acyclic => &reduced,
            AdaptationPaths::Raw => &graph,
        };
        let adaptation = discover_adaptations(&graph, &reduced, paths_graph, root, config)?;
        for (effect, solutions) in &adaptation.per_effect {
            let labels = graph.labels_of(solutions);
            graph.node_mut(*effect).adaptation_solutions = Some(labels);
            attach_solution_sources(&mut graph, solutions, true);
        }

        Ok(SolvedGraph {
            summary: PipelineSummary {
                mitigation_solutions: mitigation.ranked.len(),
                adaptation_effects: adaptation.per_effect.len(),
                adaptation_solutions: adaptation.all_solutions().len(),
                self_adaptations_dropped: adaptation.dropped_self,
                ..summary
            },
            upstream: mitigation.upstream.into_iter().collect(),
            mitigations,
            graph,
            root,
        })
    }
}

/// Graph with solution fields attached.
#[derive(Debug)]
pub struct SolvedGraph {
    graph: ConceptGraph,
    root: NodeIndex,
    upstream: FxHashSet<NodeIndex>,
    mitigations: Vec<String>,
    summary: PipelineSummary,
}

impl SolvedGraph {
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    /// Attribute myths to solutions, impacts and the root.
    pub fn attribute_myths(self, vocab: &VocabularyConfig) -> ClimindResult<MythAttributedGraph> {
        let _span = info_span!("stage", name = "myths").entered();
        let Self {
            mut graph,
            root,
            upstream,
            mitigations,
            summary,
        } = self;

        let base = visualization_base(&graph, vocab);
        let downstream = downstream_labels(&base, &vocab.root_concept)?;
        let ctx = MythContext {
            root,
            downstream: &downstream,
            upstream: &upstream,
            myth_frequency_property: &vocab.myth_frequency_property,
        };
        let MythReport {
            myths,
            general_myths,
            ..
        } = attribute_myths(&mut graph, &ctx);

        Ok(MythAttributedGraph {
            graph,
            mitigations,
            summary: PipelineSummary {
                myths,
                general_myths,
                ..summary
            },
        })
    }
}

/// Graph with myth fields attached.
#[derive(Debug)]
pub struct MythAttributedGraph {
    graph: ConceptGraph,
    mitigations: Vec<String>,
    summary: PipelineSummary,
}

impl MythAttributedGraph {
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    /// Attach validated causal sources to every causally cited node.
    pub fn aggregate_causal_sources(self) -> SourcedGraph {
        let _span = info_span!("stage", name = "causal_sources").entered();
        let mut graph = self.graph;
        let CausalSourceReport {
            nodes,
            invalid_dropped,
        } = aggregate_causal_sources(&mut graph);
        SourcedGraph {
            graph,
            mitigations: self.mitigations,
            summary: PipelineSummary {
                causal_source_nodes: nodes,
                invalid_citations_dropped: invalid_dropped,
                ..self.summary
            },
        }
    }
}

/// Fully annotated graph, ready for view composition.
#[derive(Debug)]
pub struct SourcedGraph {
    graph: ConceptGraph,
    mitigations: Vec<String>,
    summary: PipelineSummary,
}

impl SourcedGraph {
    pub fn graph(&self) -> &ConceptGraph {
        &self.graph
    }

    /// Build the named views and the test-ontology subgraph.
    pub fn compose(self, vocab: &VocabularyConfig) -> ClimindResult<ProcessedGraph> {
        let _span = info_span!("stage", name = "compose").entered();
        let views = compose_views(&self.graph, &self.mitigations, vocab)?;
        let test_ontology = extract_test_ontology(&self.graph, vocab);
        info!(
            views = views.len(),
            test_ontology_nodes = test_ontology.node_count(),
            "outputs composed"
        );
        Ok(ProcessedGraph {
            summary: PipelineSummary {
                views: views.len(),
                test_ontology_nodes: test_ontology.node_count(),
                ..self.summary
            },
            graph: self.graph,
            views,
            test_ontology,
        })
    }
}

/// Final pipeline output.
#[derive(Debug)]
pub struct ProcessedGraph {
    pub graph: ConceptGraph,
    pub views: GraphViews,
    pub test_ontology: ConceptGraph,
    pub summary: PipelineSummary,
}
