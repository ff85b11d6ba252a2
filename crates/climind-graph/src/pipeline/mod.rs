//! Staged processing pipeline.
//!
//! ingest → propagate → reduce → solve → myths → causal sources → compose

pub mod stages;

pub use stages::{
    IngestedGraph, MythAttributedGraph, ProcessedGraph, PropagatedGraph, ReducedGraph,
    SolvedGraph, SourcedGraph,
};

use serde::Serialize;
use tracing::info;

use climind_core::errors::ClimindResult;
use climind_core::ClimindConfig;

use crate::graph::OntologyExport;

/// Counts gathered across the stages of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineSummary {
    pub nodes: usize,
    pub edges: usize,
    pub unreferenced_concepts: usize,
    pub cited_edges: usize,
    pub feedback_edges_removed: usize,
    pub mitigation_solutions: usize,
    pub adaptation_effects: usize,
    pub adaptation_solutions: usize,
    pub self_adaptations_dropped: usize,
    pub myths: usize,
    pub general_myths: usize,
    pub causal_source_nodes: usize,
    pub invalid_citations_dropped: usize,
    pub views: usize,
    pub test_ontology_nodes: usize,
}

/// Runs every stage in order under one configuration.
pub struct Pipeline {
    config: ClimindConfig,
}

impl Pipeline {
    pub fn new(config: ClimindConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClimindConfig {
        &self.config
    }

    pub fn run(&self, export: &OntologyExport) -> ClimindResult<ProcessedGraph> {
        let vocab = &self.config.vocabulary;
        vocab.validate()?;

        let processed = IngestedGraph::ingest(export, vocab)?
            .propagate()
            .reduce(vocab)
            .solve(&self.config.solutions, vocab)?
            .attribute_myths(vocab)?
            .aggregate_causal_sources()
            .compose(vocab)?;

        info!(
            nodes = processed.summary.nodes,
            mitigations = processed.summary.mitigation_solutions,
            myths = processed.summary.myths,
            views = processed.summary.views,
            "pipeline complete"
        );
        Ok(processed)
    }
}
