//! # climind-graph
//!
//! Causal graph processing engine for Climate Mind.
//!
//! Turns a raw, possibly cyclic ontology graph into an annotated graph with
//! edge citations, mitigation and adaptation solution rankings, myth
//! attributions and causal sources, plus the named views the visualization
//! consumer reads.

pub mod causal_sources;
pub mod citations;
pub mod graph;
pub mod myths;
pub mod pipeline;
pub mod propagation;
pub mod solutions;
pub mod traversal;
pub mod views;

pub use graph::{ConceptGraph, GraphDocument, OntologyExport};
pub use pipeline::{Pipeline, PipelineSummary, ProcessedGraph};
pub use traversal::{RelationFilter, TraversalDirection};
pub use views::GraphViews;
