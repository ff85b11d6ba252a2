//! Graph storage, JSON boundary documents, and structural operations.

pub mod acyclic;
pub mod concept_graph;
pub mod document;
pub mod ingest;
pub mod paths;
pub mod subgraph;

pub use acyclic::{make_acyclic, AcyclicReduction};
pub use concept_graph::{Adjacent, ConceptGraph};
pub use document::{ConceptRecord, EdgeRecord, GraphDocument, OntologyExport};
pub use ingest::{ingest, IngestReport};
pub use paths::{nodes_on_simple_paths, SimplePaths};
pub use subgraph::union_subgraph;
