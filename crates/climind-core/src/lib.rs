//! # climind-core
//!
//! Foundation crate for the Climate Mind graph processor.
//! Defines the attribute model, the fixed relation/source/value vocabulary,
//! errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;
pub mod vocabulary;

// Re-export the most commonly used types at the crate root.
pub use config::{ClimindConfig, VocabularyConfig};
pub use errors::{ClimindErrorCode, ClimindResult, DomainError, GraphError, PipelineError};
pub use models::{ConceptNode, RelationEdge, Score};
pub use vocabulary::{Relation, SourceType};
