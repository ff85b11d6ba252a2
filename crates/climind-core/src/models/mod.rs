//! Attribute model: concepts, relations and tri-state scores.

pub mod edge;
pub mod node;
pub mod scores;

pub use edge::RelationEdge;
pub use node::ConceptNode;
pub use scores::{collapse, DataProperties, DataValue, PoliticalValue, Score};
