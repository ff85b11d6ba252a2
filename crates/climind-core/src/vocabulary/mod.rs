//! Closed domain vocabulary: relation types, citation source types, and the
//! personal value tables. Open vocabulary (class names, data property names,
//! the root concept) lives in [`crate::config::VocabularyConfig`].

pub mod personal_values;
pub mod relation;
pub mod source_type;

pub use personal_values::{ValueGroup, PERSONAL_VALUES_10, PERSONAL_VALUES_19};
pub use relation::Relation;
pub use source_type::SourceType;
