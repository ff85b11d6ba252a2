//! Authoring inconsistencies in the source ontology.

use super::error_code::{self, ClimindErrorCode};

/// Errors that signal the ontology itself must be fixed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("opposing scores: both 1 and -1 in {values:?}")]
    OpposingScores { values: Vec<Option<f64>> },

    #[error("opposing personal values on {node} for group {group}")]
    OpposingValues { node: String, group: String },
}

impl DomainError {
    /// Attach node and value group context to a raw collapse failure.
    pub fn in_group(self, node: &str, group: &str) -> Self {
        match self {
            Self::OpposingScores { .. } => Self::OpposingValues {
                node: node.to_string(),
                group: group.to_string(),
            },
            other => other,
        }
    }
}

impl ClimindErrorCode for DomainError {
    fn error_code(&self) -> &'static str {
        error_code::DOMAIN_INCONSISTENCY
    }
}
