//! Graph lookup and invariant errors.

use super::error_code::{self, ClimindErrorCode};

/// Errors raised while building or walking the concept graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("root concept not found in graph: {root}")]
    RootNotFound { root: String },

    #[error("node not found: {label}")]
    NodeNotFound { label: String },

    #[error("{node} is listed as its own adaptation solution")]
    SelfAdaptation { node: String },
}

impl ClimindErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound { .. } => error_code::ROOT_NOT_FOUND,
            Self::NodeNotFound { .. } => error_code::NODE_NOT_FOUND,
            Self::SelfAdaptation { .. } => error_code::SELF_ADAPTATION,
        }
    }
}
