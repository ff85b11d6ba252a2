//! Directional, relation-filtered exploration from a start concept.

pub mod bfs;

pub use bfs::{explore, reachable};

use climind_core::Relation;

/// Which edges an exploration follows from each frontier node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalDirection {
    /// Outgoing edges.
    Forward,
    /// Incoming edges.
    Reverse,
    /// Incoming, then outgoing.
    Both,
}

impl TraversalDirection {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
            Self::Both => "both",
        }
    }

    fn follows_incoming(&self) -> bool {
        matches!(self, Self::Reverse | Self::Both)
    }

    fn follows_outgoing(&self) -> bool {
        matches!(self, Self::Forward | Self::Both)
    }
}

/// Which relation types an exploration may follow.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelationFilter {
    Any,
    Only(Relation),
}

impl RelationFilter {
    pub fn causal() -> Self {
        Self::Only(Relation::CausesOrPromotes)
    }

    pub fn matches(&self, relation: &Relation) -> bool {
        match self {
            Self::Any => true,
            Self::Only(r) => r == relation,
        }
    }
}
