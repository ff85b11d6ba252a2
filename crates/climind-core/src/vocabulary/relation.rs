//! Relation types carried on graph edges.
//! Three are interpreted by the pipeline; every other label passes through opaquely.

use serde::{Deserialize, Serialize};

/// The relation type of an edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Relation {
    /// Source causes or promotes target.
    CausesOrPromotes,
    /// Source is inhibited, prevented, blocked or slowed by target (a solution).
    IsInhibitedBy,
    /// Source is a myth about target.
    IsAMythAbout,
    /// Any other ontology relation, carried verbatim.
    Other(String),
}

impl Relation {
    pub const CAUSES_OR_PROMOTES: &'static str = "causes_or_promotes";
    pub const IS_INHIBITED_BY: &'static str = "is_inhibited_or_prevented_or_blocked_or_slowed_by";
    pub const IS_A_MYTH_ABOUT: &'static str = "is_a_myth_about";

    /// Parse from the ontology's relation label. Never fails.
    pub fn from_str_name(s: &str) -> Self {
        match s {
            Self::CAUSES_OR_PROMOTES => Self::CausesOrPromotes,
            Self::IS_INHIBITED_BY => Self::IsInhibitedBy,
            Self::IS_A_MYTH_ABOUT => Self::IsAMythAbout,
            other => Self::Other(other.to_string()),
        }
    }

    /// String name for this relation.
    pub fn as_str(&self) -> &str {
        match self {
            Self::CausesOrPromotes => Self::CAUSES_OR_PROMOTES,
            Self::IsInhibitedBy => Self::IS_INHIBITED_BY,
            Self::IsAMythAbout => Self::IS_A_MYTH_ABOUT,
            Self::Other(name) => name,
        }
    }

    /// Whether the pipeline gives this relation special meaning.
    pub fn is_interpreted(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for Relation {
    fn from(value: String) -> Self {
        Self::from_str_name(&value)
    }
}

impl From<Relation> for String {
    fn from(value: Relation) -> Self {
        match value {
            Relation::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
