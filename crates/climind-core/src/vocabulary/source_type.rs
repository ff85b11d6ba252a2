//! The 8 citation source types recognised on nodes and edges.

use serde::{Deserialize, Serialize};

/// A citation source type. Declaration order is the canonical flattening order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SourceType {
    #[serde(rename = "dc_source")]
    DirectCitation,
    #[serde(rename = "schema_academicBook")]
    AcademicBook,
    #[serde(rename = "schema_academicSourceNoPaywall")]
    AcademicNoPaywall,
    #[serde(rename = "schema_academicSourceWithPaywall")]
    AcademicWithPaywall,
    #[serde(rename = "schema_governmentSource")]
    Government,
    #[serde(rename = "schema_mediaSource")]
    Media,
    #[serde(rename = "schema_mediaSourceForConservatives")]
    MediaForConservatives,
    #[serde(rename = "schema_organizationSource")]
    Organization,
}

impl SourceType {
    /// Total number of source types.
    pub const COUNT: usize = 8;

    /// All variants, in canonical order.
    pub const ALL: [SourceType; 8] = [
        Self::DirectCitation,
        Self::AcademicBook,
        Self::AcademicNoPaywall,
        Self::AcademicWithPaywall,
        Self::Government,
        Self::Media,
        Self::MediaForConservatives,
        Self::Organization,
    ];

    /// The annotation property key for this source type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DirectCitation => "dc_source",
            Self::AcademicBook => "schema_academicBook",
            Self::AcademicNoPaywall => "schema_academicSourceNoPaywall",
            Self::AcademicWithPaywall => "schema_academicSourceWithPaywall",
            Self::Government => "schema_governmentSource",
            Self::Media => "schema_mediaSource",
            Self::MediaForConservatives => "schema_mediaSourceForConservatives",
            Self::Organization => "schema_organizationSource",
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
