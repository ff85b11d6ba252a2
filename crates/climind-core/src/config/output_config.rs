use serde::{Deserialize, Serialize};

use super::defaults;

/// Output file naming and formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// The fully processed graph.
    pub graph_file: String,
    /// The named visualization views.
    pub views_file: String,
    /// The test-ontology subgraph.
    pub test_ontology_file: String,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            graph_file: defaults::DEFAULT_GRAPH_FILENAME.to_string(),
            views_file: defaults::DEFAULT_VIEWS_FILENAME.to_string(),
            test_ontology_file: defaults::DEFAULT_TEST_ONTOLOGY_FILENAME.to_string(),
            pretty: defaults::DEFAULT_PRETTY_OUTPUT,
        }
    }
}
