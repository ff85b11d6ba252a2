/// Number of fine-grained personal values.
pub const PERSONAL_VALUES_19_LEN: usize = 19;

/// Number of collapsed personal value categories.
pub const PERSONAL_VALUES_10_LEN: usize = 10;

/// Cytoscape class tags attached to view nodes and edges.
pub mod cyto {
    pub const TREE_ROOT: &str = "tree-root";
    pub const RISK_SOLUTION: &str = "risk-solution";
    pub const PERSONAL_VALUE: &str = "personal-value";
    pub const NO_SOURCE: &str = "no-source";
    pub const NO_LONG_DESCRIPTION: &str = "no-long-description";
    pub const SOLUTION_EDGE: &str = "solution-edge";
    pub const EDGE_NO_SOURCE: &str = "edge-no-source";
}

/// Names of the fixed views in the visualization bundle, in bundle order.
pub mod views {
    pub const UPSTREAM_MITIGATIONS: &str = "upstream_mitigations";
    pub const DOWNSTREAM_ADAPTATIONS: &str = "downstream_adaptations";
    pub const UPSTREAM: &str = "upstream";
    pub const DOWNSTREAM: &str = "downstream";
}
