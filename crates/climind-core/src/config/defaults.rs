// Single source of truth for all default values.

// --- Vocabulary ---
pub const DEFAULT_ROOT_CONCEPT: &str = "increase in greenhouse effect";
pub const DEFAULT_UNIVERSAL_CLASS: &str = "climate mind";
pub const DEFAULT_FEEDBACK_LOOP_CLASS: &str = "feedback loop";
pub const DEFAULT_CYCLE_TARGET_CLASSES: &[&str] = &[
    "increase in atmospheric greenhouse gas",
    "root cause linked to humans",
];
pub const DEFAULT_MYTH_CLASS: &str = "myth";
pub const DEFAULT_RISK_SOLUTION_CLASS: &str = "risk solution";
pub const DEFAULT_CO2_REDUCTION_PROPERTY: &str = "CO2_eq_reduced";
pub const DEFAULT_MYTH_FREQUENCY_PROPERTY: &str = "myth_frequency";
pub const DEFAULT_CONSERVATIVE_PROPERTY: &str = "conservative";
pub const DEFAULT_LIBERAL_PROPERTY: &str = "liberal";
pub const DEFAULT_LONG_DESCRIPTION_PROPERTY: &str = "schema_longDescription";

pub const DEFAULT_TEST_ONTOLOGY_CLASSES: &[&str] = &[
    "test ontology",
    "personal value",
    "achievement",
    "benevolence",
    "benevolence caring",
    "benevolence dependability",
    "conformity",
    "conformity interpersonal",
    "conformity rules",
    "face",
    "hedonism",
    "humility",
    "power",
    "power dominance",
    "power resources",
    "security",
    "security personal",
    "security societal",
    "self-direction",
    "self-direction autonomy of action",
    "self-direction autonomy of thought",
    "stimulation",
    "tradition",
    "universalism",
    "universalism concern",
    "universalism nature",
    "universalism tolerance",
];

pub const DEFAULT_NON_TEST_ONTOLOGY_CLASSES: &[&str] = &[
    "value uncategorized (to do)",
    "risk solution",
    "adaptation",
    "geoengineering",
    "indirect adaptation",
    "indirect geoengineering",
    "indirect mitigration",
    "carbon pricing",
    "carbon tax",
    "emissions trading",
    "mitigation",
    "solution to indirect adaptation barrier",
    "solution to indirect mitigation barrier",
    "solution uncategorized (to do)",
];

// --- Solutions ---
pub const DEFAULT_PARALLEL_SOLUTIONS: bool = true;

// --- Output ---
pub const DEFAULT_GRAPH_FILENAME: &str = "climate_mind_graph.json";
pub const DEFAULT_VIEWS_FILENAME: &str = "graphs_for_visualization.json";
pub const DEFAULT_TEST_ONTOLOGY_FILENAME: &str = "climate_mind_graph_test_ontology.json";
pub const DEFAULT_PRETTY_OUTPUT: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Project config ---
pub const DEFAULT_CONFIG_FILENAME: &str = "climind.toml";
