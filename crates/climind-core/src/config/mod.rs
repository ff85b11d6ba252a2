pub mod climind_config;
pub mod defaults;
pub mod observability_config;
pub mod output_config;
pub mod solution_config;
pub mod vocabulary_config;

pub use climind_config::{CliOverrides, ClimindConfig};
pub use observability_config::ObservabilityConfig;
pub use output_config::OutputConfig;
pub use solution_config::{AdaptationPaths, SelfAdaptationPolicy, SolutionConfig};
pub use vocabulary_config::VocabularyConfig;
