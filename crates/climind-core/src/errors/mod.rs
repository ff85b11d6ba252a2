//! Error handling for climind.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod domain_error;
pub mod error_code;
pub mod graph_error;
pub mod pipeline_error;

pub use config_error::ConfigError;
pub use domain_error::DomainError;
pub use error_code::ClimindErrorCode;
pub use graph_error::GraphError;
pub use pipeline_error::{ClimindResult, PipelineError};
