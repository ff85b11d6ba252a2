//! ClimindErrorCode trait for CLI and log reporting.

/// Every error enum implements this to expose a stable, upper-case code
/// that survives message wording changes.
pub trait ClimindErrorCode {
    /// Returns the error code string (e.g., "ROOT_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const ROOT_NOT_FOUND: &str = "ROOT_NOT_FOUND";
pub const NODE_NOT_FOUND: &str = "NODE_NOT_FOUND";
pub const SELF_ADAPTATION: &str = "SELF_ADAPTATION";
pub const DOMAIN_INCONSISTENCY: &str = "DOMAIN_INCONSISTENCY";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
