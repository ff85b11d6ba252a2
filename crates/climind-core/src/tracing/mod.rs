//! Observability setup for climind.
//! `tracing` crate with `EnvFilter`, per-target log levels.
//! Only binaries install a subscriber.

pub mod setup;

pub use setup::{init_tracing, init_tracing_json, init_tracing_with_level};
