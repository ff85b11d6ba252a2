//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Filter used when `CLIMIND_LOG` is unset or invalid.
fn fallback_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(format!("climind={level}")).unwrap_or_else(|_| EnvFilter::new("climind=info"))
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_env("CLIMIND_LOG").unwrap_or_else(|_| fallback_filter(level))
}

/// Initialize the climind tracing/logging system from config.
///
/// Reads `CLIMIND_LOG` for per-target log levels.
/// Format: `CLIMIND_LOG=climind_graph=debug,climind_core=warn`
///
/// Falls back to `climind=<log_level>` if `CLIMIND_LOG` is not set or is
/// invalid. Idempotent: only the first call installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    if config.json {
        init_tracing_json(&config.log_level);
    } else {
        init_tracing_with_level(&config.log_level);
    }
}

/// Human-readable variant.
pub fn init_tracing_with_level(level: &str) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter(level))
            .init();
    });
}

/// JSON-formatted variant for machine consumption.
pub fn init_tracing_json(level: &str) {
    INIT.call_once(|| {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .with(env_filter(level))
            .init();
    });
}
