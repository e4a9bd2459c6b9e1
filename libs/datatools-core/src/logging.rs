//! Structured logging setup
//!
//! The library itself only emits `tracing` events. Applications that want to
//! see them can install a subscriber with [`init_logging`]; `RUST_LOG` takes
//! precedence over the configured level when it is set.

use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::DatatoolsConfig;
use crate::error::{DatatoolsError, Result};

/// Install a global `tracing` subscriber for the given configuration
///
/// # Errors
/// Returns `DatatoolsError::Configuration` if the log level is invalid or a
/// global subscriber has already been installed
pub fn init_logging(config: &DatatoolsConfig) -> Result<()> {
    let level = config.level()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.json_logs {
        let json_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);
        registry.with(json_layer).try_init()
    } else {
        let fmt_layer = fmt::layer().with_target(true);
        registry.with(fmt_layer).try_init()
    };
    installed.map_err(|e| DatatoolsError::configuration(format!("Failed to initialize tracing: {e}")))?;

    info!("Tracing initialized with level: {}", config.log_level);
    Ok(())
}
