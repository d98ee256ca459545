//! Tracing subscriber setup. `RUST_LOG` wins over the configured filter.

use crate::error::DashboardError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global subscriber. Returns `Ok(false)` when one is already set.
pub fn init_logging(default_filter: &str) -> Result<bool, DashboardError> {
    let filter = build_filter(default_filter)?;
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok();
    Ok(installed)
}

fn build_filter(default_filter: &str) -> Result<EnvFilter, DashboardError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter)
        .map_err(|e| DashboardError::Config(format!("Invalid log filter '{}': {}", default_filter, e)))
}
