// Copyright (c) 2025 - Cowboy AI, Inc.
//! Logging setup

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("Invalid log filter \"{directive}\": {reason}")]
    InvalidFilter { directive: String, reason: String },
}

/// Install a fmt subscriber filtered by `RUST_LOG`, or `default_directive`
/// when it is unset
///
/// Calling this again once a global subscriber exists is a no-op.
pub fn init_tracing(default_directive: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directive))
        .map_err(|e| TelemetryError::InvalidFilter {
            directive: default_directive.to_string(),
            reason: e.to_string(),
        })?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Tracing initialized");
    }

    Ok(())
}
