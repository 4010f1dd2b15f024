//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration (file or defaults) and apply CLI overrides
//! - Validate the final configuration
//! - Initialize logging and the optional metrics endpoint
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Overrides are validated together with the file contents

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{load_config, validate_config, BrowserConfig, ConfigError, ValidationError};
use crate::observability::{logging, metrics};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging initialisation failed: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("Metrics initialisation failed: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Settings supplied on the command line.
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    pub config_path: Option<PathBuf>,
    pub api_base: Option<String>,
}

/// Build the effective configuration.
pub fn prepare_config(options: &StartupOptions) -> Result<BrowserConfig, ConfigError> {
    let mut config = match &options.config_path {
        Some(path) => load_config(path)?,
        None => BrowserConfig::default(),
    };

    if let Some(base) = &options.api_base {
        config.api.base_url = base.clone();
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Install logging and, when enabled, the metrics endpoint.
/// Metrics need a running Tokio runtime.
pub fn init_observability(config: &BrowserConfig) -> Result<(), StartupError> {
    logging::init_logging(&config.observability)?;

    if config.observability.metrics_enabled {
        let address = &config.observability.metrics_address;
        let addr: SocketAddr = address.parse().map_err(|_| {
            ConfigError::Validation(vec![ValidationError::InvalidMetricsAddress(address.clone())])
        })?;
        metrics::init_metrics(addr)?;
    }

    tracing::info!(
        api_base = %config.api.base_url,
        request_timeout_ms = config.timeouts.request_ms,
        debounce_ms = config.search.debounce_ms,
        "Configuration loaded"
    );
    Ok(())
}
