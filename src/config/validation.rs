//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, placeholder counts > 0)
//! - Check that URLs and addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BrowserConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;
use thiserror::Error;
use url::Url;

use crate::config::schema::BrowserConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api.base_url '{url}' is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("api.products_path '{0}' must start with '/'")]
    InvalidProductsPath(String),

    #[error("api.filter_param must not be empty")]
    EmptyFilterParam,

    #[error("timeouts.request_ms must be greater than zero")]
    ZeroRequestTimeout,

    #[error("render.{0} must be greater than zero")]
    ZeroPlaceholders(&'static str),

    #[error("observability.metrics_address '{0}' is not a socket address")]
    InvalidMetricsAddress(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &BrowserConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.api.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.api.base_url.clone(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }),
        Err(e) => errors.push(ValidationError::InvalidBaseUrl {
            url: config.api.base_url.clone(),
            reason: e.to_string(),
        }),
    }

    if !config.api.products_path.starts_with('/') {
        errors.push(ValidationError::InvalidProductsPath(
            config.api.products_path.clone(),
        ));
    }

    if config.api.filter_param.trim().is_empty() {
        errors.push(ValidationError::EmptyFilterParam);
    }

    if config.timeouts.request_ms == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config.render.load_placeholders == 0 {
        errors.push(ValidationError::ZeroPlaceholders("load_placeholders"));
    }
    if config.render.search_placeholders == 0 {
        errors.push(ValidationError::ZeroPlaceholders("search_placeholders"));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
