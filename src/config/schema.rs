//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the browser.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the catalog browser.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct BrowserConfig {
    /// Backend API location and query conventions.
    pub api: ApiConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Search input behaviour.
    pub search: SearchConfig,

    /// Card and placeholder rendering.
    pub render: RenderConfig,

    /// Status line texts.
    pub messages: MessagesConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Backend API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the collection API (e.g., "http://localhost:3000").
    pub base_url: String,

    /// Path of the product collection, appended to the base URL's path.
    pub products_path: String,

    /// Query parameter used for substring matching on product names.
    pub filter_param: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            products_path: "/products".to_string(),
            filter_param: "name_like".to_string(),
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Whole-request timeout (send, status, body) in milliseconds.
    pub request_ms: u64,
}

impl TimeoutConfig {
    pub fn request(&self) -> Duration {
        Duration::from_millis(self.request_ms)
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_ms: 8_000 }
    }
}

/// Search input configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before a search fires.
    pub debounce_ms: u64,
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 400 }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix shown before every price.
    pub currency_prefix: String,

    /// Category shown when a product has none.
    pub default_category: String,

    /// Text of the single entry shown for an empty result.
    pub empty_message: String,

    /// Skeleton items shown during a full load.
    pub load_placeholders: usize,

    /// Skeleton items shown during a search.
    pub search_placeholders: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            currency_prefix: "R$".to_string(),
            default_category: "general".to_string(),
            empty_message: "No results.".to_string(),
            load_placeholders: 6,
            search_placeholders: 4,
        }
    }
}

/// Status line texts. `{query}` is replaced by the search query.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MessagesConfig {
    pub loading: String,
    pub loaded: String,
    pub load_failed: String,
    pub searching: String,
    pub search_results: String,
    pub search_failed: String,
}

impl MessagesConfig {
    /// Substitute `{query}` in a message template.
    pub fn with_query(template: &str, query: &str) -> String {
        template.replace("{query}", query)
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            loading: "Loading products...".to_string(),
            loaded: "Products loaded.".to_string(),
            load_failed: "Could not load the data. Please try again.".to_string(),
            searching: "Searching for \"{query}\"...".to_string(),
            search_results: "Results for \"{query}\".".to_string(),
            search_failed: "Search failed. Check your connection and try again.".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    pub log_level: String,

    /// Enable the Prometheus scrape endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
