//! Transport subsystem.
//!
//! # Data Flow
//! ```text
//! controller asks for a URL
//!     → http.rs (single GET, Accept: application/json, timeout)
//!     → 2xx: body parsed as JSON → Ok(Value)
//!     → otherwise: FetchError (network, timeout, status, parse, request)
//! ```
//!
//! # Design Decisions
//! - Exactly one attempt per call; no retries, no backoff
//! - Every call has a deadline
//! - The trait is the seam the controller is tested through

pub mod error;
pub mod http;

use futures_util::future::BoxFuture;
use serde_json::Value;
use url::Url;

pub use error::{FetchError, FetchResult};
pub use http::HttpTransport;

/// Read-only JSON fetch.
pub trait Transport: Send + Sync + 'static {
    /// Fetch `url` and parse the body as JSON.
    fn get_json<'a>(&'a self, url: &'a Url) -> BoxFuture<'a, FetchResult<Value>>;
}
