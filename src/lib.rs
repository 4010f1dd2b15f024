//! Catalog Browser Library
//!
//! Fetches a product list from a JSON collection API, renders it as HTML
//! cards, and supports debounced name search.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod lifecycle;
pub mod observability;
pub mod render;
pub mod transport;
pub mod view;

pub use catalog::{Product, ProductId, ProductsEndpoint};
pub use config::BrowserConfig;
pub use controller::{CatalogBrowser, FetchOutcome};
pub use lifecycle::Shutdown;
pub use transport::{FetchError, HttpTransport, Transport};
pub use view::{MemoryView, PageTarget, PageView, View};
