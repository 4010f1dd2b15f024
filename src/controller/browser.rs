//! Catalog browser controller.
//!
//! # Responsibilities
//! - Translate page events (ready, keystroke, button click) into fetches
//! - Drive the view through loading → (ok | error) for every fetch
//! - Drop responses of fetches superseded by a newer one

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use url::Url;

use crate::catalog::{decode_products, ProductsEndpoint};
use crate::config::{BrowserConfig, MessagesConfig};
use crate::controller::debounce::Debouncer;
use crate::observability::metrics;
use crate::render::{Renderer, StatusLine};
use crate::transport::Transport;
use crate::view::View;

/// How a single fetch ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Results drawn; the count is the number of products (0 for the empty state).
    Rendered(usize),
    /// The fetch failed and the error state was drawn.
    Failed,
    /// A newer fetch started before this one completed; nothing was drawn.
    Superseded,
}

/// One fetch and the texts that accompany it.
struct FetchPlan {
    kind: &'static str,
    url: Url,
    placeholders: usize,
    loading: String,
    done: String,
    failed: String,
}

struct Inner<T, V> {
    transport: T,
    view: V,
    renderer: Renderer,
    endpoint: ProductsEndpoint,
    messages: MessagesConfig,
    load_placeholders: usize,
    search_placeholders: usize,
    debouncer: Debouncer,
    /// Sequence number of the most recently started fetch. Rendering happens
    /// under this lock.
    latest: Mutex<u64>,
    ready: AtomicBool,
}

/// The catalog page controller. Cheap to clone; clones share state.
pub struct CatalogBrowser<T, V> {
    inner: Arc<Inner<T, V>>,
}

impl<T, V> Clone for CatalogBrowser<T, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport, V: View> CatalogBrowser<T, V> {
    /// Create a controller over `transport` and `view`.
    pub fn new(config: &BrowserConfig, transport: T, view: V) -> Result<Self, url::ParseError> {
        let endpoint = ProductsEndpoint::from_config(&config.api)?;

        tracing::debug!(
            collection = %endpoint.all(),
            debounce_ms = config.search.debounce_ms,
            "Catalog browser created"
        );

        Ok(Self {
            inner: Arc::new(Inner {
                transport,
                view,
                renderer: Renderer::new(&config.render),
                endpoint,
                messages: config.messages.clone(),
                load_placeholders: config.render.load_placeholders,
                search_placeholders: config.render.search_placeholders,
                debouncer: Debouncer::new(config.search.debounce()),
                latest: Mutex::new(0),
                ready: AtomicBool::new(false),
            }),
        })
    }

    pub fn view(&self) -> &V {
        &self.inner.view
    }

    /// Page became ready: run the initial full load. Only the first call
    /// loads; later calls return `None`.
    pub async fn ready(&self) -> Option<FetchOutcome> {
        if self.inner.ready.swap(true, Ordering::SeqCst) {
            tracing::debug!("Page already initialised, ignoring ready event");
            return None;
        }
        Some(self.load_all().await)
    }

    /// Fetch and show the whole collection.
    pub async fn load_all(&self) -> FetchOutcome {
        let messages = &self.inner.messages;
        self.run(FetchPlan {
            kind: "load",
            url: self.inner.endpoint.all(),
            placeholders: self.inner.load_placeholders,
            loading: messages.loading.clone(),
            done: messages.loaded.clone(),
            failed: messages.load_failed.clone(),
        })
        .await
    }

    /// Fetch and show products whose name matches `query`. The query is
    /// trimmed; an empty query is a full load.
    pub async fn search(&self, query: &str) -> FetchOutcome {
        let query = query.trim();
        if query.is_empty() {
            return self.load_all().await;
        }

        let messages = &self.inner.messages;
        self.run(FetchPlan {
            kind: "search",
            url: self.inner.endpoint.matching(query),
            placeholders: self.inner.search_placeholders,
            loading: MessagesConfig::with_query(&messages.searching, query),
            done: MessagesConfig::with_query(&messages.search_results, query),
            failed: messages.search_failed.clone(),
        })
        .await
    }

    /// Search box content changed. The search fires once the input has
    /// been quiet for the debounce interval, with the latest content.
    pub fn on_input(&self, value: &str) {
        let browser = self.clone();
        let value = value.to_string();
        self.inner.debouncer.call(async move {
            browser.search(&value).await;
        });
    }

    /// Search button clicked: search immediately with the current content.
    pub async fn on_click(&self, value: &str) -> FetchOutcome {
        self.search(value).await
    }

    /// True while a debounced search is waiting for the input to go quiet.
    pub fn search_pending(&self) -> bool {
        self.inner.debouncer.is_pending()
    }

    /// Wait for the pending debounced search, if any, to fire and finish.
    pub async fn settle(&self) {
        self.inner.debouncer.settle().await;
    }

    fn latest(&self) -> MutexGuard<'_, u64> {
        self.inner.latest.lock().unwrap_or_else(|e| e.into_inner())
    }

    async fn run(&self, plan: FetchPlan) -> FetchOutcome {
        let ticket = self.begin(&plan);
        tracing::debug!(kind = plan.kind, url = %plan.url, ticket, "Fetch started");

        let result = self
            .inner
            .transport
            .get_json(&plan.url)
            .await
            .map(decode_products);

        let view = &self.inner.view;
        let latest = self.latest();
        if *latest != ticket {
            tracing::debug!(
                kind = plan.kind,
                ticket,
                latest = *latest,
                "Discarding response of superseded fetch"
            );
            metrics::record_stale_response();
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(products) => {
                let count = products.as_ref().map_or(0, Vec::len);
                view.replace_list(self.inner.renderer.products(products.as_deref()));
                view.set_status(StatusLine::ok(plan.done));
                view.commit();
                tracing::info!(kind = plan.kind, count, "Catalog rendered");
                FetchOutcome::Rendered(count)
            }
            Err(e) => {
                tracing::error!(
                    kind = plan.kind,
                    url = %plan.url,
                    error = %e,
                    error_kind = e.kind(),
                    "Catalog fetch failed"
                );
                view.replace_list(String::new());
                view.set_status(StatusLine::error(plan.failed));
                view.commit();
                FetchOutcome::Failed
            }
        }
    }

    /// Claim the next sequence number and draw the loading state.
    fn begin(&self, plan: &FetchPlan) -> u64 {
        let view = &self.inner.view;
        let mut latest = self.latest();
        *latest += 1;

        view.set_status(StatusLine::loading(plan.loading.clone()));
        view.replace_list(self.inner.renderer.loading(plan.placeholders));
        view.commit();
        *latest
    }
}
