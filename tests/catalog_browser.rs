//! End-to-end tests: controller, reqwest transport and a mock collection API.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use catalog_browser::config::BrowserConfig;
use catalog_browser::controller::{CatalogBrowser, FetchOutcome};
use catalog_browser::render::{Status, StatusLine};
use catalog_browser::transport::HttpTransport;
use catalog_browser::view::MemoryView;
use serde_json::{json, Value};

mod common;
use common::{Reply, RequestLog, SeenRequest};

type Browser = CatalogBrowser<HttpTransport, Arc<MemoryView>>;

fn catalog() -> Vec<Value> {
    vec![
        json!({"id": 1, "name": "Desk Lamp", "category": "lighting", "price": 19.5}),
        json!({"id": 2, "name": "Floor Lamp", "category": "lighting", "price": "89.9"}),
        json!({"id": 3, "name": "Notebook", "price": 7}),
        json!({"id": 4, "name": "<script>alert('x')</script>", "category": "tests & \"quotes\"", "price": 1}),
    ]
}

/// Serves `/products` with case-insensitive `name_like` filtering.
fn json_server(request: SeenRequest) -> Reply {
    if request.path() != "/products" {
        return Reply::status(404, "{}");
    }
    let items: Vec<Value> = match request.query_param("name_like") {
        Some(q) => catalog()
            .into_iter()
            .filter(|p| {
                p["name"]
                    .as_str()
                    .is_some_and(|n| n.to_lowercase().contains(&q.to_lowercase()))
            })
            .collect(),
        None => catalog(),
    };
    Reply::json(Value::Array(items).to_string())
}

fn browser_for(addr: SocketAddr, config: BrowserConfig) -> (Browser, Arc<MemoryView>) {
    let mut config = config;
    config.api.base_url = format!("http://{}", addr);

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let transport = HttpTransport::with_client(client, config.timeouts.request());
    let view = Arc::new(MemoryView::new());
    let browser = CatalogBrowser::new(&config, transport, Arc::clone(&view)).unwrap();
    (browser, view)
}

async fn catalog_backend() -> (SocketAddr, RequestLog) {
    common::start_programmable_backend(|request| async move { json_server(request) }).await
}

#[tokio::test]
async fn test_page_ready_renders_catalog() {
    let (addr, log) = catalog_backend().await;
    let (browser, view) = browser_for(addr, BrowserConfig::default());

    assert_eq!(browser.ready().await, Some(FetchOutcome::Rendered(4)));

    let page = view.snapshot();
    assert_eq!(page.card_count(), 4);
    assert_eq!(page.status, Some(StatusLine::ok("Products loaded.")));
    assert!(page.list_html.contains("R$ 19.50"));
    assert!(page.list_html.contains("R$ 89.90"));
    assert!(page.list_html.contains("#3 · general"));
    assert!(page
        .list_html
        .contains("<h3>&lt;script&gt;alert(&#039;x&#039;)&lt;/script&gt;</h3>"));
    assert!(page.list_html.contains("tests &amp; &quot;quotes&quot;"));
    assert!(!page.list_html.contains("<script>"));

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].target, "/products");
    assert_eq!(seen[0].header("accept"), Some("application/json"));
}

#[tokio::test]
async fn test_click_search_filters_on_backend() {
    let (addr, log) = catalog_backend().await;
    let (browser, view) = browser_for(addr, BrowserConfig::default());

    assert_eq!(browser.on_click("  desk lamp ").await, FetchOutcome::Rendered(1));

    let page = view.snapshot();
    assert_eq!(page.card_count(), 1);
    assert!(page.list_html.contains("<h3>Desk Lamp</h3>"));
    assert_eq!(page.status_message(), Some("Results for \"desk lamp\"."));

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen[0].path(), "/products");
    assert_eq!(seen[0].query_param("name_like").as_deref(), Some("desk lamp"));
}

#[tokio::test]
async fn test_search_without_matches_shows_empty_state() {
    let (addr, _log) = catalog_backend().await;
    let (browser, view) = browser_for(addr, BrowserConfig::default());

    assert_eq!(browser.on_click("sofa").await, FetchOutcome::Rendered(0));
    let page = view.snapshot();
    assert_eq!(page.card_count(), 1);
    assert!(page.list_html.contains("No results."));
}

#[tokio::test]
async fn test_blank_click_requests_unfiltered_collection() {
    let (addr, log) = catalog_backend().await;
    let (browser, view) = browser_for(addr, BrowserConfig::default());

    browser.ready().await;
    browser.on_click(" \t ").await;

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].target, seen[1].target);
    assert_eq!(seen[1].target, "/products");
    assert_eq!(view.snapshot().card_count(), 4);
}

#[tokio::test]
async fn test_typing_burst_sends_one_request() {
    let (addr, log) = catalog_backend().await;
    let (browser, view) = browser_for(addr, BrowserConfig::default());

    for value in ["f", "fl", "flo", "floo", "floor"] {
        browser.on_input(value);
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(log.lock().unwrap().is_empty());

    browser.settle().await;

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen.len(), 1, "Burst should collapse into one request");
    assert_eq!(seen[0].query_param("name_like").as_deref(), Some("floor"));
    assert_eq!(view.snapshot().card_count(), 1);
    assert_eq!(view.snapshot().status_message(), Some("Results for \"floor\"."));
}

#[tokio::test]
async fn test_backend_error_clears_results() {
    let (addr, _log) = common::start_programmable_backend(|request| async move {
        if request.query_param("name_like").is_some() {
            Reply::status(500, r#"{"error":"boom"}"#)
        } else {
            json_server(request)
        }
    })
    .await;
    let (browser, view) = browser_for(addr, BrowserConfig::default());

    browser.ready().await;
    assert_eq!(view.snapshot().card_count(), 4);

    assert_eq!(browser.on_click("lamp").await, FetchOutcome::Failed);
    let page = view.snapshot();
    assert_eq!(page.list_html, "");
    assert_eq!(page.status.as_ref().map(|s| s.status), Some(Status::Error));
    assert_eq!(
        page.status_message(),
        Some("Search failed. Check your connection and try again.")
    );
}

#[tokio::test]
async fn test_timeout_shows_load_error() {
    let (addr, _log) = common::start_programmable_backend(|request| async move {
        json_server(request).delayed(Duration::from_secs(2))
    })
    .await;
    let mut config = BrowserConfig::default();
    config.timeouts.request_ms = 300;
    let (browser, view) = browser_for(addr, config);

    assert_eq!(browser.ready().await, Some(FetchOutcome::Failed));
    let page = view.snapshot();
    assert_eq!(page.card_count(), 0);
    assert_eq!(
        page.status,
        Some(StatusLine::error("Could not load the data. Please try again."))
    );
}

#[tokio::test]
async fn test_unreachable_backend_shows_load_error() {
    let addr = common::closed_port().await;
    let (browser, view) = browser_for(addr, BrowserConfig::default());

    assert_eq!(browser.load_all().await, FetchOutcome::Failed);
    assert_eq!(
        view.snapshot().status_message(),
        Some("Could not load the data. Please try again.")
    );
}

#[tokio::test]
async fn test_invalid_json_shows_load_error() {
    let (addr, _log) = common::start_json_backend("[{\"id\": 1,").await;
    let (browser, view) = browser_for(addr, BrowserConfig::default());

    assert_eq!(browser.load_all().await, FetchOutcome::Failed);
    assert_eq!(view.snapshot().list_html, "");
}

#[tokio::test]
async fn test_unbuildable_request_shows_load_error() {
    let mut config = BrowserConfig::default();
    config.api.base_url = "ftp://example.com".to_string();

    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let transport = HttpTransport::with_client(client, config.timeouts.request());
    let view = Arc::new(MemoryView::new());
    let browser = CatalogBrowser::new(&config, transport, Arc::clone(&view)).unwrap();

    assert_eq!(browser.on_click("lamp").await, FetchOutcome::Failed);
    let page = view.snapshot();
    assert_eq!(page.list_html, "");
    assert_eq!(
        page.status,
        Some(StatusLine::error(
            "Search failed. Check your connection and try again."
        ))
    );
}
