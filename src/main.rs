//! Catalog Browser (v1)
//!
//! A command-line catalog client built with Tokio and reqwest.
//!
//! # Architecture Overview
//!
//! ```text
//!   page events                 ┌──────────────────────────────────────────────┐
//!   (ready, input, click)       │               CATALOG BROWSER                │
//!   ────────────────────────────┼─▶┌────────────┐   ┌──────────┐               │
//!                               │  │ controller │──▶│ debounce │               │
//!                               │  │  browser   │◀──│  timer   │               │
//!                               │  └─────┬──────┘   └──────────┘               │
//!                               │        │ GET {base}/products[?name_like=q]   │
//!                               │        ▼                                     │
//!                               │  ┌────────────┐          ┌──────────────┐    │
//!                               │  │ transport  │─────────▶│   backend    │────┼──▶ JSON API
//!                               │  │  (reqwest) │◀─────────│  (external)  │    │
//!                               │  └─────┬──────┘          └──────────────┘    │
//!                               │        ▼                                     │
//!   page fragment               │  ┌────────────┐   ┌──────────┐               │
//!   ◀───────────────────────────┼──│    view    │◀──│  render  │               │
//!   (stdout or file)            │  └────────────┘   └──────────┘               │
//!                               │                                              │
//!                               │  config · observability · lifecycle          │
//!                               └──────────────────────────────────────────────┘
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

use catalog_browser::controller::{CatalogBrowser, FetchOutcome};
use catalog_browser::lifecycle::startup::init_observability;
use catalog_browser::lifecycle::{prepare_config, signals, Shutdown, StartupOptions};
use catalog_browser::transport::HttpTransport;
use catalog_browser::view::{MemoryView, PageTarget, PageView};

#[derive(Parser)]
#[command(name = "catalog-browser")]
#[command(about = "Browse and search a JSON product catalog", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the catalog API (overrides the config file)
    #[arg(short = 'b', long)]
    api_base: Option<String>,

    /// Write the page fragment to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the whole catalog once
    List,
    /// Search products by name, as if the search button was clicked
    Search {
        query: String,
    },
    /// Interactive session: each stdin line is the new search box content
    /// (debounced); an empty line clicks the search button
    Watch,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = prepare_config(&StartupOptions {
        config_path: cli.config,
        api_base: cli.api_base,
    })?;
    init_observability(&config)?;

    let transport = HttpTransport::new(&config.timeouts)?;
    let target = cli.out.map(PageTarget::File).unwrap_or(PageTarget::Stdout);

    match cli.command {
        Commands::List => {
            let browser = CatalogBrowser::new(&config, transport, MemoryView::new())?;
            let outcome = browser.ready().await;
            target.write(&browser.view().snapshot().to_html())?;
            Ok(exit_code(outcome))
        }
        Commands::Search { query } => {
            let browser = CatalogBrowser::new(&config, transport, MemoryView::new())?;
            let outcome = browser.on_click(&query).await;
            target.write(&browser.view().snapshot().to_html())?;
            Ok(exit_code(Some(outcome)))
        }
        Commands::Watch => {
            let browser = CatalogBrowser::new(&config, transport, PageView::new(target))?;
            watch(browser).await?;
            tracing::info!("Session ended");
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn watch(
    browser: CatalogBrowser<HttpTransport, PageView>,
) -> Result<(), Box<dyn std::error::Error>> {
    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_ctrl_c(shutdown.clone()));

    // Shutdown also cuts short an in-flight load or click search.
    match shutdown.run_until(read_events(&browser)).await {
        Some(result) => result?,
        None => tracing::debug!("Session interrupted"),
    }
    Ok(())
}

async fn read_events(browser: &CatalogBrowser<HttpTransport, PageView>) -> std::io::Result<()> {
    browser.ready().await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut current = String::new();

    while let Some(line) = lines.next_line().await? {
        if line.is_empty() {
            browser.on_click(&current).await;
        } else {
            current = line;
            browser.on_input(&current);
        }
    }

    tracing::debug!("Input closed, waiting for pending search");
    browser.settle().await;
    Ok(())
}

fn exit_code(outcome: Option<FetchOutcome>) -> ExitCode {
    match outcome {
        Some(FetchOutcome::Failed) => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}
