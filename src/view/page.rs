//! Page view writing the rendered fragment to stdout or a file.

use std::io::Write;
use std::path::PathBuf;

use crate::render::StatusLine;
use crate::view::memory::{MemoryView, PageSnapshot};
use crate::view::View;

/// Where committed pages go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageTarget {
    Stdout,
    /// Replaced on every commit.
    File(PathBuf),
}

impl PageTarget {
    /// Write a complete page fragment, replacing earlier output for files.
    pub fn write(&self, html: &str) -> std::io::Result<()> {
        match self {
            PageTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                out.write_all(html.as_bytes())?;
                out.flush()
            }
            PageTarget::File(path) => std::fs::write(path, html),
        }
    }
}

/// Publishes the page fragment on every commit.
#[derive(Debug)]
pub struct PageView {
    state: MemoryView,
    target: PageTarget,
}

impl PageView {
    pub fn new(target: PageTarget) -> Self {
        Self {
            state: MemoryView::new(),
            target,
        }
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.state.snapshot()
    }
}

impl View for PageView {
    fn replace_list(&self, items_html: String) {
        self.state.replace_list(items_html);
    }

    fn set_status(&self, status: StatusLine) {
        self.state.set_status(status);
    }

    fn commit(&self) {
        let html = self.state.snapshot().to_html();
        if let Err(e) = self.target.write(&html) {
            tracing::error!(target_page = ?self.target, error = %e, "Failed to write page");
        }
    }
}
