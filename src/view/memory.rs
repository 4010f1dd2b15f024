//! In-memory view.

use std::sync::Mutex;

use crate::render::{count_cards, escape_html, StatusLine};
use crate::view::View;

/// What the page currently shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSnapshot {
    pub status: Option<StatusLine>,
    pub list_html: String,
    /// How many times the list has been replaced.
    pub list_renders: usize,
}

impl PageSnapshot {
    pub fn card_count(&self) -> usize {
        count_cards(&self.list_html)
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.message.as_str())
    }

    /// Status paragraph followed by the results list.
    pub fn to_html(&self) -> String {
        let (class, message) = match &self.status {
            Some(status) => (status.class_attr(), escape_html(&status.message)),
            None => ("status".to_string(), String::new()),
        };
        format!(
            "<p class=\"{}\">{}</p>\n<ul id=\"results\">{}</ul>\n",
            class, message, self.list_html
        )
    }
}

/// Keeps the latest page state in memory.
#[derive(Debug, Default)]
pub struct MemoryView {
    state: Mutex<PageSnapshot>,
}

impl MemoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> PageSnapshot {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl View for MemoryView {
    fn replace_list(&self, items_html: String) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.list_html = items_html;
        state.list_renders += 1;
    }

    fn set_status(&self, status: StatusLine) {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.status = Some(status);
    }
}
