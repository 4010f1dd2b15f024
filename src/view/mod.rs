//! View subsystem: the page regions the controller draws into.
//!
//! # Responsibilities
//! - Hold the results list contents and the status line
//! - Publish a consistent page after each controller transition
//!
//! # Design Decisions
//! - Views are infallible from the controller's point of view; output
//!   failures are logged where they happen
//! - The list is always replaced whole

pub mod memory;
pub mod page;

use std::sync::Arc;

use crate::render::StatusLine;

pub use memory::{MemoryView, PageSnapshot};
pub use page::{PageTarget, PageView};

/// The page surface: a results list and a status region.
pub trait View: Send + Sync + 'static {
    /// Replace the results list contents with `items_html`.
    fn replace_list(&self, items_html: String);

    /// Set the status text and style.
    fn set_status(&self, status: StatusLine);

    /// Called once the list and status of a transition are both in place.
    fn commit(&self) {}
}

impl<V: View> View for Arc<V> {
    fn replace_list(&self, items_html: String) {
        (**self).replace_list(items_html)
    }

    fn set_status(&self, status: StatusLine) {
        (**self).set_status(status)
    }

    fn commit(&self) {
        (**self).commit()
    }
}
