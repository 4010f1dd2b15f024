//! Rendering subsystem.
//!
//! # Data Flow
//! ```text
//! fetch started   → cards.rs loading(n)     → skeleton items
//! fetch succeeded → cards.rs products(items) → cards or empty state
//! every status    → status.rs StatusLine     → text + style class
//! ```
//!
//! # Design Decisions
//! - Output is a complete replacement of the list contents, never a patch
//! - All backend and user text passes through escape.rs before insertion

pub mod cards;
pub mod escape;
pub mod status;

pub use cards::{count_cards, format_price, Renderer};
pub use escape::escape_html;
pub use status::{Status, StatusLine};
