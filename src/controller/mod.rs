//! Input controller subsystem.
//!
//! # Data Flow
//! ```text
//! page ready      → browser.rs ready()     → full load (once)
//! keystroke       → debounce.rs (400 ms)   → browser.rs search(latest value)
//! button click    → browser.rs on_click()  → search(current value), no delay
//!
//! every fetch:
//!     loading status + skeletons → transport → results or error state
//! ```
//!
//! # Design Decisions
//! - Only the most recently started fetch may draw its result
//! - Errors never escape; they become the error status line

pub mod browser;
pub mod debounce;

pub use browser::{CatalogBrowser, FetchOutcome};
pub use debounce::Debouncer;
