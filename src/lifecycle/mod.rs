//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Apply CLI overrides → Validate → Init logging/metrics
//!
//! Shutdown (shutdown.rs):
//!     Signal received → watch loop stops reading input → pending search settles → Exit
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) → Trigger shutdown
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{prepare_config, StartupError, StartupOptions};
