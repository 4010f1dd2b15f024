//! Status line shown above the results list.

/// Display state of the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Loading,
    Ok,
    Error,
}

impl Status {
    /// Style class modifier.
    pub fn class(&self) -> &'static str {
        match self {
            Status::Loading => "loading",
            Status::Ok => "ok",
            Status::Error => "error",
        }
    }
}

/// A status plus its human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub status: Status,
    pub message: String,
}

impl StatusLine {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn loading(message: impl Into<String>) -> Self {
        Self::new(Status::Loading, message)
    }

    pub fn ok(message: impl Into<String>) -> Self {
        Self::new(Status::Ok, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Status::Error, message)
    }

    /// Full class attribute, e.g. `status error`.
    pub fn class_attr(&self) -> String {
        format!("status {}", self.status.class())
    }
}
