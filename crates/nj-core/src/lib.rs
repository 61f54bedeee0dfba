//! Shared primitives used across Nightjar crates.

/// Result alias used across the workspace.
pub type BrowserResult<T> = Result<T, BrowserError>;

/// Input could not be parsed as an `http`/`https` URL with a host.
pub const INVALID_URL_FORMAT: &str = "net.url.invalid";

/// Advisory model weights are missing or have the wrong shape.
pub const CLASSIFIER_UNAVAILABLE: &str = "advisory.classifier_unavailable";

/// Configuration rejected during startup validation.
pub const INVALID_CONFIG: &str = "config.invalid";

/// Top-level error type carrying a dotted code and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct BrowserError {
    pub code: &'static str,
    pub message: String,
}

impl BrowserError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_url(message: impl Into<String>) -> Self {
        Self::new(INVALID_URL_FORMAT, message)
    }

    pub fn classifier_unavailable(message: impl Into<String>) -> Self {
        Self::new(CLASSIFIER_UNAVAILABLE, message)
    }
}
