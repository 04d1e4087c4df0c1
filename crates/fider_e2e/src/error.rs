//! Error types for fider_e2e operations.

use std::time::Duration;
use thiserror::Error;

/// Failures reported by a browser page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PageError {
    /// Navigation to the given URL did not complete.
    #[error("navigation to {url} failed: {reason}")]
    Navigation {
        /// Target URL
        url: String,
        /// Reason reported by the driver
        reason: String,
    },

    /// No element matched the selector.
    #[error("no element matches selector {0:?}")]
    SelectorNotFound(String),

    /// Waiting for a selector exceeded its timeout.
    #[error("timed out after {}ms waiting for {:?}", timeout.as_millis(), selector)]
    Timeout {
        /// Selector being waited for
        selector: String,
        /// Timeout that elapsed
        timeout: Duration,
    },

    /// The page was closed by the driver.
    #[error("page is closed")]
    Closed,

    /// Any other driver failure.
    #[error("driver error: {0}")]
    Driver(String),
}

/// Core error type for fider_e2e operations.
#[derive(Error, Debug)]
pub enum E2eError {
    /// Configuration error (loading, parsing, invalid values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Tenant name does not satisfy subdomain rules.
    #[error("invalid tenant name {name:?}: {reason}")]
    InvalidTenantName {
        /// The rejected name
        name: String,
        /// Which rule was broken
        reason: String,
    },

    /// World parameters could not be decoded into the requested type.
    #[error("world parameters error: {0}")]
    Parameters(String),

    /// A report attachment could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A page operation failed.
    #[error("page error: {0}")]
    Page(#[from] PageError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl E2eError {
    /// Returns a user-friendly recovery suggestion for the error, if available.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => {
                Some("Check e2e.toml against the documented keys, or delete it to use defaults.")
            }
            Self::InvalidTenantName { .. } => {
                Some("Use 2-40 lowercase letters, digits or '-', not starting or ending with '-'.")
            }
            Self::Page(PageError::Closed) => {
                Some("The page was closed before the step ran. Check scenario teardown hooks.")
            }
            Self::Page(PageError::Timeout { .. }) => {
                Some("Raise browser.default_timeout_ms in e2e.toml or check that the server is up.")
            }
            _ => None,
        }
    }
}

/// Convenience Result type for fider_e2e operations.
pub type Result<T> = std::result::Result<T, E2eError>;
