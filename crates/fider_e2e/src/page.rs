//! Browser page seam.
//!
//! The automation driver owns the tab; scenarios only see it through
//! [`Page`]. A world holds a [`PageHandle`] and hands out the same handle on
//! every read.

use crate::error::PageError;
use std::sync::Arc;
use std::time::Duration;

/// One browser tab under test.
///
/// Implemented by the automation driver. Methods take `&self` because drivers
/// keep their own connection state behind the handle.
pub trait Page: Send + Sync {
    /// Navigate to an absolute URL.
    fn goto(&self, url: &str) -> Result<(), PageError>;

    /// Current document URL.
    fn url(&self) -> String;

    /// Click the first element matching `selector`.
    fn click(&self, selector: &str) -> Result<(), PageError>;

    /// Type `value` into the first input matching `selector`.
    fn fill(&self, selector: &str, value: &str) -> Result<(), PageError>;

    /// Text of the first element matching `selector`, `None` if nothing matches.
    fn text_content(&self, selector: &str) -> Result<Option<String>, PageError>;

    /// Block until `selector` matches or `timeout` elapses.
    fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<(), PageError>;
}

/// Shared, non-owning view of a driver page.
pub type PageHandle = Arc<dyn Page>;
