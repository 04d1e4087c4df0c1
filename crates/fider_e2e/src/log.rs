//! Log function threaded through scenario steps.

use std::fmt;
use std::sync::Arc;

/// Target used by [`LogFn::tracing`].
pub const SCENARIO_LOG_TARGET: &str = "fider_e2e::scenario";

/// A `(message) -> ()` sink supplied by the caller.
///
/// Cloning shares the underlying sink. Messages are passed through untouched.
#[derive(Clone)]
pub struct LogFn {
    sink: Arc<dyn Fn(&str) + Send + Sync>,
}

impl LogFn {
    /// Wrap a closure as a log function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self { sink: Arc::new(f) }
    }

    /// Emit each message as a `tracing` info event.
    pub fn tracing() -> Self {
        Self::new(|msg| tracing::info!(target: SCENARIO_LOG_TARGET, "{}", msg))
    }

    /// Drop every message.
    pub fn discard() -> Self {
        Self::new(|_| {})
    }

    /// Forward `msg` to the sink once.
    pub fn call(&self, msg: &str) {
        (self.sink)(msg)
    }
}

impl fmt::Debug for LogFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LogFn(<fn>)")
    }
}
