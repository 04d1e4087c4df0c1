//! Capabilities every scenario world gets from the test runner.
//!
//! The runner owns the report. Worlds reach it through an [`AttachmentSink`]
//! and read the run's parameters as JSON.

use crate::error::{E2eError, Result};
use crate::log::LogFn;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Arc, Mutex};

/// Media type the runner renders as a log line.
pub const LOG_MEDIA_TYPE: &str = "text/x.cucumber.log+plain";

/// Media type for links.
pub const LINK_MEDIA_TYPE: &str = "text/uri-list";

/// Media type for JSON attachments.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Attachment payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentBody {
    Text(String),
    Binary(Vec<u8>),
}

/// A single item attached to the scenario report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub body: AttachmentBody,
    pub media_type: String,
    pub file_name: Option<String>,
}

impl Attachment {
    /// Text attachment with the given media type.
    pub fn text(text: impl Into<String>, media_type: impl Into<String>) -> Self {
        Self {
            body: AttachmentBody::Text(text.into()),
            media_type: media_type.into(),
            file_name: None,
        }
    }

    /// Binary attachment with the given media type.
    pub fn binary(data: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            body: AttachmentBody::Binary(data),
            media_type: media_type.into(),
            file_name: None,
        }
    }

    /// Set the file name shown in the report.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Body as text, if it is textual.
    pub fn as_text(&self) -> Option<&str> {
        match &self.body {
            AttachmentBody::Text(text) => Some(text),
            AttachmentBody::Binary(_) => None,
        }
    }
}

/// Where the runner collects attachments.
pub trait AttachmentSink: Send + Sync {
    fn attach(&self, attachment: Attachment);
}

/// In-memory report that keeps attachments in arrival order.
#[derive(Debug, Default)]
pub struct MemoryReport {
    attachments: Mutex<Vec<Attachment>>,
}

impl MemoryReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything attached so far.
    pub fn attachments(&self) -> Vec<Attachment> {
        self.attachments
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Text of every log attachment, in order.
    pub fn log_lines(&self) -> Vec<String> {
        self.attachments()
            .into_iter()
            .filter(|a| a.media_type == LOG_MEDIA_TYPE)
            .filter_map(|a| a.as_text().map(str::to_string))
            .collect()
    }
}

impl AttachmentSink for MemoryReport {
    fn attach(&self, attachment: Attachment) {
        self.attachments
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(attachment);
    }
}

/// Runner-provided base of every scenario world.
#[derive(Clone)]
pub struct BaseWorld {
    parameters: serde_json::Value,
    sink: Arc<dyn AttachmentSink>,
}

impl BaseWorld {
    /// Create a base world from the run's parameters and the report sink.
    pub fn new(parameters: serde_json::Value, sink: Arc<dyn AttachmentSink>) -> Self {
        Self { parameters, sink }
    }

    /// Raw world parameters.
    pub fn parameters(&self) -> &serde_json::Value {
        &self.parameters
    }

    /// Decode world parameters into `T`.
    pub fn typed_parameters<T: DeserializeOwned>(&self) -> Result<T> {
        T::deserialize(&self.parameters).map_err(|e| E2eError::Parameters(e.to_string()))
    }

    /// Attach an item to the report.
    pub fn attach(&self, attachment: Attachment) {
        self.sink.attach(attachment);
    }

    /// Serialize `value` and attach it as JSON.
    pub fn attach_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let text =
            serde_json::to_string(value).map_err(|e| E2eError::Serialization(e.to_string()))?;
        self.attach(Attachment::text(text, JSON_MEDIA_TYPE));
        Ok(())
    }

    /// Attach a URL.
    pub fn link(&self, url: &str) {
        self.attach(Attachment::text(url, LINK_MEDIA_TYPE));
    }

    /// Attach a log line.
    pub fn log(&self, text: &str) {
        self.attach(Attachment::text(text, LOG_MEDIA_TYPE));
    }

    /// Log function that writes into this world's report.
    pub fn logger(&self) -> LogFn {
        let sink = self.sink.clone();
        LogFn::new(move |msg| sink.attach(Attachment::text(msg, LOG_MEDIA_TYPE)))
    }
}

impl std::fmt::Debug for BaseWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaseWorld")
            .field("parameters", &self.parameters)
            .field("sink", &"<sink>")
            .finish()
    }
}
