//! Per-scenario context shared by step implementations.

use crate::base::{Attachment, BaseWorld};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::log::LogFn;
use crate::page::PageHandle;
use crate::tenant::tenant_url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

/// State threaded through every step of one Fider scenario.
///
/// The runner builds one per scenario and drops it when the scenario ends.
/// All three fields are required up front; setup steps may replace them
/// later through the setters.
///
/// ```
/// use fider_e2e::{BaseWorld, FiderWorld, MemoryReport};
/// # use fider_e2e::{Page, PageError};
/// # use std::sync::Arc;
/// # use std::time::Duration;
/// # struct Blank;
/// # impl Page for Blank {
/// #     fn goto(&self, _: &str) -> Result<(), PageError> { Ok(()) }
/// #     fn url(&self) -> String { "about:blank".into() }
/// #     fn click(&self, _: &str) -> Result<(), PageError> { Ok(()) }
/// #     fn fill(&self, _: &str, _: &str) -> Result<(), PageError> { Ok(()) }
/// #     fn text_content(&self, _: &str) -> Result<Option<String>, PageError> { Ok(None) }
/// #     fn wait_for_selector(&self, _: &str, _: Duration) -> Result<(), PageError> { Ok(()) }
/// # }
///
/// let report = Arc::new(MemoryReport::new());
/// let base = BaseWorld::new(serde_json::json!({}), report.clone());
/// let log = base.logger();
/// let world = FiderWorld::new(base, "acme", Arc::new(Blank), log);
///
/// world.log("step started");
/// assert_eq!(world.tenant_name(), "acme");
/// assert_eq!(report.log_lines(), vec!["step started".to_string()]);
/// ```
///
/// Leaving out a field does not compile:
///
/// ```compile_fail
/// use fider_e2e::{BaseWorld, FiderWorld, LogFn, MemoryReport};
/// use std::sync::Arc;
///
/// let base = BaseWorld::new(serde_json::json!({}), Arc::new(MemoryReport::new()));
/// let world = FiderWorld::new(base, "acme", LogFn::discard());
/// ```
#[derive(Clone)]
pub struct FiderWorld {
    base: BaseWorld,
    tenant_name: String,
    page: PageHandle,
    log: LogFn,
}

impl FiderWorld {
    /// Create the world for a scenario.
    pub fn new(
        base: BaseWorld,
        tenant_name: impl Into<String>,
        page: PageHandle,
        log: LogFn,
    ) -> Self {
        let tenant_name = tenant_name.into();
        debug!(tenant = %tenant_name, "scenario world created");
        Self {
            base,
            tenant_name,
            page,
            log,
        }
    }

    /// Tenant this scenario targets.
    pub fn tenant_name(&self) -> &str {
        &self.tenant_name
    }

    /// Point the scenario at another tenant.
    pub fn set_tenant_name(&mut self, tenant_name: impl Into<String>) {
        self.tenant_name = tenant_name.into();
        debug!(tenant = %self.tenant_name, "scenario tenant replaced");
    }

    /// The page handle. Every read returns the same `Arc`.
    pub fn page(&self) -> &PageHandle {
        &self.page
    }

    /// Hand the scenario a different page.
    pub fn set_page(&mut self, page: PageHandle) {
        self.page = page;
        debug!(tenant = %self.tenant_name, "scenario page replaced");
    }

    /// The log function itself.
    pub fn log_fn(&self) -> &LogFn {
        &self.log
    }

    /// Route later log calls to `log`.
    pub fn set_log_fn(&mut self, log: LogFn) {
        self.log = log;
    }

    /// Forward `msg` to the log function.
    pub fn log(&self, msg: &str) {
        self.log.call(msg);
    }

    /// Runner-provided base.
    pub fn base(&self) -> &BaseWorld {
        &self.base
    }

    /// Raw world parameters from the runner.
    pub fn parameters(&self) -> &serde_json::Value {
        self.base.parameters()
    }

    /// World parameters decoded into `T`.
    pub fn typed_parameters<T: DeserializeOwned>(&self) -> Result<T> {
        self.base.typed_parameters()
    }

    /// Attach an item to the scenario report.
    pub fn attach(&self, attachment: Attachment) {
        self.base.attach(attachment);
    }

    /// Attach `value` as JSON.
    pub fn attach_json<T: Serialize>(&self, value: &T) -> Result<()> {
        self.base.attach_json(value)
    }

    /// Attach a URL to the scenario report.
    pub fn link(&self, url: &str) {
        self.base.link(url);
    }

    /// URL of `path` on this scenario's tenant.
    pub fn tenant_url(&self, site: &SiteConfig, path: &str) -> Result<String> {
        tenant_url(site, &self.tenant_name, path)
    }

    /// Navigate the page to `path` on this scenario's tenant.
    pub fn visit(&self, site: &SiteConfig, path: &str) -> Result<()> {
        let url = self.tenant_url(site, path)?;
        info!(tenant = %self.tenant_name, %url, "visiting");
        self.log(&format!("visiting {}", url));
        self.page.goto(&url)?;
        Ok(())
    }
}

impl std::fmt::Debug for FiderWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FiderWorld")
            .field("base", &self.base)
            .field("tenant_name", &self.tenant_name)
            .field("page", &"<page>")
            .field("log", &self.log)
            .finish()
    }
}
