//! Fider E2E Library
//!
//! Shared state for end-to-end browser scenarios against Fider, providing:
//! - A per-scenario world carrying the tenant, the browser page and a log function
//! - The runner's report capabilities (attachments, links, world parameters)
//! - Tenant naming and URL helpers
//! - Run configuration loaded from `e2e.toml`
//!
//! # Quick Start
//!
//! ```
//! use fider_e2e::{generate_tenant_name, tenant_url, validate_tenant_name, SiteConfig};
//!
//! let tenant = generate_tenant_name("e2e").unwrap();
//! validate_tenant_name(&tenant).unwrap();
//!
//! let url = tenant_url(&SiteConfig::default(), "acme", "/admin").unwrap();
//! assert_eq!(url, "http://acme.dev.fider.io:3000/admin");
//! ```
//!
//! # Features
//!
//! ## Report attachments
//!
//! The runner's report receives log lines, links and JSON:
//!
//! ```
//! use fider_e2e::{BaseWorld, MemoryReport};
//! use std::sync::Arc;
//!
//! let report = Arc::new(MemoryReport::new());
//! let base = BaseWorld::new(serde_json::json!({}), report.clone());
//!
//! let log = base.logger();
//! log.call("signed in as admin");
//! assert_eq!(report.log_lines(), vec!["signed in as admin".to_string()]);
//! ```
//!
//! ## Configuration
//!
//! ```
//! use fider_e2e::E2eConfig;
//!
//! let config = E2eConfig::from_toml_str("[tenant]\nprefix = \"smoke\"").unwrap();
//! assert_eq!(config.tenant.prefix, "smoke");
//! assert!(config.browser.headless);
//! ```

mod base;
mod config;
mod error;
mod log;
mod page;
mod telemetry;
mod tenant;
mod world;

pub use base::{
    Attachment, AttachmentBody, AttachmentSink, BaseWorld, MemoryReport, JSON_MEDIA_TYPE,
    LINK_MEDIA_TYPE, LOG_MEDIA_TYPE,
};
pub use config::{BrowserConfig, E2eConfig, SiteConfig, TenantConfig, CONFIG_FILE};
pub use error::{E2eError, PageError, Result};
pub use log::{LogFn, SCENARIO_LOG_TARGET};
pub use page::{Page, PageHandle};
pub use telemetry::init_tracing;
pub use tenant::{
    generate_tenant_name, tenant_url, validate_tenant_name, MAX_TENANT_LEN, MAX_TENANT_PREFIX_LEN,
    MIN_TENANT_LEN,
};
pub use world::FiderWorld;
