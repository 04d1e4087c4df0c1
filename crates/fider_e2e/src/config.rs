//! Configuration for end-to-end runs.

use crate::error::{E2eError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// File name looked up by [`E2eConfig::load`].
pub const CONFIG_FILE: &str = "e2e.toml";

/// Comprehensive configuration for an e2e run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct E2eConfig {
    /// Where tenant sites are served.
    #[serde(default)]
    pub site: SiteConfig,

    /// Browser settings handed to the automation driver.
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Tenant naming.
    #[serde(default)]
    pub tenant: TenantConfig,
}

impl E2eConfig {
    /// Load configuration from `dir/e2e.toml`, falling back to defaults.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            debug!(path = %path.display(), "loading e2e config");
            let content = fs::read_to_string(&path)?;
            Self::from_toml_str(&content)
        } else {
            debug!(path = %path.display(), "no e2e config found, using defaults");
            Ok(E2eConfig::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| E2eError::Config(format!("failed to parse config: {}", e)))
    }

    /// Save configuration to `dir/e2e.toml`.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = dir.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)
            .map_err(|e| E2eError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&path, content)?;
        Ok(())
    }
}

/// Location of the Fider server under test.
///
/// Keys left out of `[site]` take the values of `SiteConfig::default()`, so
/// an omitted `port` means 3000. URLs drop the port when it is the scheme's
/// standard one (80 for http, 443 for https) or when it is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// URL scheme (default: "http").
    pub scheme: String,

    /// Parent host; tenants live at `<tenant>.<host>` (default: "dev.fider.io").
    pub host: String,

    /// Port (default: 3000). `None` only arrives through JSON world parameters.
    pub port: Option<u16>,
}

impl SiteConfig {
    /// Port to put in URLs, `None` when the scheme's standard port applies.
    pub fn url_port(&self) -> Option<u16> {
        match (self.scheme.as_str(), self.port) {
            ("http", Some(80)) | ("https", Some(443)) => None,
            (_, port) => port,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            host: "dev.fider.io".to_string(),
            port: Some(3000),
        }
    }
}

/// Browser settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Run without a visible window (default: true).
    pub headless: bool,

    /// Default timeout for page waits in milliseconds (default: 30000).
    pub default_timeout_ms: u64,

    /// Viewport width in pixels (default: 1280).
    pub viewport_width: u32,

    /// Viewport height in pixels (default: 800).
    pub viewport_height: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            default_timeout_ms: 30_000,
            viewport_width: 1280,
            viewport_height: 800,
        }
    }
}

impl BrowserConfig {
    /// Returns the default timeout as a Duration.
    pub fn default_timeout(&self) -> Duration {
        Duration::from_millis(self.default_timeout_ms)
    }
}

/// Tenant naming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TenantConfig {
    /// Prefix for generated tenant names (default: "e2e").
    pub prefix: String,
}

impl Default for TenantConfig {
    fn default() -> Self {
        Self {
            prefix: "e2e".to_string(),
        }
    }
}
