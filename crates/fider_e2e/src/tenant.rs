//! Tenant names and the URLs they are served from.
//!
//! Every Fider tenant lives on its own subdomain, so a tenant name doubles as
//! a DNS label.

use crate::config::SiteConfig;
use crate::error::{E2eError, Result};
use uuid::Uuid;

/// Shortest accepted tenant name.
pub const MIN_TENANT_LEN: usize = 2;

/// Longest accepted tenant name.
pub const MAX_TENANT_LEN: usize = 40;

const SUFFIX_LEN: usize = 8;

/// Check `name` against subdomain rules.
pub fn validate_tenant_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| E2eError::InvalidTenantName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.len() < MIN_TENANT_LEN {
        return Err(invalid("must have at least 2 characters"));
    }
    if name.len() > MAX_TENANT_LEN {
        return Err(invalid("must have at most 40 characters"));
    }
    if !name
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    {
        return Err(invalid("only lowercase letters, digits and '-' are allowed"));
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err(invalid("cannot start or end with '-'"));
    }
    Ok(())
}

/// Longest prefix [`generate_tenant_name`] accepts.
pub const MAX_TENANT_PREFIX_LEN: usize = MAX_TENANT_LEN - SUFFIX_LEN;

/// Fresh tenant name: `prefix` followed by eight random hex digits.
///
/// Fails when the prefix is too long or would make the name invalid.
pub fn generate_tenant_name(prefix: &str) -> Result<String> {
    if prefix.len() > MAX_TENANT_PREFIX_LEN {
        return Err(E2eError::InvalidTenantName {
            name: prefix.to_string(),
            reason: format!(
                "prefix must have at most {} characters",
                MAX_TENANT_PREFIX_LEN
            ),
        });
    }

    let id = Uuid::new_v4().simple().to_string();
    let name = format!("{}{}", prefix, &id[..SUFFIX_LEN]);
    validate_tenant_name(&name)?;
    Ok(name)
}

/// Absolute URL of `path` on the tenant's site.
pub fn tenant_url(site: &SiteConfig, tenant_name: &str, path: &str) -> Result<String> {
    validate_tenant_name(tenant_name)?;

    let mut url = format!("{}://{}.{}", site.scheme, tenant_name, site.host);
    if let Some(port) = site.url_port() {
        url.push_str(&format!(":{}", port));
    }
    if !path.starts_with('/') {
        url.push('/');
    }
    url.push_str(path);
    Ok(url)
}
