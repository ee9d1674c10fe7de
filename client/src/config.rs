//! Environment-driven configuration and tenant resolution.

use std::path::PathBuf;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://menuapi.hornsolution.com/api/v1";

pub const API_BASE_URL_VAR: &str = "MENU_API_BASE_URL";
pub const DATA_DIR_VAR: &str = "MENU_DATA_DIR";
pub const TENANT_VAR: &str = "MENU_TENANT";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_base_url: Url,
    /// Where native builds keep the persisted cart. `None` on platforms
    /// without a data directory.
    pub data_dir: Option<PathBuf>,
}

impl ClientConfig {
    pub fn new(api_base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api_base_url: parse_base_url(api_base_url)?,
            data_dir: default_data_dir(),
        })
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base = lookup(API_BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let data_dir = lookup(DATA_DIR_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .or_else(default_data_dir);

        let config = Self {
            api_base_url: parse_base_url(&base)?,
            data_dir,
        };
        tracing::debug!(api_base_url = %config.api_base_url, data_dir = ?config.data_dir, "Loaded client configuration");
        Ok(config)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".into()));
    }
    Ok(url)
}

#[cfg(not(target_family = "wasm"))]
fn default_data_dir() -> Option<PathBuf> {
    crate::storage::FileStorage::default_dir()
}

#[cfg(target_family = "wasm")]
fn default_data_dir() -> Option<PathBuf> {
    None
}

/// Pick the tenant name from, in order: an explicit path segment, the first
/// label of a multi-label host (`bella.menu.example.com` → `bella`, `www` is
/// ignored), or the value of [`TENANT_VAR`].
pub fn resolve_tenant(
    path_segment: Option<&str>,
    host: Option<&str>,
    env_tenant: Option<&str>,
) -> Result<String, ConfigError> {
    let non_blank = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    if let Some(tenant) = path_segment.and_then(non_blank) {
        return Ok(tenant);
    }
    if let Some(tenant) = host.and_then(subdomain) {
        return Ok(tenant);
    }
    env_tenant
        .and_then(non_blank)
        .ok_or(ConfigError::MissingTenant(TENANT_VAR))
}

fn subdomain(host: &str) -> Option<String> {
    // Drop a port, if any.
    let host = host.trim().split(':').next()?;
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() < 3 || labels.iter().any(|l| l.is_empty()) {
        return None;
    }
    if labels.iter().all(|l| l.chars().all(|c| c.is_ascii_digit())) {
        return None;
    }
    let first = labels[0];
    (!first.eq_ignore_ascii_case("www")).then(|| first.to_lowercase())
}
