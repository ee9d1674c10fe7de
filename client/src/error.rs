use thiserror::Error;

use crate::api::Resource;

/// Failure of a single catalog request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failure or a non-success status other than 404.
    #[error("Failed to fetch {resource}: {message}")]
    Network { resource: Resource, message: String },

    /// The service answered 404, usually an unknown tenant name.
    #[error("Failed to fetch {resource}: {status_text}")]
    NotFound {
        resource: Resource,
        status_text: String,
    },

    /// The body was not the expected `{ tenant, data }` JSON.
    #[error("Failed to parse {resource}: {message}")]
    Parse { resource: Resource, message: String },
}

impl ApiError {
    pub fn resource(&self) -> Resource {
        match self {
            ApiError::Network { resource, .. }
            | ApiError::NotFound { resource, .. }
            | ApiError::Parse { resource, .. } => *resource,
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("no tenant given: pass one explicitly, use a tenant subdomain, or set {0}")]
    MissingTenant(&'static str),
}
