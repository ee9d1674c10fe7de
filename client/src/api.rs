//! Client for the remote catalog service.

use std::fmt;

use menu_common::tenant::{TenantCategoriesResponse, TenantFoodsResponse, TenantResponse};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;

/// The two tenant-scoped collections the service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Foods,
    Categories,
}

impl Resource {
    /// Path segment under the API base, e.g. `food` in `/food/{tenant}`.
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Foods => "food",
            Resource::Categories => "category",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Foods => write!(f, "foods"),
            Resource::Categories => write!(f, "categories"),
        }
    }
}

/// Source of a tenant's catalog.
#[allow(async_fn_in_trait)]
pub trait CatalogApi {
    async fn fetch_foods(&self, tenant: &str) -> Result<TenantFoodsResponse, ApiError>;

    async fn fetch_categories(&self, tenant: &str) -> Result<TenantCategoriesResponse, ApiError>;
}

/// [`CatalogApi`] over HTTP: `GET {base}/food/{tenant}` and
/// `GET {base}/category/{tenant}`.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base_url: Url,
}

impl HttpCatalogApi {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_base_url.clone())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build `{base}/{resource}/{tenant}` with the tenant percent-encoded.
    pub fn endpoint(&self, resource: Resource, tenant: &str) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Network {
                resource,
                message: format!("{} cannot be used as a base URL", self.base_url),
            })?
            .pop_if_empty()
            .push(resource.path())
            .push(tenant);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        resource: Resource,
        tenant: &str,
    ) -> Result<TenantResponse<T>, ApiError> {
        let url = self.endpoint(resource, tenant)?;
        debug!(%url, "Fetching {resource}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network {
                resource,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let status_text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string());
            return Err(if status == StatusCode::NOT_FOUND {
                ApiError::NotFound {
                    resource,
                    status_text,
                }
            } else {
                ApiError::Network {
                    resource,
                    message: status_text,
                }
            });
        }

        let body = response.text().await.map_err(|e| ApiError::Network {
            resource,
            message: e.to_string(),
        })?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse {
            resource,
            message: e.to_string(),
        })
    }
}

impl CatalogApi for HttpCatalogApi {
    async fn fetch_foods(&self, tenant: &str) -> Result<TenantFoodsResponse, ApiError> {
        self.get(Resource::Foods, tenant).await
    }

    async fn fetch_categories(&self, tenant: &str) -> Result<TenantCategoriesResponse, ApiError> {
        self.get(Resource::Categories, tenant).await
    }
}
