use std::sync::Arc;

use futures::future::try_join;
use menu_common::category::{Category, CategoryId};
use menu_common::currency::Currency;
use menu_common::filter::{filter_foods, CategoryFilter};
use menu_common::food::{Food, FoodId};
use menu_common::tenant::Tenant;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::api::CatalogApi;
use crate::error::ApiError;

/// Foods and categories of one tenant, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub tenant: Tenant,
    pub foods: Vec<Food>,
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn filtered(&self, selector: &CategoryFilter, query: &str) -> Vec<&Food> {
        filter_foods(&self.foods, selector, query)
    }

    /// Selector to show right after loading.
    pub fn initial_filter(&self) -> CategoryFilter {
        CategoryFilter::initial(&self.categories)
    }

    pub fn food(&self, id: FoodId) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn category(&self, id: CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.tenant.currency)
    }
}

/// Lifecycle of the catalog as seen by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading {
        tenant: String,
    },
    Ready {
        tenant: String,
        catalog: Arc<Catalog>,
    },
    Failed {
        tenant: String,
        error: ApiError,
    },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        match self {
            LoadState::Ready { catalog, .. } => Some(catalog),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            LoadState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Tenant the current state belongs to, `None` while idle.
    pub fn tenant(&self) -> Option<&str> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading { tenant }
            | LoadState::Ready { tenant, .. }
            | LoadState::Failed { tenant, .. } => Some(tenant),
        }
    }
}

/// What a single [`CatalogLoader::load`] call ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Ready(Arc<Catalog>),
    Failed(ApiError),
    /// A newer load started before this one finished; its result was dropped.
    Superseded,
}

struct Inner {
    generation: u64,
    state: LoadState,
}

/// Loads a tenant's catalog and tracks the load lifecycle.
///
/// Every call to [`load`](CatalogLoader::load) takes a new generation. Results
/// are only applied if their generation is still the latest, so switching
/// tenants while a load is in flight can never resurrect the old tenant.
pub struct CatalogLoader<A> {
    api: A,
    inner: RwLock<Inner>,
}

impl<A: CatalogApi> CatalogLoader<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            inner: RwLock::new(Inner {
                generation: 0,
                state: LoadState::Idle,
            }),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn state(&self) -> LoadState {
        self.inner.read().await.state.clone()
    }

    /// Fetch foods and categories for `tenant` concurrently.
    ///
    /// Both must succeed for the state to become `Ready`; the first failure
    /// moves it to `Failed` and the other response is dropped.
    pub async fn load(&self, tenant: &str) -> LoadOutcome {
        let generation = {
            let mut inner = self.inner.write().await;
            inner.generation += 1;
            inner.state = LoadState::Loading {
                tenant: tenant.to_string(),
            };
            inner.generation
        };
        debug!(tenant, generation, "Loading catalog");

        let result = try_join(
            self.api.fetch_foods(tenant),
            self.api.fetch_categories(tenant),
        )
        .await;

        let mut inner = self.inner.write().await;
        if inner.generation != generation {
            debug!(
                tenant,
                generation,
                current = inner.generation,
                "Discarding superseded catalog load"
            );
            return LoadOutcome::Superseded;
        }

        match result {
            Ok((foods, categories)) => {
                let catalog = Arc::new(Catalog {
                    tenant: foods.tenant,
                    foods: foods.data,
                    categories: categories.data,
                });
                info!(
                    tenant,
                    foods = catalog.foods.len(),
                    categories = catalog.categories.len(),
                    "Catalog ready"
                );
                inner.state = LoadState::Ready {
                    tenant: tenant.to_string(),
                    catalog: catalog.clone(),
                };
                LoadOutcome::Ready(catalog)
            }
            Err(error) => {
                warn!(tenant, %error, "Catalog load failed");
                inner.state = LoadState::Failed {
                    tenant: tenant.to_string(),
                    error: error.clone(),
                };
                LoadOutcome::Failed(error)
            }
        }
    }
}
