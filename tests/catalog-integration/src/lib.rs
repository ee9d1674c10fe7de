//! Test harness: an in-process mock of the catalog service.
//!
//! ```ignore
//! let server = MockCatalog::new()
//!     .with_menu("bella", "USD", &[("Pasta", 10), ("Fries", 20)])
//!     .failing("bella", Resource::Categories, StatusCode::INTERNAL_SERVER_ERROR)
//!     .serve()
//!     .await;
//! let loader = CatalogLoader::new(server.api());
//! ```

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Url;
use tokio::task::JoinHandle;

use menu_client::{HttpCatalogApi, Resource};
use menu_common::fixtures::{category_for, food_for, tenant};
use menu_common::tenant::{TenantCategoriesResponse, TenantFoodsResponse, TenantResponse};

/// Both collections of one tenant as the service would return them.
#[derive(Clone)]
pub struct Menu {
    pub foods: TenantFoodsResponse,
    pub categories: TenantCategoriesResponse,
}

/// Build a menu whose categories are derived from the food entries.
/// Food ids are assigned 1, 2, 3... in order; prices are `10.00 * id`.
pub fn make_menu(tenant_name: &str, currency: &str, foods: &[(&str, u64)]) -> Menu {
    let t = tenant(tenant_name, currency);

    let mut category_ids: Vec<u64> = Vec::new();
    let foods = foods
        .iter()
        .enumerate()
        .map(|(i, (name, category_id))| {
            if !category_ids.contains(category_id) {
                category_ids.push(*category_id);
            }
            let id = i as u64 + 1;
            let mut food = food_for(&t, id, name, *category_id);
            food.price = 10.0 * id as f64;
            food
        })
        .collect();
    let categories = category_ids
        .into_iter()
        .map(|id| category_for(&t, id, &format!("Category {id}")))
        .collect();

    Menu {
        foods: TenantResponse {
            tenant: t.clone(),
            data: foods,
        },
        categories: TenantResponse {
            tenant: t,
            data: categories,
        },
    }
}

#[derive(Default)]
struct MockState {
    menus: HashMap<String, Menu>,
    failures: HashMap<(Resource, String), StatusCode>,
    malformed: HashSet<(Resource, String)>,
    delays: HashMap<String, Duration>,
    hits: AtomicUsize,
}

/// Builder for the mock service. Unknown tenants answer 404.
#[derive(Default)]
pub struct MockCatalog {
    state: MockState,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menu(mut self, tenant_name: &str, currency: &str, foods: &[(&str, u64)]) -> Self {
        self.state
            .menus
            .insert(tenant_name.to_string(), make_menu(tenant_name, currency, foods));
        self
    }

    /// Answer `status` (with an empty body) for one resource of one tenant.
    pub fn failing(mut self, tenant_name: &str, resource: Resource, status: StatusCode) -> Self {
        self.state
            .failures
            .insert((resource, tenant_name.to_string()), status);
        self
    }

    /// Answer 200 with a body that is not catalog JSON.
    pub fn malformed(mut self, tenant_name: &str, resource: Resource) -> Self {
        self.state
            .malformed
            .insert((resource, tenant_name.to_string()));
        self
    }

    /// Hold every response for this tenant back by `delay`.
    pub fn delayed(mut self, tenant_name: &str, delay: Duration) -> Self {
        self.state.delays.insert(tenant_name.to_string(), delay);
        self
    }

    pub async fn serve(self) -> MockServer {
        let state = Arc::new(self.state);
        let app = Router::new()
            .route("/api/v1/food/{tenant}", get(foods_handler))
            .route("/api/v1/category/{tenant}", get(categories_handler))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock catalog");
        let addr = listener.local_addr().expect("mock catalog address");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        MockServer {
            addr,
            state,
            handle,
        }
    }
}

/// A running mock service. Stops when dropped.
pub struct MockServer {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub fn base_url(&self) -> Url {
        Url::parse(&format!("http://{}/api/v1", self.addr)).expect("valid mock base URL")
    }

    pub fn api(&self) -> HttpCatalogApi {
        HttpCatalogApi::new(self.base_url())
    }

    /// Requests served so far, across all routes.
    pub fn hits(&self) -> usize {
        self.state.hits.load(Ordering::SeqCst)
    }

    pub fn menu(&self, tenant_name: &str) -> Option<&Menu> {
        self.state.menus.get(tenant_name)
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A base URL nothing is listening on.
pub async fn unreachable_base_url() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    Url::parse(&format!("http://{addr}/api/v1")).expect("valid base URL")
}

async fn foods_handler(State(state): State<Arc<MockState>>, Path(tenant): Path<String>) -> Response {
    respond(&state, Resource::Foods, &tenant).await
}

async fn categories_handler(
    State(state): State<Arc<MockState>>,
    Path(tenant): Path<String>,
) -> Response {
    respond(&state, Resource::Categories, &tenant).await
}

async fn respond(state: &MockState, resource: Resource, tenant_name: &str) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);
    tracing::debug!(%resource, tenant = tenant_name, "mock catalog request");

    if let Some(delay) = state.delays.get(tenant_name) {
        tokio::time::sleep(*delay).await;
    }

    let key = (resource, tenant_name.to_string());
    if let Some(status) = state.failures.get(&key) {
        return (*status).into_response();
    }
    if state.malformed.contains(&key) {
        return (StatusCode::OK, "<html>maintenance</html>").into_response();
    }

    let Some(menu) = state.menus.get(tenant_name) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match resource {
        Resource::Foods => Json(menu.foods.clone()).into_response(),
        Resource::Categories => Json(menu.categories.clone()).into_response(),
    }
}
