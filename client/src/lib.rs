//! Client-side state for the menu storefront.
//!
//! Two independent pieces:
//!
//! - [`CartStore`] owns the session's cart, persists it after every mutation
//!   and falls back to in-memory operation when storage misbehaves.
//! - [`CatalogLoader`] fetches a tenant's foods and categories concurrently
//!   and exposes an `Idle → Loading → Ready | Failed` lifecycle, discarding
//!   results of loads that were superseded by a newer one.

pub mod api;
pub mod cart_store;
pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;

pub use api::{CatalogApi, HttpCatalogApi, Resource};
pub use cart_store::{cart_storage_key, CartStore, CART_STORAGE_KEY};
pub use catalog::{Catalog, CatalogLoader, LoadOutcome, LoadState};
pub use config::{resolve_tenant, ClientConfig};
pub use error::{ApiError, ConfigError, StorageError};
#[cfg(not(target_family = "wasm"))]
pub use storage::FileStorage;
#[cfg(target_family = "wasm")]
pub use storage::LocalStorage;
pub use storage::{CartStorage, MemoryStorage};
