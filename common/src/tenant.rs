use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::food::Food;

/// Opaque tenant identifier assigned by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(pub String);

/// A restaurant storefront whose catalog is fetched by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tenant {
    pub id: TenantId,
    pub name: String,
    /// ISO-ish currency code, e.g. `USD`. Only drives price display.
    pub currency: String,
}

/// Envelope returned by every tenant-scoped catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantResponse<T> {
    pub tenant: Tenant,
    pub data: Vec<T>,
}

pub type TenantFoodsResponse = TenantResponse<Food>;
pub type TenantCategoriesResponse = TenantResponse<Category>;
