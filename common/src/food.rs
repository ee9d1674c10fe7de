use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryId};
use crate::currency::Currency;
use crate::tenant::{Tenant, TenantId};
use crate::wire::null_as_default;

/// Numeric food identifier as issued by the catalog service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FoodId(pub u64);

impl fmt::Display for FoodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A dish on a tenant's menu.
///
/// Carries denormalized copies of its category and tenant, the latter being
/// where the display currency comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(rename = "createAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updateAt")]
    pub updated_at: DateTime<Utc>,
    pub category_id: CategoryId,
    pub tenant_id: TenantId,
    #[serde(rename = "Tenant")]
    pub tenant: Tenant,
    pub category: Category,
}

impl Food {
    pub fn currency(&self) -> Currency {
        Currency::from_code(&self.tenant.currency)
    }

    /// Case-insensitive substring match on name or description.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}
