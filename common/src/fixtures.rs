//! Deterministic catalog records for tests.

use chrono::{DateTime, Utc};

use crate::category::{Category, CategoryId};
use crate::food::{Food, FoodId};
use crate::tenant::{Tenant, TenantId};

fn fixture_time() -> DateTime<Utc> {
    DateTime::from_timestamp(1_714_564_800, 0).expect("valid fixture timestamp")
}

/// A tenant whose id is derived from its name.
pub fn tenant(name: &str, currency: &str) -> Tenant {
    Tenant {
        id: TenantId(format!("t-{name}")),
        name: name.to_string(),
        currency: currency.to_string(),
    }
}

pub fn category(id: u64, name: &str) -> Category {
    category_for(&tenant("bella", "USD"), id, name)
}

pub fn category_for(tenant: &Tenant, id: u64, name: &str) -> Category {
    let now = fixture_time();
    Category {
        id: CategoryId(id),
        name: name.to_string(),
        description: format!("All things {}", name.to_lowercase()),
        image_url: String::new(),
        created_at: now,
        updated_at: now,
        tenant_id: tenant.id.clone(),
    }
}

/// A USD-priced food at 10.00 belonging to tenant `bella`.
pub fn food(id: u64, name: &str, category_id: u64) -> Food {
    food_in(id, name, category_id, "USD")
}

pub fn food_in(id: u64, name: &str, category_id: u64, currency: &str) -> Food {
    food_for(&tenant("bella", currency), id, name, category_id)
}

pub fn food_for(tenant: &Tenant, id: u64, name: &str, category_id: u64) -> Food {
    let now = fixture_time();
    Food {
        id: FoodId(id),
        name: name.to_string(),
        description: format!("House {}", name.to_lowercase()),
        price: 10.0,
        image_url: String::new(),
        created_at: now,
        updated_at: now,
        category_id: CategoryId(category_id),
        tenant_id: tenant.id.clone(),
        tenant: tenant.clone(),
        category: category_for(tenant, category_id, &format!("Category {category_id}")),
    }
}
