use menu_common::cart::{Cart, CartItem};
use menu_common::currency::Currency;
use menu_common::food::{Food, FoodId};
use tracing::{debug, warn};

use crate::storage::CartStorage;

/// Prefix of every persisted cart key.
pub const CART_STORAGE_KEY: &str = "restaurant-cart";

/// Storage key of one tenant's cart, e.g. `restaurant-cart/bella`.
pub fn cart_storage_key(tenant: &str) -> String {
    format!("{CART_STORAGE_KEY}/{tenant}")
}

/// The session's cart for one tenant.
///
/// Hydrates from storage on [`open`](CartStore::open) and writes the whole
/// cart back after every mutation. Storage failures are logged and switch the
/// store to in-memory operation; they are never returned to the caller.
pub struct CartStore<S> {
    storage: S,
    key: String,
    cart: Cart,
    persistent: bool,
}

impl<S: CartStorage> CartStore<S> {
    pub fn open(storage: S, tenant: &str) -> Self {
        let key = cart_storage_key(tenant);
        let mut persistent = true;

        let cart = match storage.read(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => {
                    let cart = Cart::from_items(items);
                    debug!(key = %key, items = cart.len(), "Restored cart");
                    cart
                }
                Err(e) => {
                    warn!(key = %key, error = %e, "Discarding unreadable persisted cart");
                    Cart::new()
                }
            },
            Ok(None) => Cart::new(),
            Err(e) => {
                warn!(key = %key, error = %e, "Cart storage unavailable, keeping cart in memory");
                persistent = false;
                Cart::new()
            }
        };

        Self {
            storage,
            key,
            cart,
            persistent,
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn items(&self) -> &[CartItem] {
        self.cart.items()
    }

    pub fn total_items(&self) -> u64 {
        self.cart.total_items()
    }

    pub fn total_price(&self) -> f64 {
        self.cart.total_price()
    }

    pub fn currency(&self) -> Option<Currency> {
        self.cart.currency()
    }

    /// `false` once storage has failed; the cart then lives only in memory.
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn add_to_cart(&mut self, food: &Food) {
        self.cart.add(food);
        debug!(food_id = %food.id, "Added to cart");
        self.persist();
    }

    pub fn remove_from_cart(&mut self, food_id: FoodId) {
        self.cart.remove(food_id);
        self.persist();
    }

    /// Quantities `<= 0` remove the item. Unknown ids are ignored.
    pub fn update_quantity(&mut self, food_id: FoodId, quantity: i64) {
        self.cart.set_quantity(food_id, quantity);
        self.persist();
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist();
    }

    /// Hand back the storage, e.g. to reopen it as a later session.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        if !self.persistent {
            return;
        }
        let raw = match serde_json::to_string(&self.cart) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.storage.write(&self.key, &raw) {
            warn!(key = %self.key, error = %e, "Cart storage write failed, keeping cart in memory");
            self.persistent = false;
        }
    }
}
