use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::food::{Food, FoodId};

/// A food snapshot taken when it was added, plus how many were ordered.
///
/// The snapshot is never refreshed, so totals use the price seen at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub food: Food,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.food.price * f64::from(self.quantity)
    }
}

/// Ordered cart contents. At most one item per food id, every quantity >= 1.
///
/// Serializes as a bare JSON array of items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from persisted items, repairing anything that breaks
    /// the invariants: zero quantities are dropped, duplicate ids are merged.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Cart::new();
        for item in items {
            if item.quantity == 0 {
                continue;
            }
            match cart.position(item.food.id) {
                Some(idx) => {
                    let existing = &mut cart.items[idx];
                    existing.quantity = existing.quantity.saturating_add(item.quantity);
                }
                None => cart.items.push(item),
            }
        }
        cart
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, food_id: FoodId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.food.id == food_id)
    }

    fn position(&self, food_id: FoodId) -> Option<usize> {
        self.items.iter().position(|item| item.food.id == food_id)
    }

    /// Increment the matching item or append a new one with quantity 1.
    pub fn add(&mut self, food: &Food) {
        match self.position(food.id) {
            Some(idx) => {
                let item = &mut self.items[idx];
                item.quantity = item.quantity.saturating_add(1);
            }
            None => self.items.push(CartItem {
                food: food.clone(),
                quantity: 1,
            }),
        }
    }

    /// Returns `true` if an item was removed.
    pub fn remove(&mut self, food_id: FoodId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.food.id != food_id);
        self.items.len() != before
    }

    /// Set an item's quantity. Non-positive quantities remove the item; an
    /// absent id is left alone. Returns `true` if the cart changed.
    pub fn set_quantity(&mut self, food_id: FoodId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(food_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.position(food_id) {
            Some(idx) => {
                let item = &mut self.items[idx];
                let changed = item.quantity != quantity;
                item.quantity = quantity;
                changed
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Display currency, taken from the first item's tenant.
    pub fn currency(&self) -> Option<Currency> {
        self.items.first().map(|item| item.food.currency())
    }
}
