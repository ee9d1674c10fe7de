//! Plain-text rendering of the menu and the cart.

use std::fmt::Write;

use menu_client::Catalog;
use menu_common::cart::Cart;
use menu_common::currency::format_price;
use menu_common::filter::CategoryFilter;
use menu_common::food::Food;

pub fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{count} {}", if count == 1 { one } else { many })
}

pub fn categories(catalog: &Catalog) -> String {
    let mut out = format!("{} categories\n", catalog.tenant.name);
    if catalog.categories.is_empty() {
        out.push_str("  (none)\n");
    }
    for category in &catalog.categories {
        let count = catalog
            .foods
            .iter()
            .filter(|f| f.category_id == category.id)
            .count();
        let _ = writeln!(
            out,
            "  [{}] {} ({})",
            category.id,
            category.name,
            plural(count, "item", "items")
        );
    }
    out
}

pub fn menu(catalog: &Catalog, selector: &CategoryFilter, query: &str, foods: &[&Food]) -> String {
    let currency = catalog.currency();
    let label = match selector {
        CategoryFilter::All => "All Items".to_string(),
        CategoryFilter::Category(id) => catalog
            .category(*id)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("category {id}")),
    };

    let mut out = format!("{} menu: {label}\n", catalog.tenant.name);
    if !query.is_empty() {
        let _ = writeln!(out, "Found {}", plural(foods.len(), "item", "items"));
    }
    if foods.is_empty() {
        out.push_str("No items found matching your criteria.\n");
        return out;
    }
    for food in foods {
        let _ = writeln!(
            out,
            "  [{}] {}  {}  ({})",
            food.id,
            food.name,
            format_price(food.price, &currency),
            food.category.name
        );
        if !food.description.is_empty() {
            let _ = writeln!(out, "      {}", food.description);
        }
    }
    out
}

pub fn cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty\n".to_string();
    }
    let currency = cart.currency().unwrap_or_default();
    let mut out = format!("Your cart ({})\n", plural(cart.len(), "item", "items"));
    for item in cart.items() {
        let _ = writeln!(
            out,
            "  [{}] {} x {}  {} each  {}",
            item.food.id,
            item.quantity,
            item.food.name,
            format_price(item.food.price, &currency),
            format_price(item.line_total(), &currency)
        );
    }
    let _ = writeln!(
        out,
        "Total: {} ({} units)",
        format_price(cart.total_price(), &currency),
        cart.total_items()
    );
    out
}
