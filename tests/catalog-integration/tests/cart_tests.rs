//! Cart persistence with foods taken from a loaded catalog.

use menu_catalog_integration::MockCatalog;
use menu_client::{cart_storage_key, CartStore, CatalogLoader, FileStorage, LoadOutcome};
use menu_common::currency::{format_price, Currency};
use menu_common::food::FoodId;

#[tokio::test]
async fn cart_built_from_catalog_survives_a_new_session() {
    tracing_subscriber::fmt::try_init().ok();

    let server = MockCatalog::new()
        .with_menu("bella", "USD", &[("Pasta", 10), ("Fries", 20)])
        .serve()
        .await;
    let loader = CatalogLoader::new(server.api());
    let catalog = match loader.load("bella").await {
        LoadOutcome::Ready(catalog) => catalog,
        other => panic!("expected ready, got {other:?}"),
    };

    let dir = tempfile::tempdir().unwrap();
    let mut store = CartStore::open(FileStorage::new(dir.path()), "bella");
    store.add_to_cart(catalog.food(FoodId(1)).unwrap());
    store.add_to_cart(catalog.food(FoodId(2)).unwrap());
    store.add_to_cart(catalog.food(FoodId(2)).unwrap());

    // Pasta 10.00 x1, Fries 20.00 x2.
    assert_eq!(store.total_items(), 3);
    assert_eq!(store.total_price(), 50.0);
    assert_eq!(format_price(store.total_price(), &store.currency().unwrap()), "$50.00");

    let reopened = CartStore::open(FileStorage::new(dir.path()), "bella");
    assert_eq!(reopened.items(), store.items());
    assert_eq!(reopened.currency(), Some(Currency::Usd));
}

#[tokio::test]
async fn persisted_file_is_a_json_array_of_items() {
    let server = MockCatalog::new()
        .with_menu("bella", "USD", &[("Pasta", 10)])
        .serve()
        .await;
    let loader = CatalogLoader::new(server.api());
    loader.load("bella").await;
    let state = loader.state().await;
    let catalog = state.catalog().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path());
    let mut store = CartStore::open(storage, "bella");
    store.add_to_cart(catalog.food(FoodId(1)).unwrap());
    store.update_quantity(FoodId(1), 3);

    let raw = std::fs::read_to_string(dir.path().join("restaurant-cart%2Fbella.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["quantity"], 3);
    assert_eq!(items[0]["food"]["name"], "Pasta");
    assert_eq!(items[0]["food"]["Tenant"]["currency"], "USD");
    assert_eq!(store.storage_key(), cart_storage_key("bella"));
}

#[test]
fn corrupt_cart_file_opens_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("restaurant-cart%2Fbella.json"), "[{\"food\":").unwrap();

    let store = CartStore::open(FileStorage::new(dir.path()), "bella");
    assert!(store.items().is_empty());
    assert!(store.is_persistent());
}

#[test]
fn unwritable_directory_keeps_cart_in_memory() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where the data directory should be.
    let blocker = dir.path().join("not-a-dir");
    std::fs::write(&blocker, "").unwrap();

    let mut store = CartStore::open(FileStorage::new(&blocker), "bella");
    let food = menu_common::fixtures::food(1, "Pasta", 10);
    store.add_to_cart(&food);
    store.add_to_cart(&food);

    assert!(!store.is_persistent());
    assert_eq!(store.total_items(), 2);
}

#[test]
fn tenants_with_similar_names_keep_separate_carts() {
    let dir = tempfile::tempdir().unwrap();
    let pasta = menu_common::fixtures::food(1, "Pasta", 10);

    let mut spaced = CartStore::open(FileStorage::new(dir.path()), "chez paul");
    spaced.add_to_cart(&pasta);

    for other in ["chez_paul", "chez.paul", "chez%20paul"] {
        let store = CartStore::open(FileStorage::new(dir.path()), other);
        assert!(store.items().is_empty(), "{other} sees the cart of chez paul");
    }

    let reopened = CartStore::open(FileStorage::new(dir.path()), "chez paul");
    assert_eq!(reopened.total_items(), 1);
}
