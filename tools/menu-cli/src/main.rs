//! Terminal storefront: browse a tenant's menu and manage the persisted cart.

mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use menu_client::config::TENANT_VAR;
use menu_client::{
    resolve_tenant, CartStore, Catalog, CatalogLoader, ClientConfig, FileStorage, HttpCatalogApi,
    LoadOutcome,
};
use menu_common::filter::CategoryFilter;
use menu_common::food::FoodId;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "menu", about = "Browse a restaurant menu and manage your cart")]
struct Cli {
    /// Restaurant (tenant) name, as used in the storefront URL.
    #[arg(long)]
    tenant: Option<String>,

    /// Storefront host name; its first label is used as the tenant when
    /// --tenant is absent (e.g. "bella.menu.example.com").
    #[arg(long)]
    host: Option<String>,

    /// Catalog API base URL (default: $MENU_API_BASE_URL or the public API).
    #[arg(long)]
    api_base: Option<String>,

    /// Directory the cart is persisted in (default: $MENU_DATA_DIR or the
    /// platform data directory).
    #[arg(long)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the menu, optionally narrowed by category and search text.
    Menu {
        /// "all" or a category id. Defaults to the first category.
        #[arg(long)]
        category: Option<CategoryFilter>,

        /// Case-insensitive text matched against name and description.
        #[arg(long, default_value = "")]
        search: String,
    },
    /// List the menu categories.
    Categories,
    /// Inspect or change the cart.
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    Show,
    /// Add one of a food (looked up in the current menu).
    Add { food_id: u64 },
    Remove { food_id: u64 },
    /// Set a quantity; zero or less removes the item.
    Set {
        food_id: u64,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("Invalid configuration")?;
    if let Some(base) = &cli.api_base {
        config.api_base_url = ClientConfig::new(base)?.api_base_url;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }

    let env_tenant = std::env::var(TENANT_VAR).ok();
    let tenant = resolve_tenant(
        cli.tenant.as_deref(),
        cli.host.as_deref(),
        env_tenant.as_deref(),
    )?;
    debug!(%tenant, api_base_url = %config.api_base_url, data_dir = ?config.data_dir, "Resolved storefront");

    let loader = CatalogLoader::new(HttpCatalogApi::from_config(&config));

    match cli.command {
        Command::Menu { category, search } => {
            let catalog = load_catalog(&loader, &tenant).await?;
            let selector = category.unwrap_or_else(|| catalog.initial_filter());
            let foods = catalog.filtered(&selector, &search);
            print!("{}", render::menu(&catalog, &selector, &search, &foods));
        }
        Command::Categories => {
            let catalog = load_catalog(&loader, &tenant).await?;
            print!("{}", render::categories(&catalog));
        }
        Command::Cart { action } => {
            let dir = config
                .data_dir
                .clone()
                .context("No data directory available; pass --data-dir")?;
            let mut store = CartStore::open(FileStorage::new(dir), &tenant);

            match action {
                CartAction::Show => {}
                CartAction::Add { food_id } => {
                    let catalog = load_catalog(&loader, &tenant).await?;
                    let Some(food) = catalog.food(FoodId(food_id)) else {
                        bail!("No food with id {food_id} on {tenant}'s menu");
                    };
                    store.add_to_cart(food);
                }
                CartAction::Remove { food_id } => store.remove_from_cart(FoodId(food_id)),
                CartAction::Set { food_id, quantity } => {
                    store.update_quantity(FoodId(food_id), quantity)
                }
                CartAction::Clear => store.clear_cart(),
            }

            if !store.is_persistent() {
                warn!(key = store.storage_key(), "The cart could not be saved and will be lost on exit");
            }
            print!("{}", render::cart(store.cart()));
        }
    }

    Ok(())
}

async fn load_catalog(
    loader: &CatalogLoader<HttpCatalogApi>,
    tenant: &str,
) -> Result<std::sync::Arc<Catalog>> {
    match loader.load(tenant).await {
        LoadOutcome::Ready(catalog) => Ok(catalog),
        LoadOutcome::Failed(error) => {
            bail!("{error}. Run the command again to retry.")
        }
        LoadOutcome::Superseded => bail!("Catalog load for {tenant} was superseded"),
    }
}
