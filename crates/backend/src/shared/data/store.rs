use crate::domain::a001_product::repository::{InMemoryProductRepository, ProductRepository};
use contracts::domain::a002_category::Category;
use once_cell::sync::OnceCell;

static PRODUCTS: OnceCell<InMemoryProductRepository> = OnceCell::new();
static CATEGORIES: OnceCell<Vec<Category>> = OnceCell::new();

/// Set up the in-memory stores; call once at startup
pub fn initialize_store(categories: Vec<Category>) -> anyhow::Result<()> {
    tracing::info!("Loaded {} categories", categories.len());
    CATEGORIES
        .set(categories)
        .map_err(|_| anyhow::anyhow!("store already initialized"))?;
    PRODUCTS
        .set(InMemoryProductRepository::new())
        .map_err(|_| anyhow::anyhow!("store already initialized"))?;
    Ok(())
}

pub fn get_product_repository() -> &'static dyn ProductRepository {
    PRODUCTS.get_or_init(InMemoryProductRepository::new)
}

pub fn get_categories() -> &'static [Category] {
    CATEGORIES.get().map(Vec::as_slice).unwrap_or(&[])
}
