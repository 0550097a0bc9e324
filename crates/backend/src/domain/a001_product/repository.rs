use async_trait::async_trait;
use contracts::domain::a001_product::{ProductId, ProductRecord};
use tokio::sync::RwLock;

/// Storage for submitted products
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, record: ProductRecord) -> anyhow::Result<ProductId>;

    async fn get_by_id(&self, id: ProductId) -> anyhow::Result<Option<ProductRecord>>;

    /// Newest first
    async fn list_all(&self) -> anyhow::Result<Vec<ProductRecord>>;
}

/// Keeps products for the lifetime of the process only
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    items: RwLock<Vec<ProductRecord>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, record: ProductRecord) -> anyhow::Result<ProductId> {
        let id = record.id;
        let mut items = self.items.write().await;
        if items.iter().any(|p| p.id == id) {
            anyhow::bail!("Product {} already exists", id.as_string());
        }
        items.push(record);
        Ok(id)
    }

    async fn get_by_id(&self, id: ProductId) -> anyhow::Result<Option<ProductRecord>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|p| p.id == id).cloned())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<ProductRecord>> {
        let items = self.items.read().await;
        let mut result: Vec<ProductRecord> = items.clone();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }
}
