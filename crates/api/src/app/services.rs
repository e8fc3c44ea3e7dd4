use std::sync::Arc;

use forestal_infra::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
use forestal_products::{Product, ProductId};

use crate::config::AppConfig;

/// Storage wiring shared by every handler.
#[derive(Clone)]
pub struct AppServices {
    products: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(products: Arc<dyn ProductStore>) -> Self {
        Self { products }
    }

    /// In-memory wiring (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryProductStore::new()))
    }

    pub async fn products_list(&self) -> Result<Vec<Product>, StoreError> {
        self.products.find_all().await
    }

    pub async fn products_get(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        self.products.find_by_id(id).await
    }

    /// Insert a record that has no id yet.
    pub async fn products_create(&self, product: Product) -> Result<Product, StoreError> {
        self.products.save(product.detached()).await
    }

    /// Replace every attribute of an existing record.
    pub async fn products_replace(
        &self,
        id: ProductId,
        product: Product,
    ) -> Result<Product, StoreError> {
        self.products.save(product.detached().assigned(id)).await
    }

    pub async fn products_delete(&self, id: ProductId) -> Result<(), StoreError> {
        self.products.delete(id).await
    }
}

/// Pick the product store from configuration.
pub async fn build_services(config: &AppConfig) -> Result<AppServices, StoreError> {
    if !config.server.use_persistent_stores {
        tracing::warn!("USE_PERSISTENT_STORES is false; products are kept in memory only");
        return Ok(AppServices::in_memory());
    }

    let store = PostgresProductStore::connect(&config.database).await?;
    store.ensure_schema().await?;
    tracing::info!("using postgres product store");

    Ok(AppServices::new(Arc::new(store)))
}
