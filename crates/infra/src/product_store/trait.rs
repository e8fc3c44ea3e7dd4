use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use forestal_products::{Product, ProductId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("product not found: {0}")]
    NotFound(ProductId),

    #[error("database error: {0}")]
    Database(String),

    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Storage collaborator for catalog records.
///
/// The store owns identity: it assigns a surrogate id on first insert and is the
/// only place `Product::assigned` is called from. Records handed to `save` are
/// never validated; whatever the caller built is persisted as-is.
///
/// ## Contract
///
/// - `save` with no id inserts and returns the record carrying its new id.
/// - `save` with an id replaces that row's attributes; `NotFound` if the id is unknown.
/// - `find_all` returns records ordered by id (ascending).
/// - `delete` returns `NotFound` when nothing was removed.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn save(&self, product: Product) -> Result<Product, StoreError>;

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    async fn find_all(&self) -> Result<Vec<Product>, StoreError>;

    async fn delete(&self, id: ProductId) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        (**self).save(product).await
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        (**self).find_all().await
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        (**self).delete(id).await
    }
}
