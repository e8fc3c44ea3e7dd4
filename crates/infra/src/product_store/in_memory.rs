use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use forestal_products::{Product, ProductId};

use super::r#trait::{ProductStore, StoreError};

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<ProductId, Product>,
    /// Last id handed out; ids are never reused after a delete.
    last_id: i64,
}

/// In-memory product table.
///
/// Intended for tests/dev. Mimics an identity column: ids start at 1 and grow
/// monotonically.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    table: RwLock<Table>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored rows. Still answers after a writer panicked; the trait
    /// operations report that case as [`StoreError::LockPoisoned`].
    pub fn len(&self) -> usize {
        self.table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .rows
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let mut table = self.table.write().map_err(|_| StoreError::LockPoisoned)?;

        match product.id() {
            Some(id) => {
                let row = table.rows.get_mut(&id).ok_or(StoreError::NotFound(id))?;
                *row = product.clone();
                Ok(product)
            }
            None => {
                let id = ProductId::try_from(table.last_id + 1)
                    .map_err(|e| StoreError::Database(e.to_string()))?;
                table.last_id += 1;

                let stored = product.assigned(id);
                table.rows.insert(id, stored.clone());
                tracing::debug!(product_id = %id, "inserted product");
                Ok(stored)
            }
        }
    }

    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let table = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let table = self.table.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(table.rows.values().cloned().collect())
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut table = self.table.write().map_err(|_| StoreError::LockPoisoned)?;
        match table.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }
}
