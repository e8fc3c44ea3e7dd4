//! Postgres-backed product store.
//!
//! Rows live in the `productos` table. Column names follow the original shop
//! schema; the mapping to [`Product`] is done here so the domain record stays
//! free of sqlx.
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | Database (any code) | `Database` with operation + message |
//! | PoolClosed | `Database` |
//! | Other | `Database` |
//!
//! Missing rows are never reported through sqlx: lookups use `fetch_optional`
//! and updates/deletes check `rows_affected`.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;
use tracing::{instrument, Span};

use forestal_products::{Product, ProductId};

use super::r#trait::{ProductStore, StoreError};
use crate::config::DatabaseConfig;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS productos (
    id BIGINT GENERATED BY DEFAULT AS IDENTITY PRIMARY KEY,
    nombre TEXT NOT NULL DEFAULT '',
    tipo TEXT NOT NULL DEFAULT '',
    marca TEXT NOT NULL DEFAULT '',
    descripcion TEXT NOT NULL DEFAULT '',
    precio DOUBLE PRECISION NULL,
    stock INTEGER NOT NULL DEFAULT 0,
    imagen TEXT NOT NULL DEFAULT ''
)
"#;

/// One `productos` row.
#[derive(Debug, FromRow)]
struct ProductRow {
    id: i64,
    nombre: String,
    tipo: String,
    marca: String,
    descripcion: String,
    precio: Option<f64>,
    stock: i32,
    imagen: String,
}

impl TryFrom<ProductRow> for Product {
    type Error = StoreError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let id = ProductId::try_from(row.id)
            .map_err(|e| StoreError::Database(format!("bad id in productos row: {e}")))?;

        Ok(Product::with_details(
            row.nombre,
            row.tipo,
            row.marca,
            row.descripcion,
            row.precio,
            row.stock,
            row.imagen,
        )
        .assigned(id))
    }
}

/// Postgres-backed product store.
///
/// `PgPool` is internally reference counted, so cloning the store is cheap and
/// shares the pool.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: PgPool,
}

impl PostgresProductStore {
    /// Wrap an existing connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool using the given configuration.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;

        tracing::info!(
            max_connections = config.max_connections,
            "connected to product database"
        );
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `productos` table if it does not exist yet.
    #[instrument(skip(self), err)]
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }

    async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO productos (nombre, tipo, marca, descripcion, precio, stock, imagen)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(product.name())
        .bind(product.kind())
        .bind(product.brand())
        .bind(product.description())
        .bind(product.price())
        .bind(product.stock())
        .bind(product.image())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("insert", e))?;

        let id = ProductId::try_from(id)
            .map_err(|e| StoreError::Database(format!("database returned bad id: {e}")))?;
        Ok(product.assigned(id))
    }

    async fn update(&self, id: ProductId, product: Product) -> Result<Product, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE productos
            SET nombre = $1,
                tipo = $2,
                marca = $3,
                descripcion = $4,
                precio = $5,
                stock = $6,
                imagen = $7
            WHERE id = $8
            "#,
        )
        .bind(product.name())
        .bind(product.kind())
        .bind(product.brand())
        .bind(product.description())
        .bind(product.price())
        .bind(product.stock())
        .bind(product.image())
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(product)
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self, product), fields(product_id = tracing::field::Empty), err)]
    async fn save(&self, product: Product) -> Result<Product, StoreError> {
        let saved = match product.id() {
            Some(id) => self.update(id, product).await?,
            None => self.insert(product).await?,
        };
        if let Some(id) = saved.id() {
            Span::current().record("product_id", id.get());
        }
        Ok(saved)
    }

    #[instrument(skip(self), fields(product_id = id.get()), err)]
    async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row: Option<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, nombre, tipo, marca, descripcion, precio, stock, imagen
            FROM productos
            WHERE id = $1
            "#,
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_by_id", e))?;

        row.map(Product::try_from).transpose()
    }

    #[instrument(skip(self), err)]
    async fn find_all(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, nombre, tipo, marca, descripcion, precio, stock, imagen
            FROM productos
            ORDER BY id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("find_all", e))?;

        rows.into_iter().map(Product::try_from).collect()
    }

    #[instrument(skip(self), fields(product_id = id.get()), err)]
    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM productos WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
            StoreError::Database(format!(
                "database error in {operation} (code {code}): {}",
                db_err.message()
            ))
        }
        sqlx::Error::PoolClosed => {
            StoreError::Database(format!("connection pool closed in {operation}"))
        }
        other => StoreError::Database(format!("sqlx error in {operation}: {other}")),
    }
}
