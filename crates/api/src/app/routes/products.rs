use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use forestal_products::ProductId;

use crate::app::dto::ProductRequest;
use crate::app::errors::ApiError;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(replace_product).delete(delete_product),
        )
}

fn parse_id(raw: &str) -> Result<ProductId, ApiError> {
    Ok(raw.parse::<ProductId>()?)
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Response, ApiError> {
    let items = services.products_list().await?;
    Ok((StatusCode::OK, Json(items)).into_response())
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(body) = body?;
    let created = services.products_create(body.into_product()).await?;
    if let Some(id) = created.id() {
        tracing::info!(product_id = %id, "product created");
    }
    Ok((StatusCode::CREATED, Json(created)).into_response())
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    match services.products_get(id).await? {
        Some(product) => Ok((StatusCode::OK, Json(product)).into_response()),
        None => Err(forestal_infra::StoreError::NotFound(id).into()),
    }
}

pub async fn replace_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    let updated = services.products_replace(id, body.into_product()).await?;
    tracing::info!(product_id = %id, "product updated");
    Ok((StatusCode::OK, Json(updated)).into_response())
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&id)?;
    services.products_delete(id).await?;
    tracing::info!(product_id = %id, "product deleted");
    Ok(StatusCode::NO_CONTENT.into_response())
}
