use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use forestal_core::DomainError;
use forestal_infra::StoreError;

/// Errors surfaced by product handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Request body could not be read or decoded as a product.
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Store(StoreError::NotFound(id)) => {
                json_error(StatusCode::NOT_FOUND, "not_found", format!("product {id} not found"))
            }
            ApiError::Store(e) => {
                tracing::error!(error = %e, "product store failure");
                json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
            }
            ApiError::Domain(DomainError::InvalidId(msg)) => {
                json_error(StatusCode::BAD_REQUEST, "invalid_id", msg)
            }
            ApiError::Body(rejection) => {
                json_error(rejection.status(), "invalid_body", rejection.body_text())
            }
        }
    }
}

pub fn json_error(status: StatusCode, code: &'static str, message: impl Into<String>) -> Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use forestal_products::ProductId;

    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let id = ProductId::try_from(3).unwrap();
        let res = ApiError::from(StoreError::NotFound(id)).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_id_maps_to_400() {
        let res = ApiError::from(DomainError::invalid_id("nope")).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_failures_map_to_500() {
        let res = ApiError::from(StoreError::Database("boom".into())).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let res = ApiError::from(StoreError::LockPoisoned).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
