use axum::http::StatusCode;

/// Liveness text served at `/`.
pub const ROOT_MESSAGE: &str = "El backend funciona.";

pub async fn root() -> &'static str {
    ROOT_MESSAGE
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
