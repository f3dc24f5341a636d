use axum::http::StatusCode;

use crate::ApiError;

pub(super) async fn healthz() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

pub(super) async fn not_found() -> ApiError {
    ApiError::NotFound("no route matches the request".to_string())
}
