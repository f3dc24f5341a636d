use std::sync::OnceLock;

use axum::{http::StatusCode, response::IntoResponse};
use serde_json::{Map, Value};
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::AuthError(message) => (StatusCode::UNAUTHORIZED, message),
            ApiError::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message),
            ApiError::ClientError(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status_code, message).into_response()
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

static ERROR_CODES: OnceLock<Map<String, Value>> = OnceLock::new();

fn error_codes() -> &'static Map<String, Value> {
    ERROR_CODES.get_or_init(|| {
        serde_json::from_str::<Map<String, Value>>(include_str!(
            "error-code.json"
        ))
        .unwrap_or_else(|e| {
            error!(task = "load error codes", error = e.to_string());
            Map::new()
        })
    })
}

/// Maps a `"<status>-<nnn>"` code to its variant and message.
impl From<&str> for ApiError {
    fn from(error_code: &str) -> Self {
        let message = error_codes()
            .get(error_code)
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_string();

        match error_code.split('-').next() {
            Some("401") => ApiError::AuthError(message),
            Some("403") => ApiError::Forbidden(message),
            Some("404") => ApiError::NotFound(message),
            Some("409") => ApiError::Conflict(message),
            Some(status) if status.starts_with('4') => {
                ApiError::ClientError(message)
            }
            _ => ApiError::ServerError(message),
        }
    }
}

pub trait IntoApiResponse<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(error_code, "{:?}", e);
            ApiError::from(error_code)
        })
    }
}

impl<T> IntoApiResponse<T> for Option<T> {
    fn into_response(self, error_code: &str) -> ApiResponse<T> {
        self.ok_or_else(|| ApiError::from(error_code))
    }
}
