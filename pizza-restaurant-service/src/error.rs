use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::json;
use tracing::error;

use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalError(String),
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(e) => ApiError::Validation(e.to_string()),
            StoreError::NotFound(entity) => ApiError::NotFound(format!("{entity} not found")),
            e => ApiError::InternalError(e.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": [msg] }))).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::InternalError(msg) => {
                error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "errors": [msg] })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;

    #[test]
    fn test_store_errors_map_to_api_errors() {
        let e = ApiError::from(StoreError::NotFound("Restaurant"));
        assert!(matches!(e, ApiError::NotFound(ref msg) if msg == "Restaurant not found"));

        let e = ApiError::from(StoreError::Validation(ValidationError::InvalidPrice));
        assert!(matches!(e, ApiError::Validation(ref msg) if msg == "validation errors"));

        let e = ApiError::from(StoreError::Database(diesel::result::Error::RollbackTransaction));
        assert!(matches!(e, ApiError::InternalError(_)));
    }

    #[test]
    fn test_status_codes() {
        use axum::response::IntoResponse;

        let cases = [
            (ApiError::Validation("bad".to_string()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("gone".to_string()), StatusCode::NOT_FOUND),
            (
                ApiError::InternalError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (e, status) in cases {
            assert_eq!(e.into_response().status(), status);
        }
    }
}
