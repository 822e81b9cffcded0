//! API error type and HTTP response mapping.
//!
//! Every error body has the shape `{"error": "<message>"}`. Store
//! failures reach the client as a generic 500; the detailed cause is
//! only logged server-side.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use modutree_core::error::ModuTreeError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input; the message names the offending
    /// field or rule.
    #[error("{0}")]
    Validation(String),

    /// Slug already claimed by another site.
    #[error("이미 사용 중인 URL 주소입니다.")]
    Conflict,

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

fn not_found_message(entity: &str) -> String {
    match entity {
        "site" => "Site not found".into(),
        "event" => "Event not found".into(),
        other => format!("{other} not found"),
    }
}

impl From<ModuTreeError> for ApiError {
    fn from(err: ModuTreeError) -> Self {
        match err {
            ModuTreeError::Validation { message } => ApiError::Validation(message),
            ModuTreeError::AlreadyExists { .. } => ApiError::Conflict,
            ModuTreeError::NotFound { entity, .. } => ApiError::NotFound(not_found_message(&entity)),
            ModuTreeError::Database(cause) | ModuTreeError::Internal(cause) => {
                tracing::error!(%cause, "store call failed");
                ApiError::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) | ApiError::Conflict => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
