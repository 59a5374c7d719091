use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Outward error classes of the order API.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    Validation(String),

    #[error("Referenced user not found: {0}")]
    ReferenceNotFound(String),

    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Dependency unavailable: {0}")]
    Dependency(String),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ReferenceNotFound(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Dependency(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation",
            AppError::ReferenceNotFound(_) => "reference_not_found",
            AppError::NotFound(_) => "not_found",
            AppError::Dependency(_) => "dependency",
            AppError::Internal(_) => "internal",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let code = self.status_code();
        let msg = match &self {
            AppError::Validation(m) | AppError::ReferenceNotFound(m) | AppError::NotFound(m) => {
                m.clone()
            }
            AppError::Dependency(_) => "user service unavailable".into(),
            AppError::Internal(_) => "internal error".into(),
        };

        let body = serde_json::to_string(&ErrorBody { error: msg })
            .unwrap_or_else(|_| "{\"error\":\"internal serialization\"}".into());
        (code, [("content-type", "application/json")], body).into_response()
    }
}
