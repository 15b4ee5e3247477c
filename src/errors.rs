use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Remediation hint shown alongside permission-denied failures.
pub const PERMISSION_HINT: &str =
    "No access to protected customer data (orders). Check the app's approval status and the access scopes granted to the API credentials.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load orders: {0}")]
    UpstreamFetch(String),

    #[error("Order data access denied: {0}")]
    PermissionDenied(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Fetch(msg) => AppError::UpstreamFetch(msg),
            DomainError::PermissionDenied(msg) => AppError::PermissionDenied(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            // The raw upstream message is passed through so the UI can show
            // it verbatim in its error banner.
            AppError::UpstreamFetch(msg) => HttpResponse::BadGateway().json(serde_json::json!({
                "error": msg
            })),
            AppError::PermissionDenied(msg) => HttpResponse::Forbidden().json(serde_json::json!({
                "error": msg,
                "hint": PERMISSION_HINT
            })),
            AppError::Internal(_) => HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Internal server error"
            })),
        }
    }
}
