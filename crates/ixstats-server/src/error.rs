//! Error types for the dashboard API server.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors that can occur in the dashboard API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A serialization or deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An invalid query parameter or request body was provided.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A UUID could not be parsed from the request path.
    #[error("invalid UUID: {0}")]
    InvalidUuid(String),

    /// A selection mutation was rejected by the state manager.
    #[error("selection error: {0}")]
    Selection(#[from] ixstats_core::StateError),

    /// A vault operation was rejected by the ledger.
    #[error("vault error: {0}")]
    Vault(#[from] ixstats_ledger::LedgerError),

    /// An IxTime operation failed.
    #[error("time error: {0}")]
    Time(#[from] ixstats_core::IxTimeError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            Self::Serialization(e) => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("JSON error: {e}"))
            }
            Self::InvalidRequest(msg) | Self::InvalidUuid(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            Self::Selection(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Vault(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Time(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
