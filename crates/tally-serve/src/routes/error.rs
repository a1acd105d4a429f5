use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;
use tally_core::error::{CatalogError, LogError, SubmitError, TrackerError};

#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: &'static str,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<String>,
}

pub fn map_error(
    err: &TrackerError,
    correlation_id: Option<String>,
) -> (StatusCode, Json<ErrorEnvelope>) {
    let (status, code) = match err {
        TrackerError::Submit(SubmitError::InvalidPayload { .. }) => {
            (StatusCode::BAD_REQUEST, "invalid_payload")
        }
        TrackerError::Catalog(CatalogError::UnknownArea { .. } | CatalogError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, "not_found")
        }
        TrackerError::Catalog(_) => (StatusCode::INTERNAL_SERVER_ERROR, "catalog_failed"),
        TrackerError::Log(LogError::Persistence { .. }) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "persistence_failed")
        }
        TrackerError::Internal { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    };

    (
        status,
        Json(ErrorEnvelope {
            error: code,
            detail: err.to_string(),
            correlation_id,
        }),
    )
}
