use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::models::ride::RideStatus;
use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("no drivers available")]
    NoDriverAvailable,

    #[error("ride not found: {0}")]
    RideNotFound(Uuid),

    #[error("driver not found: {0}")]
    DriverNotFound(Uuid),

    #[error("ride {ride} cannot transition out of {status:?}")]
    InvalidTransition { ride: Uuid, status: RideStatus },

    #[error("persistence failure: {0}")]
    Persistence(#[from] StoreError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let status = match &self {
            DispatchError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            DispatchError::NoDriverAvailable => StatusCode::SERVICE_UNAVAILABLE,
            DispatchError::RideNotFound(_) | DispatchError::DriverNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            DispatchError::InvalidTransition { .. } => StatusCode::CONFLICT,
            DispatchError::Persistence(_) | DispatchError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
