use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

use crate::dao::mongodb::MongoDaoError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage backend call failed.
    #[error("storage unavailable")]
    Unavailable(#[source] MongoDaoError),
    /// Application is running in degraded mode without storage.
    #[error("storage unavailable (degraded mode)")]
    Degraded,
    /// Identifier string does not match the store's id format.
    #[error("invalid identifier `{0}`: expected a 24-character hexadecimal ObjectId")]
    InvalidIdentifier(String),
    /// Uploaded file carried zero bytes.
    #[error("file is empty")]
    EmptyPayload,
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Update matched no record or produced no change; the store does not
    /// distinguish the two causes.
    #[error("update modified no record")]
    NotUpdated,
}

impl From<MongoDaoError> for ServiceError {
    fn from(err: MongoDaoError) -> Self {
        ServiceError::Unavailable(err)
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Service unavailable or degraded.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unavailable(source) => AppError::ServiceUnavailable(source.to_string()),
            ServiceError::Degraded => AppError::ServiceUnavailable("degraded mode".into()),
            ServiceError::InvalidIdentifier(_) => AppError::BadRequest(err.to_string()),
            ServiceError::EmptyPayload => AppError::BadRequest(err.to_string()),
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::NotFound(message) => AppError::NotFound(message),
            ServiceError::NotUpdated => AppError::NotFound(err.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let payload = Json(ErrorBody {
            message: self.to_string(),
        });

        (status, payload).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: ServiceError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn malformed_identifiers_map_to_bad_request() {
        assert_eq!(
            status_of(ServiceError::InvalidIdentifier("nope".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn empty_uploads_map_to_bad_request() {
        assert_eq!(status_of(ServiceError::EmptyPayload), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_records_map_to_not_found() {
        assert_eq!(
            status_of(ServiceError::NotFound("sprite `x` not found".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(ServiceError::NotUpdated), StatusCode::NOT_FOUND);
    }

    #[test]
    fn degraded_mode_maps_to_service_unavailable() {
        assert_eq!(
            status_of(ServiceError::Degraded),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
