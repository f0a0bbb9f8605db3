//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fleet_core::{ErrorResponse, FleetError};
use tracing::error;

/// Status code paired with a JSON envelope.
pub type Envelope<T> = (StatusCode, Json<T>);

/// Result type for car handlers: an envelope, or an error outside the
/// envelope contract.
pub type ApiResult<T> = Result<Envelope<T>, AppError>;

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub FleetError);

impl From<FleetError> for AppError {
    fn from(err: FleetError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Wraps an envelope with `status`.
pub fn respond<T>(status: StatusCode, body: T) -> Envelope<T> {
    (status, Json(body))
}
