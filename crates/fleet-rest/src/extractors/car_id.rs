//! Car id path extractor.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use fleet_core::CarId;
use fleet_service::SingleCarResponse;

/// Car id taken from the `:id` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarIdPath(pub CarId);

/// Rejection for a path segment that is not a UUID.
#[derive(Debug)]
pub struct CarIdRejection(pub String);

impl IntoResponse for CarIdRejection {
    fn into_response(self) -> Response {
        let description = format!("Invalid car id: {}", self.0);
        (StatusCode::BAD_REQUEST, Json(SingleCarResponse::empty(description))).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CarIdPath
where
    S: Send + Sync,
{
    type Rejection = CarIdRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| CarIdRejection(rejection.body_text()))?;

        CarId::parse(&raw)
            .map(CarIdPath)
            .map_err(|_| CarIdRejection(raw))
    }
}
