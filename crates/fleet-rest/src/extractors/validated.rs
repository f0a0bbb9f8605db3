//! Validated JSON extractor for car request bodies.
//!
//! Deserializes JSON and validates it with the `validator` crate. Both
//! failure kinds are answered with `400` and a [`SingleCarResponse`] whose
//! description lists what went wrong.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fleet_core::validation_messages;
use fleet_service::SingleCarResponse;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// JSON extractor that validates the deserialized value.
///
/// # Example
///
/// ```ignore
/// async fn add_car(ValidatedJson(dto): ValidatedJson<CarDto>) {
///     // dto.mileage is non-negative here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Rejection type for validated JSON extraction.
#[derive(Debug)]
pub enum ValidatedJsonRejection {
    /// Body missing, wrong content type or not deserializable.
    JsonError(JsonRejection),
    /// Deserialized, but failed validation.
    ValidationError(ValidationErrors),
}

impl ValidatedJsonRejection {
    /// Client-facing description of the failure.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::JsonError(rejection) => format!("Invalid request body: {}", rejection.body_text()),
            Self::ValidationError(errors) => validation_messages(errors).join("; "),
        }
    }
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(SingleCarResponse::empty(self.description())),
        )
            .into_response()
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}
