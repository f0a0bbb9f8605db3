//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for all layers of Fleet.
#[derive(Error, Debug)]
pub enum FleetError {
    // ============ Domain Errors ============
    /// Business rule violation. The message is shown to clients verbatim.
    #[error("{0}")]
    InvalidArgument(String),

    // ============ Authentication Errors ============
    /// Missing or wrong credentials
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    // ============ Infrastructure Errors ============
    /// Entity store failure
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FleetError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::InvalidArgument(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Database(_) | Self::Configuration(_) | Self::Internal(_) | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates an unauthorized error.
    #[must_use]
    pub fn unauthorized<T: Into<String>>(message: T) -> Self {
        Self::Unauthorized(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true for failures that originate on the server side.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for FleetError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<serde_json::Error> for FleetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error body for failures outside the car envelopes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable description
    pub description: String,
}

impl ErrorResponse {
    /// Generic description used for every server-side failure.
    pub const INTERNAL_DESCRIPTION: &'static str = "Internal server error";

    /// Creates a new error response from a `FleetError`.
    ///
    /// Server-side failures never expose their details.
    #[must_use]
    pub fn from_error(error: &FleetError) -> Self {
        let description = if error.is_server_error() {
            Self::INTERNAL_DESCRIPTION.to_string()
        } else {
            error.to_string()
        };

        Self {
            code: error.error_code().to_string(),
            description,
        }
    }
}

impl From<&FleetError> for ErrorResponse {
    fn from(error: &FleetError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(FleetError::invalid_argument("bad id").status_code(), 400);
        assert_eq!(FleetError::unauthorized("no credentials").status_code(), 401);
        assert_eq!(FleetError::Database("down".to_string()).status_code(), 500);
        assert_eq!(FleetError::Configuration("bad".to_string()).status_code(), 500);
        assert_eq!(FleetError::internal("oops").status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(FleetError::invalid_argument("x").error_code(), "INVALID_ARGUMENT");
        assert_eq!(FleetError::unauthorized("x").error_code(), "UNAUTHORIZED");
        assert_eq!(FleetError::Database("x".to_string()).error_code(), "DATABASE_ERROR");
        assert_eq!(FleetError::internal("x").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_invalid_argument_displays_message_verbatim() {
        let err = FleetError::invalid_argument("No car found for the provided id");
        assert_eq!(err.to_string(), "No car found for the provided id");
    }

    #[test]
    fn test_server_errors() {
        assert!(FleetError::Database("x".to_string()).is_server_error());
        assert!(FleetError::Other(anyhow::anyhow!("boom")).is_server_error());
        assert!(!FleetError::invalid_argument("x").is_server_error());
        assert!(!FleetError::unauthorized("x").is_server_error());
    }

    #[test]
    fn test_error_response_hides_server_details() {
        let err = FleetError::Database("connection refused to 10.0.0.3:3306".to_string());
        let response = ErrorResponse::from_error(&err);
        assert_eq!(response.code, "DATABASE_ERROR");
        assert_eq!(response.description, ErrorResponse::INTERNAL_DESCRIPTION);
    }

    #[test]
    fn test_error_response_keeps_client_message() {
        let err = FleetError::unauthorized("Bad credentials");
        let response: ErrorResponse = ErrorResponse::from(&err);
        assert_eq!(response.code, "UNAUTHORIZED");
        assert_eq!(response.description, "Unauthorized: Bad credentials");
    }
}
