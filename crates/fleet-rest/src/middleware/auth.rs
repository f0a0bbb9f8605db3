//! HTTP Basic authentication middleware.

use crate::responses::AppError;
use axum::{
    body::Body,
    extract::State,
    http::{header::WWW_AUTHENTICATE, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};
use fleet_core::{ErrorResponse, FleetError};
use fleet_security::CredentialsVerifier;
use std::sync::Arc;
use tracing::{debug, warn};

/// Authentication middleware state.
#[derive(Clone)]
pub struct BasicAuthState {
    pub verifier: Arc<dyn CredentialsVerifier>,
}

impl BasicAuthState {
    /// Creates a new middleware state.
    pub fn new(verifier: Arc<dyn CredentialsVerifier>) -> Self {
        Self { verifier }
    }
}

/// Rejects requests without valid Basic credentials.
///
/// The handler is never reached on rejection; the `401` carries a
/// `WWW-Authenticate` challenge for the configured realm.
pub async fn basic_auth_middleware(
    State(state): State<BasicAuthState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let Some(Authorization(credentials)) = request.headers().typed_get::<Authorization<Basic>>()
    else {
        debug!("Request without basic credentials: {}", request.uri());
        return challenge(state.verifier.realm(), "Missing credentials");
    };

    match state
        .verifier
        .verify(credentials.username(), credentials.password())
    {
        Ok(true) => {
            debug!("Authenticated user: {}", credentials.username());
            next.run(request).await
        }
        Ok(false) => challenge(state.verifier.realm(), "Bad credentials"),
        Err(err) => {
            warn!("Credential verification failed: {}", err);
            AppError(err).into_response()
        }
    }
}

fn challenge(realm: &str, reason: &str) -> Response {
    let body = ErrorResponse::from_error(&FleetError::unauthorized(reason));
    let mut response = (StatusCode::UNAUTHORIZED, Json(body)).into_response();

    let value = HeaderValue::from_str(&format!("Basic realm=\"{}\"", realm))
        .unwrap_or_else(|_| HeaderValue::from_static("Basic"));
    response.headers_mut().insert(WWW_AUTHENTICATE, value);
    response
}
