//! Main application router.

use crate::{
    controllers::{car_controller, health_controller},
    middleware::{basic_auth_middleware, logging_middleware, BasicAuthState},
    openapi::ApiDoc,
    state::AppState,
};
use axum::{
    http::{HeaderValue, StatusCode},
    middleware,
    routing::get,
    Router,
};
use fleet_config::ServerConfig;
use fleet_security::CredentialsVerifier;
use fleet_service::CarService;
use shaku::{HasComponent, Module};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Creates the main application router from a Shaku module.
///
/// The module must provide the `CarService` and `CredentialsVerifier`
/// components.
pub fn create_router_from_module<M>(module: &M, server_config: &ServerConfig) -> Router
where
    M: Module + HasComponent<dyn CarService> + HasComponent<dyn CredentialsVerifier>,
{
    let verifier: Arc<dyn CredentialsVerifier> = module.resolve();
    create_router(AppState::from_module(module), verifier, server_config)
}

/// Creates the main application router.
///
/// Every `/cars` route sits behind Basic authentication; health checks,
/// the banner and the API docs are public.
pub fn create_router(
    state: AppState,
    verifier: Arc<dyn CredentialsVerifier>,
    server_config: &ServerConfig,
) -> Router {
    let auth_state = BasicAuthState::new(verifier);

    let cars_router = car_controller::router()
        .route_layer(middleware::from_fn_with_state(auth_state, basic_auth_middleware));

    let router = Router::new()
        // Health endpoints (no auth required)
        .merge(health_controller::router())
        .nest("/cars", cars_router)
        .route("/", get(root))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(RequestBodyLimitLayer::new(server_config.max_body_size))
        .layer(timeout_layer(server_config))
        .layer(CompressionLayer::new())
        .layer(create_cors_layer(server_config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with /cars endpoints and Swagger UI at /swagger-ui");
    router
}

/// Requests running past the configured timeout are answered with 408.
fn timeout_layer(server_config: &ServerConfig) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, server_config.request_timeout())
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }
    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Root endpoint handler.
async fn root() -> &'static str {
    "Fleet API v1"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use std::time::Duration;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_slow_request_times_out_with_408() {
        let config = ServerConfig {
            request_timeout_secs: 1,
            ..ServerConfig::default()
        };
        let app = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "done"
                }),
            )
            .layer(timeout_layer(&config));

        let response = app
            .oneshot(Request::builder().uri("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
