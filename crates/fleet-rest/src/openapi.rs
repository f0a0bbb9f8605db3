//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use fleet_core::ErrorResponse;
use fleet_service::{CarDto, CarMake, MultiCarResponse, SingleCarResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the Fleet API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet API",
        version = "1.0.0",
        description = "CRUD service for the car fleet",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        // Car endpoints
        crate::controllers::car_controller::get_cars,
        crate::controllers::car_controller::add_car,
        crate::controllers::car_controller::get_car,
        crate::controllers::car_controller::edit_car,
        crate::controllers::car_controller::edit_car_by_id,
        crate::controllers::car_controller::delete_car,
        // Health endpoints
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            CarMake,
            CarDto,
            SingleCarResponse,
            MultiCarResponse,
            ErrorResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "cars", description = "Car management endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for HTTP Basic authentication.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Basic)
                        .description(Some("Username and password of the configured principal"))
                        .build(),
                ),
            );
        }
    }
}
