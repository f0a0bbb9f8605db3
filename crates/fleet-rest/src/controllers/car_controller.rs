//! Car management controller.

use crate::{
    extractors::{CarIdPath, CarListQuery, ValidatedJson},
    responses::{respond, ApiResult},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, routing::get, Router};
use fleet_service::{CarDto, MultiCarResponse, SingleCarResponse};
use tracing::debug;

pub const ID_MISMATCH: &str = "Car id in body does not match the id in the path";

/// Creates the car router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_cars).post(add_car).put(edit_car))
        .route("/:id", get(get_car).put(edit_car_by_id).delete(delete_car))
}

/// List one page of cars ordered by creation time.
#[utoipa::path(
    get,
    path = "/cars",
    tag = "cars",
    params(CarListQuery),
    responses(
        (status = 200, description = "Page of cars", body = MultiCarResponse),
        (status = 400, description = "Invalid page request", body = MultiCarResponse),
        (status = 401, description = "Missing or wrong credentials", body = fleet_core::ErrorResponse)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_cars(
    State(state): State<AppState>,
    query: CarListQuery,
) -> ApiResult<MultiCarResponse> {
    debug!("List cars request: page {}, size {}", query.page, query.size);
    state
        .cars
        .get_cars(query.page, query.size, query.sort.as_deref())
        .await
}

/// Create a car. The body must not carry an id.
#[utoipa::path(
    post,
    path = "/cars",
    tag = "cars",
    request_body = CarDto,
    responses(
        (status = 201, description = "Car created", body = SingleCarResponse),
        (status = 400, description = "Invalid car", body = SingleCarResponse),
        (status = 401, description = "Missing or wrong credentials", body = fleet_core::ErrorResponse)
    ),
    security(("basic_auth" = []))
)]
pub async fn add_car(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CarDto>,
) -> ApiResult<SingleCarResponse> {
    debug!("Create car request: {} {}", dto.make, dto.model);
    state.cars.add_car(dto).await
}

/// Get a car by id.
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = "cars",
    params(("id" = String, Path, description = "Car id (UUID)")),
    responses(
        (status = 200, description = "Car found", body = SingleCarResponse),
        (status = 404, description = "No car with this id", body = SingleCarResponse),
        (status = 401, description = "Missing or wrong credentials", body = fleet_core::ErrorResponse)
    ),
    security(("basic_auth" = []))
)]
pub async fn get_car(
    State(state): State<AppState>,
    CarIdPath(id): CarIdPath,
) -> ApiResult<SingleCarResponse> {
    debug!("Get car request: {}", id);
    state.cars.get_car(id).await
}

/// Overwrite the car identified by the body's id.
#[utoipa::path(
    put,
    path = "/cars",
    tag = "cars",
    request_body = CarDto,
    responses(
        (status = 200, description = "Car updated", body = SingleCarResponse),
        (status = 400, description = "Unknown id or invalid car", body = SingleCarResponse),
        (status = 401, description = "Missing or wrong credentials", body = fleet_core::ErrorResponse)
    ),
    security(("basic_auth" = []))
)]
pub async fn edit_car(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CarDto>,
) -> ApiResult<SingleCarResponse> {
    debug!("Update car request: {:?}", dto.id);
    state.cars.edit_car(dto).await
}

/// Overwrite the car identified by the path id.
#[utoipa::path(
    put,
    path = "/cars/{id}",
    tag = "cars",
    params(("id" = String, Path, description = "Car id (UUID)")),
    request_body = CarDto,
    responses(
        (status = 200, description = "Car updated", body = SingleCarResponse),
        (status = 400, description = "Unknown id, id mismatch or invalid car", body = SingleCarResponse),
        (status = 401, description = "Missing or wrong credentials", body = fleet_core::ErrorResponse)
    ),
    security(("basic_auth" = []))
)]
pub async fn edit_car_by_id(
    State(state): State<AppState>,
    CarIdPath(id): CarIdPath,
    ValidatedJson(mut dto): ValidatedJson<CarDto>,
) -> ApiResult<SingleCarResponse> {
    debug!("Update car request: {}", id);

    match dto.id {
        Some(body_id) if body_id != id => {
            return Ok(respond(
                StatusCode::BAD_REQUEST,
                SingleCarResponse::empty(ID_MISMATCH),
            ));
        }
        _ => dto.id = Some(id),
    }

    state.cars.edit_car(dto).await
}

/// Delete a car and return its last state.
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = "cars",
    params(("id" = String, Path, description = "Car id (UUID)")),
    responses(
        (status = 200, description = "Car deleted", body = SingleCarResponse),
        (status = 404, description = "No car with this id", body = SingleCarResponse),
        (status = 401, description = "Missing or wrong credentials", body = fleet_core::ErrorResponse)
    ),
    security(("basic_auth" = []))
)]
pub async fn delete_car(
    State(state): State<AppState>,
    CarIdPath(id): CarIdPath,
) -> ApiResult<SingleCarResponse> {
    debug!("Delete car request: {}", id);
    state.cars.delete_car(id).await
}
