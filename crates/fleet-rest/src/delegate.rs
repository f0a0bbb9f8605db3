//! Maps car service outcomes to HTTP status codes and envelopes.

use crate::responses::{respond, ApiResult, AppError};
use axum::http::StatusCode;
use fleet_core::{CarId, FleetError, PageRequest};
use fleet_service::{CarDto, CarMapper, CarService, MultiCarResponse, SingleCarResponse};
use std::sync::Arc;
use tracing::debug;

pub const LIST_SUCCESS: &str = "Successfully fetched cars";
pub const CREATE_SUCCESS: &str = "Successfully created car entity";
pub const GET_SUCCESS: &str = "Successfully fetched car from repo";

/// Request handler for the car endpoints.
///
/// Business rejections become `400`/`404` envelopes; every other failure is
/// returned as an [`AppError`] and rendered as a sanitized `500`.
#[derive(Clone)]
pub struct CarApiDelegate {
    car_service: Arc<dyn CarService>,
}

impl CarApiDelegate {
    /// Creates a delegate over the given service.
    #[must_use]
    pub fn new(car_service: Arc<dyn CarService>) -> Self {
        Self { car_service }
    }

    /// Lists one page of cars.
    pub async fn get_cars(&self, page: u32, size: u32, sort: Option<&str>) -> ApiResult<MultiCarResponse> {
        let page = match PageRequest::from_query(page, size, sort) {
            Ok(page) => page,
            Err(err) => return rejected(err, MultiCarResponse::empty),
        };

        let cars = self.car_service.list_cars(page).await?;
        debug!("Fetched {} cars", cars.len());

        Ok(respond(
            StatusCode::OK,
            MultiCarResponse::new(LIST_SUCCESS, CarMapper::to_dtos(&cars)),
        ))
    }

    /// Creates a car from a DTO without an id.
    pub async fn add_car(&self, dto: CarDto) -> ApiResult<SingleCarResponse> {
        match self.car_service.create_car(CarMapper::to_entity(dto)).await {
            Ok(car) => Ok(respond(
                StatusCode::CREATED,
                SingleCarResponse::with_car(CREATE_SUCCESS, CarMapper::to_dto(&car)),
            )),
            Err(err) => rejected(err, SingleCarResponse::empty),
        }
    }

    /// Fetches a single car.
    pub async fn get_car(&self, id: CarId) -> ApiResult<SingleCarResponse> {
        match self.car_service.get_car(id).await? {
            Some(car) => Ok(respond(
                StatusCode::OK,
                SingleCarResponse::with_car(GET_SUCCESS, CarMapper::to_dto(&car)),
            )),
            None => Ok(respond(
                StatusCode::NOT_FOUND,
                SingleCarResponse::empty(format!("No car found for id {}", id)),
            )),
        }
    }

    /// Overwrites an existing car.
    pub async fn edit_car(&self, dto: CarDto) -> ApiResult<SingleCarResponse> {
        match self.car_service.update_car(CarMapper::to_entity(dto)).await {
            Ok(car) => {
                let dto = CarMapper::to_dto(&car);
                let description = match dto.id {
                    Some(id) => format!("Successfully updated car with id {}", id),
                    None => return Err(FleetError::internal("Updated car has no id").into()),
                };
                Ok(respond(StatusCode::OK, SingleCarResponse::with_car(description, dto)))
            }
            Err(err) => rejected(err, SingleCarResponse::empty),
        }
    }

    /// Deletes a car, echoing it back.
    pub async fn delete_car(&self, id: CarId) -> ApiResult<SingleCarResponse> {
        match self.car_service.delete_car(id).await? {
            Some(car) => Ok(respond(
                StatusCode::OK,
                SingleCarResponse::with_car(
                    format!("Successfully deleted car with id {}", id),
                    CarMapper::to_dto(&car),
                ),
            )),
            None => Ok(respond(
                StatusCode::NOT_FOUND,
                SingleCarResponse::empty(format!("No car defined for id {}", id)),
            )),
        }
    }

    /// Checks that the service and its store are usable.
    pub async fn ready(&self) -> Result<(), FleetError> {
        self.car_service.health_check().await
    }
}

impl std::fmt::Debug for CarApiDelegate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarApiDelegate").finish_non_exhaustive()
    }
}

/// Turns an invalid-argument failure into a `400` envelope carrying its
/// message; anything else propagates.
fn rejected<T>(err: FleetError, envelope: impl FnOnce(String) -> T) -> ApiResult<T> {
    match err {
        FleetError::InvalidArgument(message) => {
            debug!("Rejected request: {}", message);
            Ok(respond(StatusCode::BAD_REQUEST, envelope(message)))
        }
        other => Err(AppError(other)),
    }
}
