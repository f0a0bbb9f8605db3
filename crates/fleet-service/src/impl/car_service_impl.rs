//! Car service implementation.

use crate::car_service::{CarService, CAR_ID_MUST_BE_ABSENT, NO_CAR_FOR_PROVIDED_ID};
use async_trait::async_trait;
use fleet_core::{Car, CarId, FleetError, FleetResult, PageRequest, ValidateExt};
use fleet_repository::CarRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Car service backed by an injected [`CarRepository`].
#[derive(Component)]
#[shaku(interface = CarService)]
pub struct CarServiceImpl {
    #[shaku(inject)]
    car_repository: Arc<dyn CarRepository>,
}

impl CarServiceImpl {
    /// Creates a new car service.
    #[must_use]
    pub fn new(car_repository: Arc<dyn CarRepository>) -> Self {
        Self { car_repository }
    }
}

#[async_trait]
impl CarService for CarServiceImpl {
    async fn get_car(&self, id: CarId) -> FleetResult<Option<Car>> {
        debug!("Getting car: {}", id);
        self.car_repository.find_by_id(id).await
    }

    async fn list_cars(&self, page: PageRequest) -> FleetResult<Vec<Car>> {
        debug!(
            "Listing cars, page: {}, size: {}, direction: {}",
            page.page, page.size, page.direction
        );
        self.car_repository.find_all(page).await
    }

    async fn create_car(&self, car: Car) -> FleetResult<Car> {
        debug!("Creating car: {} {}", car.make, car.model);

        if car.id.is_some() {
            return Err(FleetError::invalid_argument(CAR_ID_MUST_BE_ABSENT));
        }
        car.validate_request()?;

        let saved = self.car_repository.save(&car).await?;
        let id = saved
            .id
            .ok_or_else(|| FleetError::internal("Store returned a car without an id"))?;

        info!("Car created: {}", id);
        Ok(saved)
    }

    async fn update_car(&self, car: Car) -> FleetResult<Car> {
        let id = match car.id {
            Some(id) if self.car_repository.exists_by_id(id).await? => id,
            _ => return Err(FleetError::invalid_argument(NO_CAR_FOR_PROVIDED_ID)),
        };
        debug!("Updating car: {}", id);

        car.validate_request()?;

        // Not atomic: a delete racing between the existence check and the
        // save re-inserts the car.
        let saved = self.car_repository.save(&car).await?;

        info!("Car updated: {}", id);
        Ok(saved)
    }

    async fn delete_car(&self, id: CarId) -> FleetResult<Option<Car>> {
        debug!("Deleting car: {}", id);

        let Some(car) = self.car_repository.find_by_id(id).await? else {
            return Ok(None);
        };
        self.car_repository.delete(&car).await?;

        info!("Car deleted: {}", id);
        Ok(Some(car))
    }

    async fn health_check(&self) -> FleetResult<()> {
        self.car_repository.health_check().await
    }
}

impl std::fmt::Debug for CarServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarServiceImpl").finish_non_exhaustive()
    }
}
