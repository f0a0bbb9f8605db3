//! Car service trait definition.

use async_trait::async_trait;
use fleet_core::{Car, CarId, FleetResult, Interface, PageRequest};

/// Rejection for a create request that already carries an id.
pub const CAR_ID_MUST_BE_ABSENT: &str = "Car id must be absent when creating a car";

/// Rejection for an update that does not reference a stored car.
pub const NO_CAR_FOR_PROVIDED_ID: &str = "No car found for the provided id";

/// Car service trait.
#[async_trait]
pub trait CarService: Interface + Send + Sync {
    /// Gets a car by ID, `None` if it does not exist.
    async fn get_car(&self, id: CarId) -> FleetResult<Option<Car>>;

    /// Lists one page of cars ordered by creation time.
    async fn list_cars(&self, page: PageRequest) -> FleetResult<Vec<Car>>;

    /// Creates a car. The car must not carry an id.
    async fn create_car(&self, car: Car) -> FleetResult<Car>;

    /// Overwrites an existing car. The car must reference a stored id.
    async fn update_car(&self, car: Car) -> FleetResult<Car>;

    /// Deletes a car, returning it as it was before deletion.
    async fn delete_car(&self, id: CarId) -> FleetResult<Option<Car>>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> FleetResult<()>;
}
