//! Repository trait definitions.

use async_trait::async_trait;
use fleet_core::{Car, CarId, FleetResult, Interface, PageRequest};

/// Car entity store.
///
/// Implementations assign `id` and `created_at` on first save and refresh
/// `last_updated` on every save.
#[async_trait]
pub trait CarRepository: Interface + Send + Sync {
    /// Finds a car by ID.
    async fn find_by_id(&self, id: CarId) -> FleetResult<Option<Car>>;

    /// Finds one page of cars ordered by creation time.
    async fn find_all(&self, page: PageRequest) -> FleetResult<Vec<Car>>;

    /// Checks if a car with the given ID exists.
    async fn exists_by_id(&self, id: CarId) -> FleetResult<bool>;

    /// Inserts the car, or overwrites the stored one with the same ID.
    ///
    /// The stored `created_at` is never changed by an overwrite.
    async fn save(&self, car: &Car) -> FleetResult<Car>;

    /// Physically removes the car.
    async fn delete(&self, car: &Car) -> FleetResult<()>;

    /// Checks that the store is reachable.
    async fn health_check(&self) -> FleetResult<()> {
        Ok(())
    }
}
