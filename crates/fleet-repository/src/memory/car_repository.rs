//! In-memory car repository.

use crate::{store_timestamp, traits::CarRepository};
use async_trait::async_trait;
use fleet_core::{Car, CarId, FleetError, FleetResult, PageRequest};
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use tracing::debug;

/// Car repository backed by a process-local map.
///
/// Data is lost when the process exits.
#[derive(Component, Default)]
#[shaku(interface = CarRepository)]
pub struct InMemoryCarRepository {
    #[shaku(default)]
    cars: RwLock<HashMap<CarId, Car>>,
}

impl InMemoryCarRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored cars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cars.read().len()
    }

    /// Returns true if no cars are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cars.read().is_empty()
    }
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn find_by_id(&self, id: CarId) -> FleetResult<Option<Car>> {
        Ok(self.cars.read().get(&id).cloned())
    }

    async fn find_all(&self, page: PageRequest) -> FleetResult<Vec<Car>> {
        let mut cars: Vec<Car> = self.cars.read().values().cloned().collect();
        cars.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        if page.direction.is_descending() {
            cars.reverse();
        }

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        Ok(cars.into_iter().skip(offset).take(limit).collect())
    }

    async fn exists_by_id(&self, id: CarId) -> FleetResult<bool> {
        Ok(self.cars.read().contains_key(&id))
    }

    async fn save(&self, car: &Car) -> FleetResult<Car> {
        let id = car.id.unwrap_or_else(CarId::new);
        let now = store_timestamp();
        debug!("Saving car: {}", id);

        let mut cars = self.cars.write();
        let created_at = cars
            .get(&id)
            .and_then(|existing| existing.created_at)
            .or(car.created_at)
            .unwrap_or(now);

        let saved = Car {
            id: Some(id),
            created_at: Some(created_at),
            last_updated: Some(now),
            ..car.clone()
        };
        cars.insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete(&self, car: &Car) -> FleetResult<()> {
        let id = car
            .id
            .ok_or_else(|| FleetError::invalid_argument("Cannot delete a car without an id"))?;
        debug!("Deleting car: {}", id);

        self.cars.write().remove(&id);
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryCarRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCarRepository")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use fleet_core::SortDirection;

    fn seeded_car(model: &str, minutes: i64) -> Car {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Car {
            created_at: Some(base + Duration::minutes(minutes)),
            ..Car::new("bmw", model, 1_000)
        }
    }

    async fn seed(repo: &InMemoryCarRepository, count: i64) {
        for i in 0..count {
            repo.save(&seeded_car(&format!("M{}", i), i)).await.unwrap();
        }
    }

    fn models(cars: &[Car]) -> Vec<&str> {
        cars.iter().map(|c| c.model.as_str()).collect()
    }

    #[tokio::test]
    async fn test_save_assigns_id_and_timestamps() {
        let repo = InMemoryCarRepository::new();
        let saved = repo.save(&Car::new("bmw", "X5", 10_000)).await.unwrap();

        assert!(saved.id.is_some());
        assert!(saved.created_at.is_some());
        assert_eq!(saved.created_at, saved.last_updated);
        assert_eq!(saved.make, "bmw");
        assert_eq!(saved.model, "X5");
        assert_eq!(saved.mileage, 10_000);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryCarRepository::new();
        let saved = repo.save(&Car::new("audi", "A4", 5)).await.unwrap();

        let found = repo.find_by_id(saved.id.unwrap()).await.unwrap();
        assert_eq!(found, Some(saved));
        assert!(repo.find_by_id(CarId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_overwrite_preserves_created_at() {
        let repo = InMemoryCarRepository::new();
        let saved = repo.save(&seeded_car("X5", 0)).await.unwrap();
        let id = saved.id.unwrap();

        let mut changed = Car::with_id(id, "bmw", "X6", 20_000);
        changed.created_at = Some(Utc::now());
        let updated = repo.save(&changed).await.unwrap();

        assert_eq!(updated.id, Some(id));
        assert_eq!(updated.created_at, saved.created_at);
        assert_eq!(updated.model, "X6");
        assert_eq!(updated.mileage, 20_000);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_exists_by_id() {
        let repo = InMemoryCarRepository::new();
        let saved = repo.save(&Car::new("vw", "Golf", 0)).await.unwrap();

        assert!(repo.exists_by_id(saved.id.unwrap()).await.unwrap());
        assert!(!repo.exists_by_id(CarId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryCarRepository::new();
        let saved = repo.save(&Car::new("vw", "Golf", 0)).await.unwrap();

        repo.delete(&saved).await.unwrap();

        assert!(repo.is_empty());
        assert!(!repo.exists_by_id(saved.id.unwrap()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_without_id_fails() {
        let repo = InMemoryCarRepository::new();
        let err = repo.delete(&Car::new("vw", "Golf", 0)).await.unwrap_err();
        assert!(matches!(err, FleetError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_find_all_ascending() {
        let repo = InMemoryCarRepository::new();
        seed(&repo, 5).await;

        let page = PageRequest::new(0, 3, SortDirection::Asc).unwrap();
        let cars = repo.find_all(page).await.unwrap();
        assert_eq!(models(&cars), vec!["M0", "M1", "M2"]);

        let page = PageRequest::new(1, 3, SortDirection::Asc).unwrap();
        let cars = repo.find_all(page).await.unwrap();
        assert_eq!(models(&cars), vec!["M3", "M4"]);
    }

    #[tokio::test]
    async fn test_find_all_descending_returns_newest_first() {
        let repo = InMemoryCarRepository::new();
        seed(&repo, 5).await;

        let page = PageRequest::new(0, 2, SortDirection::Desc).unwrap();
        let cars = repo.find_all(page).await.unwrap();
        assert_eq!(models(&cars), vec!["M4", "M3"]);
    }

    #[tokio::test]
    async fn test_find_all_past_the_end_is_empty() {
        let repo = InMemoryCarRepository::new();
        seed(&repo, 2).await;

        let page = PageRequest::new(5, 10, SortDirection::Asc).unwrap();
        assert!(repo.find_all(page).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_health_check_defaults_to_ok() {
        let repo = InMemoryCarRepository::new();
        assert!(repo.health_check().await.is_ok());
    }
}
