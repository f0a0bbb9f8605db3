//! MySQL car repository implementation.

use crate::{store_timestamp, traits::CarRepository, DatabasePoolInterface};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fleet_core::{Car, CarId, FleetError, FleetResult, PageRequest};
use shaku::Component;
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// MySQL car repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = CarRepository)]
pub struct MySqlCarRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlCarRepository {
    /// Creates a new MySQL car repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a car.
#[derive(Debug, FromRow)]
struct CarRow {
    id: String, // CHAR(36)
    created_at: DateTime<Utc>,
    last_updated: DateTime<Utc>,
    make: String,
    model: String,
    mileage: i32,
}

impl TryFrom<CarRow> for Car {
    type Error = FleetError;

    fn try_from(row: CarRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map_err(|e| FleetError::Internal(format!("Invalid UUID in database: {}", e)))?;

        Ok(Car {
            id: Some(CarId::from_uuid(id)),
            created_at: Some(row.created_at),
            last_updated: Some(row.last_updated),
            make: row.make,
            model: row.model,
            mileage: row.mileage,
        })
    }
}

#[async_trait]
impl CarRepository for MySqlCarRepository {
    async fn find_by_id(&self, id: CarId) -> FleetResult<Option<Car>> {
        debug!("Finding car by id: {}", id);

        let row = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, created_at, last_updated, make, model, mileage
            FROM cars
            WHERE id = ?
            "#,
        )
        .bind(id.to_string())
        .fetch_optional(self.pool.inner())
        .await?;

        row.map(Car::try_from).transpose()
    }

    async fn find_all(&self, page: PageRequest) -> FleetResult<Vec<Car>> {
        debug!(
            "Finding cars, page: {}, size: {}, direction: {}",
            page.page, page.size, page.direction
        );

        // id breaks ties between rows created in the same microsecond
        let direction = page.direction.as_sql();
        let sql = format!(
            r#"
            SELECT id, created_at, last_updated, make, model, mileage
            FROM cars
            ORDER BY {field} {direction}, id {direction}
            LIMIT ? OFFSET ?
            "#,
            field = PageRequest::SORT_FIELD,
            direction = direction,
        );

        let rows = sqlx::query_as::<_, CarRow>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(self.pool.inner())
            .await?;

        rows.into_iter().map(Car::try_from).collect()
    }

    async fn exists_by_id(&self, id: CarId) -> FleetResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cars WHERE id = ?")
            .bind(id.to_string())
            .fetch_one(self.pool.inner())
            .await?;

        Ok(count > 0)
    }

    async fn save(&self, car: &Car) -> FleetResult<Car> {
        let id = car.id.unwrap_or_else(CarId::new);
        let now = store_timestamp();
        debug!("Saving car: {}", id);

        // MySQL has no RETURNING, so upsert then select
        sqlx::query(
            r#"
            INSERT INTO cars (id, created_at, last_updated, make, model, mileage)
            VALUES (?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                last_updated = VALUES(last_updated),
                make = VALUES(make),
                model = VALUES(model),
                mileage = VALUES(mileage)
            "#,
        )
        .bind(id.to_string())
        .bind(car.created_at.unwrap_or(now))
        .bind(now)
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.mileage)
        .execute(self.pool.inner())
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| FleetError::internal("Failed to fetch saved car"))
    }

    async fn delete(&self, car: &Car) -> FleetResult<()> {
        let id = car
            .id
            .ok_or_else(|| FleetError::invalid_argument("Cannot delete a car without an id"))?;
        debug!("Deleting car: {}", id);

        sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id.to_string())
            .execute(self.pool.inner())
            .await?;

        Ok(())
    }

    async fn health_check(&self) -> FleetResult<()> {
        self.pool.health_check().await
    }
}

impl std::fmt::Debug for MySqlCarRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MySqlCarRepository").finish_non_exhaustive()
    }
}
