//! Car entity.

use crate::CarId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Car entity as persisted by the entity store.
///
/// `id` and both timestamps are assigned by the store; a freshly built car
/// carries none of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Car {
    /// Store-assigned identifier.
    pub id: Option<CarId>,

    /// Set once when the car is first saved.
    pub created_at: Option<DateTime<Utc>>,

    /// Refreshed on every save.
    pub last_updated: Option<DateTime<Utc>>,

    /// Manufacturer, free text.
    pub make: String,

    /// Model name, free text.
    pub model: String,

    /// Odometer reading.
    #[validate(range(min = 0, message = "Mileage must not be negative"))]
    pub mileage: i32,
}

impl Car {
    /// Creates a car that has not been persisted yet.
    #[must_use]
    pub fn new(make: impl Into<String>, model: impl Into<String>, mileage: i32) -> Self {
        Self {
            id: None,
            created_at: None,
            last_updated: None,
            make: make.into(),
            model: model.into(),
            mileage,
        }
    }

    /// Creates a car referencing an existing identifier.
    #[must_use]
    pub fn with_id(
        id: CarId,
        make: impl Into<String>,
        model: impl Into<String>,
        mileage: i32,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(make, model, mileage)
        }
    }
}
