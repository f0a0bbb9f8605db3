//! Car DTOs and response envelopes.

use fleet_core::CarId;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use validator::Validate;

/// Manufacturer as exposed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CarMake {
    Mercedes,
    Bmw,
    Audi,
    Vw,
    /// Anything not covered by the named variants.
    Other,
}

impl CarMake {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 5] = [Self::Mercedes, Self::Bmw, Self::Audi, Self::Vw, Self::Other];

    /// Returns the wire string for this make.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mercedes => "mercedes",
            Self::Bmw => "bmw",
            Self::Audi => "audi",
            Self::Vw => "vw",
            Self::Other => "other",
        }
    }

    /// Maps a free-text make onto the closed set.
    ///
    /// Matching is exact and case-sensitive; every unmatched string,
    /// including `"BMW"`, becomes [`CarMake::Other`].
    #[must_use]
    pub fn normalize(make: &str) -> Self {
        match make {
            "mercedes" => Self::Mercedes,
            "bmw" => Self::Bmw,
            "audi" => Self::Audi,
            "vw" => Self::Vw,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for CarMake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Car representation exchanged with clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CarDto {
    /// Absent on create, required on update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Uuid)]
    pub id: Option<CarId>,

    pub make: CarMake,

    #[schema(example = "X5")]
    pub model: String,

    #[validate(range(min = 0, message = "Mileage must not be negative"))]
    #[schema(minimum = 0, example = 10000)]
    pub mileage: i32,
}

/// Envelope for operations that return at most one car.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SingleCarResponse {
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car: Option<CarDto>,
}

impl SingleCarResponse {
    /// Envelope carrying a car.
    #[must_use]
    pub fn with_car(description: impl Into<String>, car: CarDto) -> Self {
        Self {
            description: description.into(),
            car: Some(car),
        }
    }

    /// Envelope without a payload.
    #[must_use]
    pub fn empty(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            car: None,
        }
    }
}

/// Envelope for list operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MultiCarResponse {
    pub description: String,

    #[serde(default)]
    pub cars: Vec<CarDto>,
}

impl MultiCarResponse {
    /// Envelope carrying a page of cars.
    #[must_use]
    pub fn new(description: impl Into<String>, cars: Vec<CarDto>) -> Self {
        Self {
            description: description.into(),
            cars,
        }
    }

    /// Envelope without a payload.
    #[must_use]
    pub fn empty(description: impl Into<String>) -> Self {
        Self::new(description, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(make: CarMake, mileage: i32) -> CarDto {
        CarDto {
            id: None,
            make,
            model: "X5".to_string(),
            mileage,
        }
    }

    #[test]
    fn test_make_wire_names() {
        for make in CarMake::ALL {
            let json = serde_json::to_value(make).unwrap();
            assert_eq!(json, json!(make.as_str()));
            assert_eq!(CarMake::normalize(make.as_str()), make);
        }
    }

    #[test]
    fn test_normalize_is_case_sensitive() {
        assert_eq!(CarMake::normalize("bmw"), CarMake::Bmw);
        assert_eq!(CarMake::normalize("BMW"), CarMake::Other);
        assert_eq!(CarMake::normalize("tesla"), CarMake::Other);
        assert_eq!(CarMake::normalize(""), CarMake::Other);
    }

    #[test]
    fn test_dto_without_id_omits_field() {
        let json = serde_json::to_value(dto(CarMake::Bmw, 10_000)).unwrap();
        assert_eq!(json, json!({"make": "bmw", "model": "X5", "mileage": 10000}));
    }

    #[test]
    fn test_dto_deserializes_with_id() {
        let dto: CarDto = serde_json::from_value(json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "make": "audi",
            "model": "A4",
            "mileage": 5
        }))
        .unwrap();

        assert_eq!(dto.id.unwrap().to_string(), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(dto.make, CarMake::Audi);
    }

    #[test]
    fn test_dto_rejects_unknown_make() {
        let result: Result<CarDto, _> =
            serde_json::from_value(json!({"make": "tesla", "model": "S", "mileage": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn test_dto_mileage_validation() {
        assert!(dto(CarMake::Vw, 0).validate().is_ok());

        let errors = dto(CarMake::Vw, -5).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("mileage"));
    }

    #[test]
    fn test_single_envelope_omits_missing_car() {
        let json = serde_json::to_value(SingleCarResponse::empty("No car found for id x")).unwrap();
        assert_eq!(json, json!({"description": "No car found for id x"}));
    }

    #[test]
    fn test_multi_envelope_serializes_cars() {
        let response = MultiCarResponse::new("Successfully fetched cars", vec![dto(CarMake::Bmw, 1)]);
        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["cars"][0]["make"], "bmw");
    }
}
