//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use uuid::Uuid;

/// A strongly-typed wrapper for car IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(transparent)]
pub struct CarId(pub Uuid);

impl CarId {
    /// Creates a new time-ordered car ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a car ID from a UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses a car ID from a string.
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Returns the inner UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for CarId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CarId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Uuid> for CarId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<CarId> for Uuid {
    fn from(id: CarId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_id_creation() {
        let id1 = CarId::new();
        let id2 = CarId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_car_id_parsing() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = CarId::parse(uuid_str).unwrap();
        assert_eq!(id.to_string(), uuid_str);
        assert_eq!(uuid_str.parse::<CarId>().unwrap(), id);
    }

    #[test]
    fn test_car_id_parsing_rejects_garbage() {
        assert!(CarId::parse("not-a-uuid").is_err());
    }

    #[test]
    fn test_car_id_serializes_as_plain_uuid() {
        let id = CarId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
    }
}
