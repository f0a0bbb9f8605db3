//! Car entity-DTO mapper.

use crate::dto::{CarDto, CarMake};
use fleet_core::{BiMapper, Car, Mapper};

/// Converts between [`Car`] entities and [`CarDto`]s.
///
/// Entity to DTO is lossy: makes outside the closed set collapse to
/// [`CarMake::Other`], and `Other` maps back to the literal `"other"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarMapper;

impl CarMapper {
    /// Builds the wire representation of a car.
    #[must_use]
    pub fn to_dto(car: &Car) -> CarDto {
        CarDto {
            id: car.id,
            make: CarMake::normalize(&car.make),
            model: car.model.clone(),
            mileage: car.mileage,
        }
    }

    /// Builds an unsaved entity from a DTO. Timestamps are left unset.
    #[must_use]
    pub fn to_entity(dto: CarDto) -> Car {
        Car {
            id: dto.id,
            created_at: None,
            last_updated: None,
            make: dto.make.as_str().to_string(),
            model: dto.model,
            mileage: dto.mileage,
        }
    }

    /// Maps a list of entities, preserving order.
    #[must_use]
    pub fn to_dtos(cars: &[Car]) -> Vec<CarDto> {
        cars.iter().map(Self::to_dto).collect()
    }
}

impl Mapper<Car, CarDto> for CarMapper {
    fn map(from: Car) -> CarDto {
        Self::to_dto(&from)
    }
}

impl BiMapper<Car, CarDto> for CarMapper {
    fn map_back(from: CarDto) -> Car {
        Self::to_entity(from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use fleet_core::CarId;

    fn dto(id: Option<CarId>, make: CarMake) -> CarDto {
        CarDto {
            id,
            make,
            model: "X5".to_string(),
            mileage: 10_000,
        }
    }

    #[test]
    fn test_to_entity_copies_fields() {
        let id = CarId::new();
        let car = CarMapper::to_entity(dto(Some(id), CarMake::Bmw));

        assert_eq!(car.id, Some(id));
        assert_eq!(car.make, "bmw");
        assert_eq!(car.model, "X5");
        assert_eq!(car.mileage, 10_000);
        assert!(car.created_at.is_none());
        assert!(car.last_updated.is_none());
    }

    #[test]
    fn test_to_dto_drops_timestamps() {
        let mut car = Car::with_id(CarId::new(), "audi", "A4", 3);
        car.created_at = Some(Utc::now());

        let dto = CarMapper::to_dto(&car);
        assert_eq!(dto.id, car.id);
        assert_eq!(dto.make, CarMake::Audi);
        assert_eq!(dto.model, "A4");
        assert_eq!(dto.mileage, 3);
    }

    #[test]
    fn test_canonical_makes_round_trip() {
        for make in CarMake::ALL {
            let original = dto(Some(CarId::new()), make);
            let back = CarMapper::map(CarMapper::map_back(original.clone()));
            assert_eq!(back, original);
        }
    }

    #[test]
    fn test_other_maps_back_to_literal() {
        let car = CarMapper::to_entity(dto(None, CarMake::Other));
        assert_eq!(car.make, "other");
    }

    #[test]
    fn test_unknown_make_collapses_to_other() {
        let dto = CarMapper::to_dto(&Car::new("tesla", "Model S", 0));
        assert_eq!(dto.make, CarMake::Other);
        assert_eq!(dto.model, "Model S");
    }

    #[test]
    fn test_make_match_is_case_sensitive() {
        let dto = CarMapper::to_dto(&Car::new("Mercedes", "C200", 0));
        assert_eq!(dto.make, CarMake::Other);
    }

    #[test]
    fn test_to_dtos_preserves_order() {
        let cars = vec![Car::new("bmw", "1", 0), Car::new("vw", "2", 0)];
        let dtos = CarMapper::to_dtos(&cars);
        let models: Vec<_> = dtos.iter().map(|d| d.model.as_str()).collect();
        assert_eq!(models, vec!["1", "2"]);
    }
}
