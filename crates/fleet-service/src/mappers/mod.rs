//! Entity-DTO mappers.

mod car_mapper;

pub use car_mapper::*;
