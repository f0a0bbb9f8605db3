//! Data Transfer Objects (DTOs).

mod car_dto;

pub use car_dto::*;
