//! In-process repository implementations.

mod car_repository;

pub use car_repository::*;
