//! # Fleet Service
//!
//! Business logic service layer for the Fleet car service: the car
//! use cases, their wire DTOs and the entity-DTO mapper.

pub mod car_service;
pub mod dto;
pub mod r#impl;
pub mod mappers;

pub use car_service::*;
pub use dto::*;
pub use mappers::*;
pub use r#impl::CarServiceImpl;
