//! Service implementations.
//!
//! Trait definitions live in the parent module (e.g. `car_service.rs`).

pub mod car_service_impl;

pub use car_service_impl::CarServiceImpl;
