//! REST API controllers.

pub mod car_controller;
pub mod health_controller;

pub use health_controller::*;
