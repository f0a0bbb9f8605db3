//! Application state for Axum handlers.

use crate::delegate::CarApiDelegate;
use fleet_service::CarService;
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub cars: Arc<CarApiDelegate>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(car_service: Arc<dyn CarService>) -> Self {
        Self {
            cars: Arc::new(CarApiDelegate::new(car_service)),
        }
    }

    /// Resolves the car service from a shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn CarService>,
    {
        Self::new(module.resolve())
    }
}
