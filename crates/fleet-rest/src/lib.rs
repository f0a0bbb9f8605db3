//! # Fleet REST
//!
//! REST API layer using Axum for the Fleet car service.
//! Provides the `/cars` endpoints behind HTTP Basic authentication,
//! health checks and the OpenAPI document.

pub mod controllers;
pub mod delegate;
pub mod extractors;
pub mod middleware;
pub mod openapi;
pub mod responses;
pub mod router;
pub mod state;

pub use delegate::*;
pub use router::*;
pub use state::*;
