//! # Fleet Server Library
//!
//! Dependency injection modules, logging setup and startup utilities for
//! the Fleet server binary.

pub mod di;
pub mod startup;
pub mod telemetry;
