//! Domain entities for Fleet.

pub mod car;

pub use car::*;
