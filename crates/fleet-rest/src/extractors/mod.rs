//! Custom Axum extractors.
//!
//! Every rejection is rendered as a `400` car envelope so clients see the
//! same body shape whether the handler ran or not.

mod car_id;
mod pagination;
mod validated;

pub use car_id::*;
pub use pagination::*;
pub use validated::*;
