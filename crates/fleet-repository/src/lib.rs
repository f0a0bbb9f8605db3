//! # Fleet Repository
//!
//! The entity store behind the car service.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn CarRepository>       (store interface)
//! MySqlCarRepository                (MySQL / SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```
//!
//! [`InMemoryCarRepository`] implements the same interface on a process-local
//! map for development and tests.

pub mod memory;
pub mod mysql;
pub mod pool;
pub mod traits;

pub use memory::*;
pub use mysql::*;
pub use pool::*;
pub use traits::*;

use chrono::{DateTime, SubsecRound, Utc};

/// Current time at the microsecond precision of a `TIMESTAMP(6)` column, so
/// every store hands back identical values for the same instant.
pub(crate) fn store_timestamp() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
