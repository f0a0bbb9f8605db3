//! Dependency injection modules using Shaku.
//!
//! - `MySqlModule`: car service over the MySQL store
//! - `InMemoryModule`: car service over the process-local store

use fleet_config::{DatabaseConfig, SecurityConfig};
use fleet_core::{module, FleetResult};
use fleet_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, InMemoryCarRepository,
    MySqlCarRepository,
};
use fleet_security::{BasicAuthenticator, BasicCredentials, PasswordHasher};
use fleet_service::CarServiceImpl;
use std::sync::Arc;
use tracing::info;

// ============================================================================
// Shaku Module Definitions
// ============================================================================

module! {
    pub MySqlModule {
        components = [
            DatabasePool,
            MySqlCarRepository,
            CarServiceImpl,
            PasswordHasher,
            BasicAuthenticator,
        ],
        providers = [],
    }
}

module! {
    pub InMemoryModule {
        components = [
            InMemoryCarRepository,
            CarServiceImpl,
            PasswordHasher,
            BasicAuthenticator,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builders
// ============================================================================

/// Resolves the Basic credentials, hashing a plain password if needed.
fn credentials(security_config: &SecurityConfig) -> FleetResult<BasicCredentials> {
    BasicCredentials::from_config(security_config, &PasswordHasher::new())
}

/// Builds the MySQL-backed module.
///
/// Connects the pool and, when configured, applies pending migrations
/// before any component is resolved.
pub async fn build_mysql_module(
    db_config: &DatabaseConfig,
    security_config: &SecurityConfig,
) -> FleetResult<Arc<MySqlModule>> {
    let credentials = credentials(security_config)?;

    let db_pool = DatabasePool::new(db_config).await?;
    if db_config.run_migrations {
        db_pool.run_migrations().await?;
    }

    let module = MySqlModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.into_inner(),
        })
        .with_component_parameters::<BasicAuthenticator>(BasicAuthenticator::parameters(credentials))
        .build();

    info!("MySQL module built");
    Ok(Arc::new(module))
}

/// Builds the in-memory module.
pub fn build_in_memory_module(security_config: &SecurityConfig) -> FleetResult<Arc<InMemoryModule>> {
    let credentials = credentials(security_config)?;

    let module = InMemoryModule::builder()
        .with_component_parameters::<BasicAuthenticator>(BasicAuthenticator::parameters(credentials))
        .build();

    info!("In-memory module built");
    Ok(Arc::new(module))
}
