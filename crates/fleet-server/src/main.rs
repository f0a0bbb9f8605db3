//! # Fleet Server
//!
//! Main entry point for the Fleet car service.

use fleet_config::{AppConfig, ConfigLoader, ObservabilityConfig, StorageBackend};
use fleet_core::{FleetError, FleetResult, HasComponent};
use fleet_repository::DatabasePoolInterface;
use fleet_rest::create_router_from_module;
use fleet_security::CredentialsVerifier;
use fleet_server::{
    di::{build_in_memory_module, build_mysql_module},
    startup::{print_banner, print_startup_info},
    telemetry::init_logging,
};
use fleet_service::CarService;
use shaku::Module;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = match ConfigLoader::from_default_location() {
        Ok(loader) => loader.get().await,
        Err(e) => {
            init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.observability);
    print_banner();

    info!("Starting Fleet Server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> FleetResult<()> {
    match config.database.backend {
        StorageBackend::Mysql => {
            let module = build_mysql_module(&config.database, &config.security).await?;
            serve(module.as_ref(), &config).await?;

            let pool: Arc<dyn DatabasePoolInterface> = module.resolve();
            pool.close().await;
        }
        StorageBackend::Memory => {
            let module = build_in_memory_module(&config.security)?;
            serve(module.as_ref(), &config).await?;
        }
    }

    info!("Server shutdown complete");
    Ok(())
}

async fn serve<M>(module: &M, config: &AppConfig) -> FleetResult<()>
where
    M: Module + HasComponent<dyn CarService> + HasComponent<dyn CredentialsVerifier>,
{
    let router = create_router_from_module(module, &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FleetError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

    print_startup_info(config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FleetError::Internal(format!("REST server error: {}", e)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
