//! Server startup utilities.

use fleet_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
    ________           __
   / ____/ /__  ___  _/ /_
  / /_  / / _ \/ _ \/_  __/
 / __/ / /  __/  __/ / /_
/_/   /_/\___/\___/  \__/
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("Cars API:  http://{}/cars", addr);
    info!("Health:    http://{}/health", addr);
    info!("API Docs:  http://{}/swagger-ui", addr);
    info!("Storage:   {}", config.database.backend);
    info!("{}", separator);
}
