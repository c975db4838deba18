use std::sync::Arc;

use office_core::catalog::EpisodeCatalog;
use office_core::health::HealthCheckService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; everything inside is immutable and behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Read-only episode catalog.
    pub catalog: Arc<EpisodeCatalog>,
    /// Uptime clock and health payload builder.
    pub health: Arc<HealthCheckService>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by the built-in dataset.
    pub fn new(config: ServerConfig) -> Self {
        Self::with_catalog(config, EpisodeCatalog::builtin())
    }

    pub fn with_catalog(config: ServerConfig, catalog: EpisodeCatalog) -> Self {
        let health = HealthCheckService::new(env!("CARGO_PKG_VERSION"), catalog.len());
        Self {
            catalog: Arc::new(catalog),
            health: Arc::new(health),
            config: Arc::new(config),
        }
    }
}
