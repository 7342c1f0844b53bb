use std::sync::Arc;

use mias_imaging::HeadshotEditor;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened and initialized once at startup.
    pub pool: mias_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// External headshot transformation service.
    pub headshot_editor: Arc<dyn HeadshotEditor>,
}
