//! Root-level health check for the roster service.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health report for `GET /health`.
#[derive(Debug, Serialize)]
pub struct RosterHealth {
    /// `ok` when the store is reachable and fully migrated, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Whether the `prayer_type` migration has landed on `rotations`.
    pub prayer_type_column: bool,
    /// Whether an image service key is configured.
    pub headshot_configured: bool,
}

async fn roster_health(State(state): State<AppState>) -> Json<RosterHealth> {
    let db_healthy = mias_db::health_check(&state.pool).await.is_ok();

    let prayer_type_column = db_healthy
        && mias_db::migrations::column_exists(&state.pool, "rotations", "prayer_type")
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Could not inspect rotations schema");
                false
            });

    let status = if db_healthy && prayer_type_column {
        "ok"
    } else {
        "degraded"
    };

    Json(RosterHealth {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        prayer_type_column,
        headshot_configured: !state.config.gemini.api_key.is_empty(),
    })
}

/// Mount `/health` (root level, outside `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(roster_health))
}
