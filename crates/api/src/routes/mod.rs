pub mod health;
pub mod rotations;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /rotations                       list, create
/// /rotations/headshot              headshot transformation
/// /rotations/{id}                  get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/rotations", rotations::router())
}
