//! Route definitions for the `/rotations` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{headshot, rotations};
use crate::state::AppState;

/// Routes mounted at `/rotations`.
///
/// ```text
/// GET    /           -> list_rotations
/// POST   /           -> create_rotation
/// POST   /headshot   -> process_headshot
/// GET    /{id}       -> get_rotation
/// DELETE /{id}       -> delete_rotation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(rotations::list_rotations).post(rotations::create_rotation),
        )
        .route("/headshot", post(headshot::process_headshot))
        .route(
            "/{id}",
            get(rotations::get_rotation).delete(rotations::delete_rotation),
        )
}
