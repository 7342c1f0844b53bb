//! Handlers for the `/rotations` resource (duty roster records).
//!
//! Validation happens before any store call; store failures are mapped to
//! a distinct user-facing message per operation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mias_core::error::CoreError;
use mias_core::types::DbId;
use mias_db::models::duty_record::CreateDutyRecord;
use mias_db::repositories::DutyRecordRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::DataResponse;
use crate::state::AppState;

/// Shown when the roster cannot be read.
pub const FETCH_FAILED: &str = "Failed to fetch rotations";

/// Shown when a new record cannot be persisted.
pub const SAVE_FAILED: &str = "Gagal menyimpan ke pangkalan data. Sila hubungi pentadbir.";

/// Shown when a delete cannot be executed.
pub const DELETE_FAILED: &str = "Failed to delete rotation";

/// Payload returned after a successful create.
#[derive(Debug, Serialize)]
pub struct CreatedRotation {
    pub id: DbId,
}

/// Payload returned after a delete, whether or not a row matched.
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    pub success: bool,
}

/// GET /api/v1/rotations
///
/// List every duty record, most recent duty date first.
pub async fn list_rotations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let records = DutyRecordRepo::list(&state.pool)
        .await
        .map_err(|e| AppError::store(FETCH_FAILED, e))?;

    Ok(Json(DataResponse { data: records }))
}

/// GET /api/v1/rotations/{id}
pub async fn get_rotation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let record = DutyRecordRepo::find_by_id(&state.pool, id)
        .await
        .map_err(|e| AppError::store(FETCH_FAILED, e))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "DutyRecord",
            id,
        }))?;

    Ok(Json(DataResponse { data: record }))
}

/// POST /api/v1/rotations
///
/// Create a duty record. Returns 400 without touching the store when any of
/// `name`, `task`, `prayer_type`, `duty_date` is absent or blank.
pub async fn create_rotation(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateDutyRecord>,
) -> AppResult<impl IntoResponse> {
    let record = input.validate()?;

    let id = DutyRecordRepo::create(&state.pool, &record)
        .await
        .map_err(|e| AppError::store(SAVE_FAILED, e))?;

    tracing::info!(
        rotation_id = id,
        task = record.task.as_str(),
        prayer_type = record.prayer_type.as_str(),
        duty_date = %record.duty_date,
        has_image = record.image_data.is_some(),
        "Duty record created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: CreatedRotation { id } })))
}

/// DELETE /api/v1/rotations/{id}
///
/// Unconditional delete. Succeeds even when no record has this ID.
pub async fn delete_rotation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = DutyRecordRepo::delete(&state.pool, id)
        .await
        .map_err(|e| AppError::store(DELETE_FAILED, e))?;

    tracing::info!(rotation_id = id, deleted, "Duty record delete requested");

    Ok(Json(DataResponse {
        data: DeleteAck { success: true },
    }))
}
