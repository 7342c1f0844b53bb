//! Handler for the headshot transformation proxy.
//!
//! Keeps the image service key on the server. The client uploads a photo,
//! waits for the edited result and only then may submit the record.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use mias_imaging::SourceImage;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::DataResponse;
use crate::state::AppState;

/// Shown when the image service fails or returns no image.
pub const HEADSHOT_FAILED: &str = "Gagal memproses gambar. Sila cuba lagi.";

/// Request body for `POST /rotations/headshot`.
#[derive(Debug, Deserialize)]
pub struct HeadshotRequest {
    /// Base64 image or `data:` URL.
    pub image: String,
    /// Required when `image` is bare base64.
    pub mime_type: Option<String>,
}

/// Edited image, ready to be sent back as `image_data` on create.
#[derive(Debug, Serialize)]
pub struct HeadshotResponse {
    pub image_data: String,
}

/// POST /api/v1/rotations/headshot
///
/// Single attempt, no retry. A failed or empty transformation is a 502 and
/// the client keeps the record's image unset.
pub async fn process_headshot(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<HeadshotRequest>,
) -> AppResult<impl IntoResponse> {
    let source = SourceImage::from_upload(&input.image, input.mime_type.as_deref())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let edited = state
        .headshot_editor
        .edit(&source)
        .await
        .ok_or_else(|| AppError::ExternalService(HEADSHOT_FAILED.to_string()))?;

    Ok(Json(DataResponse {
        data: HeadshotResponse {
            image_data: edited.to_data_url(),
        },
    }))
}
