//! Duty record (roster rotation) models and DTOs.

use mias_core::error::CoreError;
use mias_core::roster::NewDutyRecord;
use mias_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `rotations` table.
///
/// `task`, `prayer_type` and `duty_date` are kept as stored text so legacy
/// rows written outside the validated API still load.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DutyRecord {
    pub id: DbId,
    pub name: String,
    pub task: String,
    pub prayer_type: String,
    pub duty_date: String,
    pub image_data: Option<String>,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a duty record.
///
/// Every field is optional on the wire so that absent and blank values
/// both surface as a missing-fields validation error instead of a
/// deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateDutyRecord {
    pub name: Option<String>,
    pub task: Option<String>,
    pub prayer_type: Option<String>,
    pub duty_date: Option<String>,
    pub image_data: Option<String>,
}

impl CreateDutyRecord {
    /// Validate into a [`NewDutyRecord`] ready for insertion.
    pub fn validate(&self) -> Result<NewDutyRecord, CoreError> {
        NewDutyRecord::validate(
            self.name.as_deref(),
            self.task.as_deref(),
            self.prayer_type.as_deref(),
            self.duty_date.as_deref(),
            self.image_data.as_deref(),
        )
    }
}
