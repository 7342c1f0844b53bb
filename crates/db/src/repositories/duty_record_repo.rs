//! Repository for the `rotations` table.

use mias_core::roster::{NewDutyRecord, PrayerType};
use mias_core::types::DbId;

use crate::migrations;
use crate::models::duty_record::DutyRecord;
use crate::DbPool;

/// Provides data access for duty records.
pub struct DutyRecordRepo;

impl DutyRecordRepo {
    /// Column list for `rotations` reads.
    ///
    /// Until `prayer_type` has been added by a migration, rows read back with
    /// the default prayer type in its place.
    async fn columns(pool: &DbPool) -> Result<String, sqlx::Error> {
        let prayer_type = if migrations::column_exists(pool, "rotations", "prayer_type").await? {
            "prayer_type".to_string()
        } else {
            format!("'{}' AS prayer_type", PrayerType::default().as_str())
        };
        Ok(format!(
            "id, name, task, {prayer_type}, duty_date, image_data, created_at"
        ))
    }

    /// List every duty record, most recent duty date first.
    pub async fn list(pool: &DbPool) -> Result<Vec<DutyRecord>, sqlx::Error> {
        let columns = Self::columns(pool).await?;
        let query = format!("SELECT {columns} FROM rotations ORDER BY duty_date DESC");
        sqlx::query_as::<_, DutyRecord>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a duty record by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<DutyRecord>, sqlx::Error> {
        let columns = Self::columns(pool).await?;
        let query = format!("SELECT {columns} FROM rotations WHERE id = ?1");
        sqlx::query_as::<_, DutyRecord>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a validated duty record and return its new ID.
    ///
    /// `id` and `created_at` are generated by the database.
    pub async fn create(pool: &DbPool, record: &NewDutyRecord) -> Result<DbId, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO rotations (name, task, prayer_type, duty_date, image_data) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&record.name)
        .bind(record.task.as_str())
        .bind(record.prayer_type.as_str())
        .bind(record.duty_date)
        .bind(&record.image_data)
        .execute(pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    /// Delete a duty record by ID.
    ///
    /// Returns `true` if a row was removed. A missing ID is not an error.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rotations WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
