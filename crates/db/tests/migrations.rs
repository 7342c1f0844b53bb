//! Tests for schema initialization and additive migrations.

use mias_db::migrations::{self, Migration, SchemaChange};
use mias_db::repositories::DutyRecordRepo;
use mias_db::DbPool;

/// Schema as it existed before `prayer_type` was introduced.
const LEGACY_SCHEMA: &str = "\
    CREATE TABLE rotations ( \
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        name TEXT NOT NULL, \
        task TEXT NOT NULL, \
        duty_date TEXT NOT NULL, \
        image_data TEXT, \
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP \
    )";

async fn legacy_pool() -> DbPool {
    let pool = mias_db::create_memory_pool().await.unwrap();
    sqlx::query(LEGACY_SCHEMA).execute(&pool).await.unwrap();
    sqlx::query(
        "INSERT INTO rotations (name, task, duty_date) \
         VALUES ('Umar', 'Imam', '2023-04-21'), ('Yusuf', 'Bilal', '2023-04-22')",
    )
    .execute(&pool)
    .await
    .unwrap();
    pool
}

#[tokio::test]
async fn fresh_database_gains_prayer_type() {
    let pool = mias_db::create_memory_pool().await.unwrap();

    let report = mias_db::initialize(&pool).await.unwrap();

    assert_eq!(report.applied, ["0001_add_prayer_type"]);
    assert!(report.failed.is_empty());
    assert!(migrations::column_exists(&pool, "rotations", "prayer_type")
        .await
        .unwrap());
}

#[tokio::test]
async fn initialize_is_idempotent() {
    let pool = mias_db::create_memory_pool().await.unwrap();

    mias_db::initialize(&pool).await.unwrap();
    let second = mias_db::initialize(&pool).await.unwrap();

    assert!(second.applied.is_empty());
    assert_eq!(second.skipped, ["0001_add_prayer_type"]);

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM pragma_table_info('rotations') WHERE name = 'prayer_type'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn legacy_rows_default_to_solat_fardu() {
    let pool = legacy_pool().await;

    let report = mias_db::initialize(&pool).await.unwrap();
    assert_eq!(report.applied, ["0001_add_prayer_type"]);

    let records = DutyRecordRepo::list(&pool).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.prayer_type == "Solat Fardu"));
    assert_eq!(records[0].name, "Yusuf");
}

#[tokio::test]
async fn legacy_table_lists_before_migration() {
    let pool = legacy_pool().await;

    let records = DutyRecordRepo::list(&pool).await.unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.prayer_type == "Solat Fardu"));

    let first = DutyRecordRepo::find_by_id(&pool, records[1].id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.name, "Umar");
    assert_eq!(first.prayer_type, "Solat Fardu");
}

#[tokio::test]
async fn failed_migration_is_reported_not_raised() {
    let pool = mias_db::create_memory_pool().await.unwrap();

    // No rotations table yet, so the ALTER cannot succeed.
    let report = migrations::run_pending(&pool).await;

    assert!(!report.is_clean());
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.failed[0].0, "0001_add_prayer_type");
    assert!(report.applied.is_empty());
}

#[tokio::test]
async fn later_migrations_run_after_a_failure() {
    let pool = legacy_pool().await;

    let steps = [
        Migration {
            version: "0001_broken",
            description: "targets a table that does not exist",
            change: SchemaChange::AddColumn {
                table: "missing_table",
                column: "anything",
                definition: "TEXT",
            },
        },
        Migration {
            version: "0002_note",
            description: "adds a nullable note column",
            change: SchemaChange::AddColumn {
                table: "rotations",
                column: "note",
                definition: "TEXT",
            },
        },
    ];

    let report = migrations::run(&pool, &steps).await;

    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.applied, ["0002_note"]);
    assert!(migrations::column_exists(&pool, "rotations", "note")
        .await
        .unwrap());
}
