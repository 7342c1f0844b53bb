//! Record Store for the duty roster.
//!
//! Owns the SQLite connection pool, the `rotations` table schema and its
//! additive migrations, and the repository used by the API layer.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod migrations;
pub mod models;
pub mod repositories;

pub use migrations::MigrationReport;

pub type DbPool = sqlx::SqlitePool;

/// Base schema of the `rotations` table.
///
/// Columns added later live in [`migrations`], never here, so that an
/// existing database and a fresh one converge on the same shape.
const CREATE_ROTATIONS_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS rotations ( \
        id INTEGER PRIMARY KEY AUTOINCREMENT, \
        name TEXT NOT NULL, \
        task TEXT NOT NULL, \
        duty_date TEXT NOT NULL, \
        image_data TEXT, \
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP \
    )";

/// Create a connection pool from a database URL.
///
/// The database file is created if it does not exist yet.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create a pool backed by a private in-memory database.
///
/// Pinned to a single long-lived connection, since every SQLite memory
/// connection opens its own empty database.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Ensure the schema exists and apply pending migrations.
///
/// Safe to call on every start. Failing to create the base table is an
/// error; migration failures are logged and reported but never returned.
pub async fn initialize(pool: &DbPool) -> Result<MigrationReport, sqlx::Error> {
    sqlx::query(CREATE_ROTATIONS_TABLE).execute(pool).await?;
    Ok(migrations::run_pending(pool).await)
}
