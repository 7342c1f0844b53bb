//! Versioned, additive schema migrations.
//!
//! Each migration inspects the live schema before acting, so the list can be
//! run on every start against fresh and legacy databases alike. A failing
//! migration is logged and recorded in the [`MigrationReport`]; it never
//! aborts startup.

use crate::DbPool;

/// A single schema change.
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    /// Ordered identifier, e.g. `0001_add_prayer_type`.
    pub version: &'static str,
    pub description: &'static str,
    pub change: SchemaChange,
}

/// The kinds of change a migration may perform.
#[derive(Debug, Clone, Copy)]
pub enum SchemaChange {
    /// `ALTER TABLE {table} ADD COLUMN {column} {definition}` unless the
    /// column is already present.
    AddColumn {
        table: &'static str,
        column: &'static str,
        definition: &'static str,
    },
}

/// All migrations in application order.
pub const MIGRATIONS: &[Migration] = &[Migration {
    version: "0001_add_prayer_type",
    description: "Add prayer_type to rotations, backfilling existing rows with 'Solat Fardu'",
    change: SchemaChange::AddColumn {
        table: "rotations",
        column: "prayer_type",
        definition: "TEXT NOT NULL DEFAULT 'Solat Fardu'",
    },
}];

/// Outcome of one [`run_pending`] pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Versions whose change was executed in this pass.
    pub applied: Vec<&'static str>,
    /// Versions already reflected in the schema.
    pub skipped: Vec<&'static str>,
    /// Versions that errored, with the error text.
    pub failed: Vec<(&'static str, String)>,
}

impl MigrationReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every migration in [`MIGRATIONS`].
pub async fn run_pending(pool: &DbPool) -> MigrationReport {
    run(pool, MIGRATIONS).await
}

/// Run the given migrations in order, continuing past failures.
pub async fn run(pool: &DbPool, migrations: &[Migration]) -> MigrationReport {
    let mut report = MigrationReport::default();

    for migration in migrations {
        match apply(pool, migration).await {
            Ok(true) => {
                tracing::info!(
                    version = migration.version,
                    description = migration.description,
                    "Migration applied",
                );
                report.applied.push(migration.version);
            }
            Ok(false) => {
                tracing::debug!(version = migration.version, "Migration already applied");
                report.skipped.push(migration.version);
            }
            Err(e) => {
                tracing::error!(
                    version = migration.version,
                    error = %e,
                    "Migration failed, continuing without it",
                );
                report.failed.push((migration.version, e.to_string()));
            }
        }
    }

    report
}

/// Apply one migration if needed. Returns `true` if the schema changed.
async fn apply(pool: &DbPool, migration: &Migration) -> Result<bool, sqlx::Error> {
    match migration.change {
        SchemaChange::AddColumn {
            table,
            column,
            definition,
        } => {
            if column_exists(pool, table, column).await? {
                return Ok(false);
            }
            let statement = format!("ALTER TABLE {table} ADD COLUMN {column} {definition}");
            sqlx::query(&statement).execute(pool).await?;
            Ok(true)
        }
    }
}

/// Check whether `table` currently has a column named `column`.
pub async fn column_exists(pool: &DbPool, table: &str, column: &str) -> Result<bool, sqlx::Error> {
    let columns: Vec<String> = sqlx::query_scalar("SELECT name FROM pragma_table_info(?1)")
        .bind(table)
        .fetch_all(pool)
        .await?;
    Ok(columns.iter().any(|c| c == column))
}
