//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode for data integrity.
//! UUIDs are stored as strings. The `template` enum is stored as a
//! string with an ASSERT constraint. Slug uniqueness is enforced by a
//! UNIQUE index so that claiming a slug is atomic with the site insert.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
    #[allow(dead_code)]
    name: String,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1 — initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Sites (one record per claimed slug)
-- =======================================================================
DEFINE TABLE site SCHEMAFULL;
DEFINE FIELD slug ON TABLE site TYPE string;
DEFINE FIELD name ON TABLE site TYPE string;
DEFINE FIELD description ON TABLE site TYPE string DEFAULT '';
DEFINE FIELD profile_image ON TABLE site TYPE string DEFAULT '';
DEFINE FIELD template ON TABLE site TYPE string \
    ASSERT $value IN ['guestbook', 'calendar'];
DEFINE FIELD created_at ON TABLE site TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_site_slug ON TABLE site COLUMNS slug UNIQUE;

-- =======================================================================
-- Events (calendar sub-resource; site_id is not validated)
-- =======================================================================
DEFINE TABLE event SCHEMAFULL;
DEFINE FIELD site_id ON TABLE event TYPE string;
DEFINE FIELD date ON TABLE event TYPE string;
DEFINE FIELD title ON TABLE event TYPE string;
DEFINE FIELD description ON TABLE event TYPE string DEFAULT '';
DEFINE FIELD is_notice ON TABLE event TYPE bool DEFAULT false;
DEFINE FIELD created_at ON TABLE event TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_event_site ON TABLE event COLUMNS site_id;

-- =======================================================================
-- Guestbook entries (append-only sub-resource)
-- =======================================================================
DEFINE TABLE guestbook_entry SCHEMAFULL
    PERMISSIONS
        FOR create FULL
        FOR select FULL
        FOR update NONE
        FOR delete NONE;
DEFINE FIELD site_id ON TABLE guestbook_entry TYPE string;
DEFINE FIELD name ON TABLE guestbook_entry TYPE string;
DEFINE FIELD message ON TABLE guestbook_entry TYPE string;
DEFINE FIELD created_at ON TABLE guestbook_entry TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_guestbook_site ON TABLE guestbook_entry \
    COLUMNS site_id;
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Run all pending migrations against the given SurrealDB client.
///
/// Creates a `_migration` tracking table on first run, then applies
/// each migration whose version exceeds the current maximum.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<(), DbError> {
    // Ensure migration tracking table exists (idempotent).
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    // Determine current schema version.
    let mut result = db
        .query("SELECT * FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    let current_version = records.first().map(|m| m.version).unwrap_or(0);

    for migration in MIGRATIONS {
        if migration.version > current_version {
            info!(
                version = migration.version,
                name = migration.name,
                "Applying migration"
            );
            db.query(migration.sql).await?.check().map_err(|e| {
                DbError::Migration(format!(
                    "Migration v{} '{}' failed: {}",
                    migration.version, migration.name, e,
                ))
            })?;

            // Record the applied migration.
            db.query(
                "CREATE _migration SET version = $version, \
                 name = $name",
            )
            .bind(("version", migration.version))
            .bind(("name", migration.name))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!(
                    "Failed to record migration v{}: {}",
                    migration.version, e,
                ))
            })?;

            info!(
                version = migration.version,
                "Migration applied successfully"
            );
        }
    }

    Ok(())
}
