use rusqlite::{Connection, Result};
use std::collections::HashMap;

/// Current database schema version
const CURRENT_VERSION: u32 = 1;

/// Migration system for managing database schema versions
pub struct MigrationManager;

impl MigrationManager {
    /// Initialize the database with the current schema
    /// This creates the schema_version table and applies all migrations
    pub fn initialize(conn: &Connection) -> Result<()> {
        // Create schema_version table to track migrations
        conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY
            )",
            [],
        )?;

        // Get current version
        let current_version: u32 = conn
            .query_row(
                "SELECT COALESCE(MAX(version), 0) FROM schema_version",
                [],
                |row| row.get(0),
            )
            .unwrap_or(0);

        // Apply migrations up to current version
        for version in (current_version + 1)..=CURRENT_VERSION {
            Self::apply_migration(conn, version)?;
        }

        Ok(())
    }

    /// Apply a specific migration by version number
    fn apply_migration(conn: &Connection, version: u32) -> Result<()> {
        let migrations = get_migrations();
        if let Some(migration) = migrations.get(&version) {
            // Execute migration in a transaction
            let tx = conn.unchecked_transaction()?;
            migration(&tx)?;
            tx.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                [version],
            )?;
            tx.commit()?;
            Ok(())
        } else {
            Err(rusqlite::Error::SqliteFailure(
                rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_MISUSE),
                Some(format!("No migration found for version {}", version)),
            ))
        }
    }

    /// Get the current schema version
    pub fn get_version(conn: &Connection) -> Result<u32> {
        conn.query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
    }
}

/// Get all migrations indexed by version
fn get_migrations() -> HashMap<u32, fn(&rusqlite::Transaction) -> Result<(), rusqlite::Error>> {
    let mut migrations: HashMap<u32, fn(&rusqlite::Transaction) -> Result<(), rusqlite::Error>> =
        HashMap::new();
    migrations.insert(1, migration_v1);
    migrations
}

/// Migration v1: Initial schema
///
/// The orders table mirrors the flat row the intake system exports: one
/// row per order line, already joined. Dates are ISO-8601 TEXT, booleans
/// INTEGER 0/1. due_date is NOT NULL - a line without a due date never
/// leaves the intake system.
fn migration_v1(tx: &rusqlite::Transaction) -> Result<(), rusqlite::Error> {
    tx.execute(
        "CREATE TABLE orders (
            id INTEGER PRIMARY KEY,
            product_name TEXT NULL,
            quantity INTEGER NOT NULL DEFAULT 0,
            detail TEXT NULL,
            due_date TEXT NOT NULL,
            expiry_primary TEXT NULL,
            expiry_secondary TEXT NULL,
            requirements TEXT NULL,
            customer_name TEXT NULL,
            reception_number INTEGER NULL,
            preparer_id INTEGER NULL,
            departed INTEGER NULL
        )",
        [],
    )?;

    tx.execute(
        "CREATE INDEX idx_orders_due_date ON orders(due_date)",
        [],
    )?;
    tx.execute(
        "CREATE INDEX idx_orders_reception ON orders(reception_number)",
        [],
    )?;

    Ok(())
}
