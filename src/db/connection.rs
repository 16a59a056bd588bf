use crate::db::migrations::MigrationManager;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::PathBuf;

/// Database connection manager for the local order store
pub struct DbConnection;

impl DbConnection {
    /// Get the default order store path
    pub fn default_path() -> PathBuf {
        Self::home_dir().join(".orderboard").join("orders.db")
    }

    /// Get store path from configuration file or default
    ///
    /// The rc file may point the board at a store kept on a shared
    /// location with a `data.location=` line.
    pub fn resolve_path() -> Result<PathBuf> {
        let config_path = Self::config_path();

        if config_path.exists() {
            if let Ok(config) = std::fs::read_to_string(&config_path) {
                for line in config.lines() {
                    let line = line.trim();
                    if let Some(path_str) = line.strip_prefix("data.location=") {
                        let path = PathBuf::from(path_str.trim());

                        // If path is relative, resolve relative to config file directory
                        if path.is_relative() {
                            if let Some(parent) = config_path.parent() {
                                return Ok(parent.join(path));
                            }
                        }
                        return Ok(path);
                    }
                }
            }
        }

        Ok(Self::default_path())
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::home_dir().join(".orderboard").join("rc")
    }

    fn home_dir() -> PathBuf {
        dirs::home_dir().expect("could not determine home directory")
    }

    /// Connect to the order store, creating it and parent directories if needed
    pub fn connect() -> Result<Connection> {
        let db_path = Self::resolve_path()?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let conn = Connection::open(&db_path)
            .with_context(|| format!("Failed to open order store: {}", db_path.display()))?;

        // Initialize schema
        MigrationManager::initialize(&conn)
            .context("Failed to initialize order store schema")?;

        Ok(conn)
    }

    /// Connect to an in-memory store (for testing)
    pub fn connect_in_memory() -> Result<Connection> {
        let conn = Connection::open_in_memory()
            .context("Failed to open in-memory order store")?;

        MigrationManager::initialize(&conn)
            .context("Failed to initialize order store schema")?;

        Ok(conn)
    }
}
