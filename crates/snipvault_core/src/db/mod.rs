//! Database layer for SnipVault.

/// Snippet storage helpers.
pub mod snippet;
/// redb table definitions.
pub mod tables;

use crate::error::AppError;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Database handle with access to the snippet store.
pub struct Database {
    pub db: Arc<redb::Database>,
    pub snippets: snippet::SnippetDb,
}

impl Database {
    /// Open (or create) the database directory and initialize tables.
    ///
    /// # Returns
    /// A fully initialized [`Database`].
    ///
    /// # Errors
    /// Returns an error if redb cannot open the database file or the
    /// tables cannot be created.
    pub fn new(path: &str) -> Result<Self, AppError> {
        let dir = Path::new(path);
        if let Err(err) = std::fs::create_dir_all(dir) {
            warn!("could not create database directory {}: {}", path, err);
        }
        let db = Arc::new(redb::Database::create(dir.join(tables::REDB_FILE_NAME))?);
        debug!("opened redb database at {}", path);
        Ok(Self {
            snippets: snippet::SnippetDb::new(db.clone())?,
            db,
        })
    }
}
