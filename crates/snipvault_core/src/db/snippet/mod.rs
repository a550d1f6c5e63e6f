//! Snippet storage operations backed by redb.

use crate::db::tables::{SEQUENCES, SNIPPETS};
use crate::error::AppError;
use crate::models::snippet::{CreateSnippetRequest, Snippet, UpdateSnippetRequest};
use redb::{ReadableDatabase, ReadableTable};
use std::sync::Arc;
use tracing::debug;

/// Sequence row that hands out snippet ids. Deleted ids are never reused.
const SNIPPET_ID_SEQUENCE: &str = "snippet_id";

fn deserialize_snippet(bytes: &[u8]) -> Result<Snippet, bincode::Error> {
    bincode::deserialize(bytes)
}

/// Accessor for snippet-related redb tables.
pub struct SnippetDb {
    db: Arc<redb::Database>,
}

impl SnippetDb {
    /// Initialize snippet tables if they do not exist yet.
    ///
    /// # Returns
    /// A new [`SnippetDb`] accessor bound to `db`.
    ///
    /// # Errors
    /// Returns an error when redb transaction/table initialization fails.
    pub fn new(db: Arc<redb::Database>) -> Result<Self, AppError> {
        let write_txn = db.begin_write()?;
        write_txn.open_table(SNIPPETS)?;
        write_txn.open_table(SEQUENCES)?;
        write_txn.commit()?;
        Ok(Self { db })
    }

    /// Insert a new snippet row, assigning the next id from the sequence.
    ///
    /// # Returns
    /// The persisted [`Snippet`] with id and timestamps filled in.
    ///
    /// # Errors
    /// Returns an error when serialization or storage operations fail.
    pub fn create(&self, request: &CreateSnippetRequest) -> Result<Snippet, AppError> {
        let write_txn = self.db.begin_write()?;
        let snippet = {
            let mut sequences = write_txn.open_table(SEQUENCES)?;
            let next_id = sequences
                .get(SNIPPET_ID_SEQUENCE)?
                .map(|guard| guard.value())
                .unwrap_or(0)
                + 1;
            sequences.insert(SNIPPET_ID_SEQUENCE, next_id)?;

            let snippet = Snippet::from_request(next_id, request);
            let encoded = bincode::serialize(&snippet)?;
            let mut snippets = write_txn.open_table(SNIPPETS)?;
            if snippets.get(snippet.id)?.is_some() {
                return Err(AppError::StorageMessage(format!(
                    "Snippet id {} already exists",
                    snippet.id
                )));
            }
            snippets.insert(snippet.id, encoded.as_slice())?;
            snippet
        };
        write_txn.commit()?;
        debug!("created snippet {}", snippet.id);
        Ok(snippet)
    }

    /// Fetch a snippet by id.
    ///
    /// # Returns
    /// `Ok(Some(snippet))` when found, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn get(&self, id: i64) -> Result<Option<Snippet>, AppError> {
        let read_txn = self.db.begin_read()?;
        let snippets = read_txn.open_table(SNIPPETS)?;
        match snippets.get(id)? {
            Some(value) => Ok(Some(deserialize_snippet(value.value())?)),
            None => Ok(None),
        }
    }

    /// List all snippets in ascending id order (creation order).
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn list(&self) -> Result<Vec<Snippet>, AppError> {
        let read_txn = self.db.begin_read()?;
        let snippets_table = read_txn.open_table(SNIPPETS)?;
        let mut snippets = Vec::new();
        for item in snippets_table.iter()? {
            let (_, value) = item?;
            snippets.push(deserialize_snippet(value.value())?);
        }
        Ok(snippets)
    }

    /// Update a snippet's editable fields and refresh `updated_at`.
    ///
    /// `created_at` and the favorite flag are preserved.
    ///
    /// # Returns
    /// `Ok(Some(snippet))` when updated, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or serialization fails.
    pub fn update(
        &self,
        id: i64,
        update: &UpdateSnippetRequest,
    ) -> Result<Option<Snippet>, AppError> {
        let write_txn = self.db.begin_write()?;
        let updated = {
            let mut snippets = write_txn.open_table(SNIPPETS)?;
            let Some(old_guard) = snippets.get(id)? else {
                return Ok(None);
            };
            let mut snippet = deserialize_snippet(old_guard.value())?;
            drop(old_guard);

            snippet.apply_update(update);
            let encoded = bincode::serialize(&snippet)?;
            snippets.insert(id, encoded.as_slice())?;
            snippet
        };
        write_txn.commit()?;
        Ok(Some(updated))
    }

    /// Delete a snippet by id.
    ///
    /// # Returns
    /// `true` when a row was removed, otherwise `false`.
    ///
    /// # Errors
    /// Returns an error when storage access fails.
    pub fn delete(&self, id: i64) -> Result<bool, AppError> {
        let write_txn = self.db.begin_write()?;
        let removed = {
            let mut snippets = write_txn.open_table(SNIPPETS)?;
            let removed = snippets.remove(id)?.is_some();
            removed
        };
        write_txn.commit()?;
        if removed {
            debug!("deleted snippet {}", id);
        }
        Ok(removed)
    }

    /// Search stored snippets with a case-insensitive substring match over
    /// title, code, and the raw tags string.
    ///
    /// # Returns
    /// Matching rows in ascending id order. An empty or whitespace-only
    /// query returns no rows; callers list instead.
    ///
    /// # Errors
    /// Returns an error when storage access or deserialization fails.
    pub fn search(&self, query: &str) -> Result<Vec<Snippet>, AppError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let query_lower = query.to_lowercase();

        let read_txn = self.db.begin_read()?;
        let snippets_table = read_txn.open_table(SNIPPETS)?;
        let mut results = Vec::new();
        for item in snippets_table.iter()? {
            let (_, value) = item?;
            let snippet = deserialize_snippet(value.value())?;
            if snippet.title.to_lowercase().contains(&query_lower)
                || snippet.code.to_lowercase().contains(&query_lower)
                || snippet.tags.to_lowercase().contains(&query_lower)
            {
                results.push(snippet);
            }
        }
        Ok(results)
    }

    /// Flip a snippet's favorite flag.
    ///
    /// Timestamps are left untouched; favoriting is not an edit.
    ///
    /// # Returns
    /// `Ok(Some(new_state))` when toggled, `Ok(None)` when missing.
    ///
    /// # Errors
    /// Returns an error when storage access or serialization fails.
    pub fn toggle_favorite(&self, id: i64) -> Result<Option<bool>, AppError> {
        let write_txn = self.db.begin_write()?;
        let new_state = {
            let mut snippets = write_txn.open_table(SNIPPETS)?;
            let Some(old_guard) = snippets.get(id)? else {
                return Ok(None);
            };
            let mut snippet = deserialize_snippet(old_guard.value())?;
            drop(old_guard);

            snippet.is_favorite = !snippet.is_favorite;
            let encoded = bincode::serialize(&snippet)?;
            snippets.insert(id, encoded.as_slice())?;
            snippet.is_favorite
        };
        write_txn.commit()?;
        Ok(Some(new_state))
    }
}
