//! Snippet data model and request payloads.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Language identifiers offered by the editor picker and the language filter.
pub const SUPPORTED_LANGUAGES: &[&str] = &[
    "javascript",
    "typescript",
    "python",
    "rust",
    "java",
    "cpp",
    "csharp",
    "go",
    "html",
    "css",
    "sql",
    "bash",
    "json",
    "yaml",
    "markdown",
];

/// Snippet row stored in the database and rendered by the GUI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Snippet {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub language: String,
    /// Raw comma-separated tag text, stored exactly as typed.
    pub tags: String,
    pub is_favorite: bool,
    /// RFC3339 timestamp, set once at creation.
    pub created_at: String,
    /// RFC3339 timestamp, refreshed on every update.
    pub updated_at: String,
}

/// Request payload for creating a snippet.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSnippetRequest {
    pub title: String,
    pub code: String,
    pub language: String,
    pub tags: String,
}

/// Request payload for updating a snippet.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSnippetRequest {
    pub title: String,
    pub code: String,
    pub language: String,
    pub tags: String,
}

impl Snippet {
    /// Build a fresh snippet from a create request.
    ///
    /// # Arguments
    /// - `id`: Identifier assigned by the store.
    /// - `request`: Create payload.
    ///
    /// # Returns
    /// A new [`Snippet`] with both timestamps set to now and the favorite
    /// flag cleared.
    pub fn from_request(id: i64, request: &CreateSnippetRequest) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id,
            title: request.title.clone(),
            code: request.code.clone(),
            language: request.language.clone(),
            tags: request.tags.clone(),
            is_favorite: false,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Apply an update payload in place.
    ///
    /// Overwrites the editable fields and refreshes `updated_at`; `id`,
    /// `created_at`, and `is_favorite` are left untouched.
    pub fn apply_update(&mut self, update: &UpdateSnippetRequest) {
        self.title = update.title.clone();
        self.code = update.code.clone();
        self.language = update.language.clone();
        self.tags = update.tags.clone();
        self.updated_at = Utc::now().to_rfc3339();
    }
}
