//! Protocol types for the GUI backend worker.

use snipvault_core::models::snippet::Snippet;

/// Commands issued by the UI thread for the backend worker to execute.
#[derive(Debug)]
pub enum CoreCmd {
    /// Fetch the full snippet list in creation order.
    GetSnippets,
    /// Persist a new snippet.
    CreateSnippet {
        title: String,
        code: String,
        language: String,
        tags: String,
    },
    /// Persist edits to an existing snippet.
    UpdateSnippet {
        id: i64,
        title: String,
        code: String,
        language: String,
        tags: String,
    },
    /// Delete a snippet by id.
    DeleteSnippet { id: i64 },
    /// Run a text search over the stored snippets.
    SearchSnippets { query: String },
    /// Flip a snippet's favorite flag.
    ToggleFavorite { id: i64 },
}

/// Events produced by the backend worker and polled by the UI thread.
#[derive(Debug)]
pub enum CoreEvent {
    /// Response containing the current snippet list snapshot.
    SnippetList { items: Vec<Snippet> },
    /// Response containing search results for the echoed query.
    SearchResults { query: String, items: Vec<Snippet> },
    /// Response containing a newly created snippet.
    SnippetCreated { snippet: Snippet },
    /// Response confirming a snippet was updated.
    SnippetUpdated { snippet: Snippet },
    /// Response confirming a snippet was deleted.
    SnippetDeleted { id: i64 },
    /// The requested snippet id no longer exists in the database.
    SnippetMissing { id: i64 },
    /// Response confirming a favorite toggle, with the new state.
    FavoriteToggled { id: i64, is_favorite: bool },
    /// A backend failure occurred (database error, etc).
    Error { message: String },
}
