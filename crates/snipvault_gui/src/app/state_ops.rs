//! Event application and state mutation helpers for the app shell.

use super::*;
use snipvault_core::filter::{collect_tag_vocabulary, filter, parse_tag_tokens};

impl SnipVaultApp {
    pub(super) fn apply_event(&mut self, event: CoreEvent) {
        match event {
            CoreEvent::SnippetList { items } => {
                self.all_snippets = items;
                self.refresh_derived_state();
            }
            CoreEvent::SearchResults { query, items } => {
                // Drop stale responses for queries the user has already left.
                if query.trim() != self.criteria.search_query.trim() {
                    return;
                }
                self.all_snippets = items;
                self.refresh_derived_state();
            }
            CoreEvent::SnippetCreated { snippet } => {
                self.set_status(format!("Created \"{}\".", snippet.title));
                self.push_toast("Snippet created");
                self.selected_id = Some(snippet.id);
                self.editor = None;
                self.request_refresh();
            }
            CoreEvent::SnippetUpdated { snippet } => {
                self.set_status(format!("Saved \"{}\".", snippet.title));
                self.push_toast("Snippet saved");
                self.editor = None;
                self.request_refresh();
            }
            CoreEvent::SnippetDeleted { id } => {
                if self.selected_id == Some(id) {
                    self.selected_id = None;
                }
                self.push_toast("Snippet deleted");
                self.request_refresh();
            }
            CoreEvent::SnippetMissing { id } => {
                if self.selected_id == Some(id) {
                    self.selected_id = None;
                }
                if self.editor.as_ref().and_then(|form| form.id) == Some(id) {
                    self.editor = None;
                }
                self.set_status("Snippet no longer exists.".to_string());
                self.request_refresh();
            }
            CoreEvent::FavoriteToggled { id, is_favorite } => {
                if let Some(snippet) = self.all_snippets.iter_mut().find(|s| s.id == id) {
                    snippet.is_favorite = is_favorite;
                }
                self.push_toast(if is_favorite {
                    "Added to favorites"
                } else {
                    "Removed from favorites"
                });
                self.refresh_derived_state();
            }
            CoreEvent::Error { message } => {
                self.set_status(message);
            }
        }
    }

    /// Recompute the visible subset and tag vocabulary from the loaded list.
    pub(super) fn refresh_derived_state(&mut self) {
        self.visible = filter(&self.all_snippets, &self.criteria)
            .into_iter()
            .cloned()
            .collect();
        self.tag_vocabulary = collect_tag_vocabulary(&self.all_snippets)
            .into_iter()
            .collect();
        if let Some(id) = self.selected_id {
            if !self.all_snippets.iter().any(|s| s.id == id) {
                self.selected_id = None;
            }
        }
    }

    pub(super) fn request_refresh(&mut self) {
        if self.backend.cmd_tx.send(CoreCmd::GetSnippets).is_err() {
            self.set_status("Refresh failed: backend unavailable.".to_string());
        }
        self.last_refresh_at = Instant::now();
    }

    pub(super) fn maybe_auto_refresh(&mut self) {
        if self.last_refresh_at.elapsed() < AUTO_REFRESH_INTERVAL {
            return;
        }
        let query = self.criteria.search_query.trim();
        if query.is_empty() {
            self.request_refresh();
        } else {
            // Keep search results fresh instead of clobbering them with a
            // full list reload.
            let query = query.to_string();
            self.send_search(query);
            self.last_refresh_at = Instant::now();
        }
    }

    pub(super) fn set_search_query(&mut self, query: String) {
        if query == self.criteria.search_query {
            return;
        }
        self.criteria.search_query = query;
        self.search_last_input_at = Some(Instant::now());
        self.refresh_derived_state();
    }

    pub(super) fn maybe_dispatch_search(&mut self) {
        let Some(last_input) = self.search_last_input_at else {
            return;
        };
        if last_input.elapsed() < SEARCH_DEBOUNCE {
            return;
        }
        self.search_last_input_at = None;
        let query = self.criteria.search_query.trim().to_string();
        if query == self.search_last_sent {
            return;
        }
        self.search_last_sent = query.clone();
        if query.is_empty() {
            self.request_refresh();
        } else {
            self.send_search(query);
        }
    }

    fn send_search(&mut self, query: String) {
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::SearchSnippets { query })
            .is_err()
        {
            self.set_status("Search failed: backend unavailable.".to_string());
        }
    }

    /// Append a vocabulary tag to the tag filter unless already required.
    pub(super) fn append_tag_filter(&mut self, tag: &str) {
        if parse_tag_tokens(&self.criteria.tag_filter).contains(tag) {
            return;
        }
        if self.criteria.tag_filter.trim().is_empty() {
            self.criteria.tag_filter = tag.to_string();
        } else {
            self.criteria.tag_filter = format!("{}, {}", self.criteria.tag_filter.trim(), tag);
        }
        self.refresh_derived_state();
    }

    pub(super) fn begin_create(&mut self) {
        self.editor = Some(EditorForm {
            language: DEFAULT_LANGUAGE.to_string(),
            ..EditorForm::default()
        });
    }

    pub(super) fn begin_edit(&mut self, snippet: &Snippet) {
        self.editor = Some(EditorForm {
            id: Some(snippet.id),
            title: snippet.title.clone(),
            code: snippet.code.clone(),
            language: snippet.language.clone(),
            tags: snippet.tags.clone(),
        });
    }

    pub(super) fn cancel_editor(&mut self) {
        self.editor = None;
    }

    pub(super) fn submit_editor(&mut self) {
        let Some(form) = self.editor.clone() else {
            return;
        };
        if form.title.trim().is_empty() || form.code.trim().is_empty() {
            self.set_status("Title and code are required.".to_string());
            return;
        }
        let cmd = match form.id {
            Some(id) => CoreCmd::UpdateSnippet {
                id,
                title: form.title,
                code: form.code,
                language: form.language,
                tags: form.tags,
            },
            None => CoreCmd::CreateSnippet {
                title: form.title,
                code: form.code,
                language: form.language,
                tags: form.tags,
            },
        };
        if self.backend.cmd_tx.send(cmd).is_err() {
            self.set_status("Save failed: backend unavailable.".to_string());
        }
    }

    pub(super) fn request_delete(&mut self, id: i64) {
        self.pending_delete = Some(id);
    }

    pub(super) fn confirm_delete(&mut self) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::DeleteSnippet { id })
            .is_err()
        {
            self.set_status("Delete failed: backend unavailable.".to_string());
        }
    }

    pub(super) fn toggle_favorite(&mut self, id: i64) {
        if self
            .backend
            .cmd_tx
            .send(CoreCmd::ToggleFavorite { id })
            .is_err()
        {
            self.set_status("Favorite toggle failed: backend unavailable.".to_string());
        }
    }

    pub(super) fn copy_snippet_code(&mut self, code: String) {
        self.clipboard_outgoing = Some(code);
        self.push_toast("Copied to clipboard");
    }

    pub(super) fn select_snippet(&mut self, id: i64) {
        self.selected_id = Some(id);
    }

    pub(super) fn selected_snippet(&self) -> Option<&Snippet> {
        self.selected_id
            .and_then(|id| self.all_snippets.iter().find(|s| s.id == id))
    }

    pub(super) fn set_status(&mut self, text: String) {
        self.status = Some(StatusMessage {
            text,
            expires_at: Instant::now() + STATUS_TTL,
        });
    }

    pub(super) fn push_toast(&mut self, text: &str) {
        if let Some(last) = self.toasts.back_mut() {
            if last.text == text {
                last.expires_at = Instant::now() + TOAST_TTL;
                return;
            }
        }
        if self.toasts.len() == TOAST_LIMIT {
            self.toasts.pop_front();
        }
        self.toasts.push_back(ToastMessage {
            text: text.to_string(),
            expires_at: Instant::now() + TOAST_TTL,
        });
    }

    pub(super) fn expire_transients(&mut self) {
        let now = Instant::now();
        if self.status.as_ref().is_some_and(|s| s.expires_at <= now) {
            self.status = None;
        }
        self.toasts.retain(|toast| toast.expires_at > now);
    }
}
