//! Native egui app shell for SnipVault.

mod state_ops;
mod style;
mod ui;

use crate::backend::{spawn_backend, BackendHandle, CoreCmd, CoreEvent};
use eframe::egui;
use snipvault_core::filter::FilterCriteria;
use snipvault_core::models::snippet::Snippet;
use snipvault_core::{Config, Database};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::info;

const AUTO_REFRESH_INTERVAL: Duration = Duration::from_secs(3);
const STATUS_TTL: Duration = Duration::from_secs(5);
const TOAST_TTL: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 4;
const SEARCH_DEBOUNCE: Duration = Duration::from_millis(150);
const DEFAULT_LANGUAGE: &str = "javascript";
/// Default initial window size for native GUI startup.
pub(crate) const DEFAULT_WINDOW_SIZE: [f32; 2] = [1100.0, 720.0];
/// Minimum enforced window size to keep browser/editor controls usable.
pub(crate) const MIN_WINDOW_SIZE: [f32; 2] = [900.0, 600.0];

/// Native egui application shell.
///
/// Owns the UI state and communicates with the background worker via channels
/// so the `update` loop never blocks on database I/O.
pub(crate) struct SnipVaultApp {
    backend: BackendHandle,
    all_snippets: Vec<Snippet>,
    visible: Vec<Snippet>,
    tag_vocabulary: Vec<String>,
    criteria: FilterCriteria,
    selected_id: Option<i64>,
    editor: Option<EditorForm>,
    pending_delete: Option<i64>,
    search_last_sent: String,
    search_last_input_at: Option<Instant>,
    clipboard_outgoing: Option<String>,
    status: Option<StatusMessage>,
    toasts: VecDeque<ToastMessage>,
    db_path: String,
    style_applied: bool,
    last_refresh_at: Instant,
}

/// In-progress create/edit form state; `id` is `None` while creating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct EditorForm {
    id: Option<i64>,
    title: String,
    code: String,
    language: String,
    tags: String,
}

struct StatusMessage {
    text: String,
    expires_at: Instant,
}

struct ToastMessage {
    text: String,
    expires_at: Instant,
}

impl SnipVaultApp {
    /// Construct a new app instance from the current environment config.
    ///
    /// Opens the embedded database, spawns the backend worker thread, and
    /// kicks off the initial list request so the UI has data on first paint.
    ///
    /// # Errors
    /// Returns an error if the database path is invalid or the underlying
    /// store cannot be opened.
    pub(crate) fn new() -> Result<Self, snipvault_core::AppError> {
        let config = Config::from_env();
        let db_path = config.db_path.clone();
        let db = Database::new(&config.db_path)?;
        info!("opened snippet database at {}", config.db_path);

        let backend = spawn_backend(db);
        let mut app = Self {
            backend,
            all_snippets: Vec::new(),
            visible: Vec::new(),
            tag_vocabulary: Vec::new(),
            criteria: FilterCriteria::default(),
            selected_id: None,
            editor: None,
            pending_delete: None,
            search_last_sent: String::new(),
            search_last_input_at: None,
            clipboard_outgoing: None,
            status: None,
            toasts: VecDeque::with_capacity(TOAST_LIMIT),
            db_path,
            style_applied: false,
            last_refresh_at: Instant::now(),
        };
        app.request_refresh();
        Ok(app)
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (new_requested, save_requested, escape_pressed) = ctx.input(|i| {
            (
                i.modifiers.command && i.key_pressed(egui::Key::N),
                i.modifiers.command && i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::Escape),
            )
        });
        if new_requested {
            self.begin_create();
        }
        if save_requested {
            self.submit_editor();
        }
        if escape_pressed {
            // Escape closes the delete confirmation first, then the form.
            if self.pending_delete.take().is_none() {
                self.cancel_editor();
            }
        }
    }
}

impl eframe::App for SnipVaultApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_style(ctx);
        self.expire_transients();

        while let Ok(event) = self.backend.evt_rx.try_recv() {
            self.apply_event(event);
        }

        self.handle_shortcuts(ctx);
        self.maybe_dispatch_search();
        self.maybe_auto_refresh();

        if let Some(text) = self.clipboard_outgoing.take() {
            ctx.copy_text(text);
        }

        self.render_top_bar(ctx);
        self.render_browser_panel(ctx);
        self.render_central_panel(ctx);
        self.render_status_bar(ctx);
        self.render_delete_confirm(ctx);
        self.render_toasts(ctx);

        ctx.request_repaint_after(Duration::from_millis(250));
    }
}

#[cfg(test)]
mod tests;
