//! Unit tests for the app shell state machine.
//!
//! The harness wires the app to in-memory channels instead of a real worker
//! thread, so tests can assert on outgoing commands and feed events directly.

use super::*;
use crate::backend::BackendHandle;
use crossbeam_channel::{unbounded, Receiver};
use snipvault_core::models::snippet::Snippet;
use std::time::Duration;

mod filters_and_search;

struct TestHarness {
    app: SnipVaultApp,
    cmd_rx: Receiver<CoreCmd>,
}

fn make_app() -> TestHarness {
    let (cmd_tx, cmd_rx) = unbounded();
    let (_evt_tx, evt_rx) = unbounded();
    let app = SnipVaultApp {
        backend: BackendHandle { cmd_tx, evt_rx },
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
        db_path: "/tmp/snipvault-test".to_string(),
        style_applied: false,
        last_refresh_at: Instant::now(),
    };
    TestHarness { app, cmd_rx }
}

fn test_snippet(id: i64, title: &str, language: &str, tags: &str, is_favorite: bool) -> Snippet {
    Snippet {
        id,
        title: title.to_string(),
        code: format!("// {}", title),
        language: language.to_string(),
        tags: tags.to_string(),
        is_favorite,
        created_at: "2024-03-01T10:00:00+00:00".to_string(),
        updated_at: "2024-03-01T10:00:00+00:00".to_string(),
    }
}

fn recv_cmd(rx: &Receiver<CoreCmd>) -> CoreCmd {
    rx.recv_timeout(Duration::from_millis(200))
        .expect("expected outgoing command")
}
