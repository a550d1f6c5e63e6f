//! Background worker thread for database access.

use crate::backend::{CoreCmd, CoreEvent};
use crossbeam_channel::{unbounded, Receiver, Sender};
use snipvault_core::models::snippet::{CreateSnippetRequest, UpdateSnippetRequest};
use snipvault_core::Database;
use std::thread;
use tracing::error;

/// Handle for sending commands to, and receiving events from, the backend worker.
pub struct BackendHandle {
    pub cmd_tx: Sender<CoreCmd>,
    pub evt_rx: Receiver<CoreEvent>,
}

fn send_error(evt_tx: &Sender<CoreEvent>, message: String) {
    let _ = evt_tx.send(CoreEvent::Error { message });
}

/// Spawn the backend worker thread that performs blocking database access.
///
/// All I/O stays off the UI thread; the worker replies with [`CoreEvent`]
/// values that are polled each frame.
///
/// # Returns
/// A [`BackendHandle`] containing the command sender and event receiver.
///
/// # Panics
/// Panics if the worker thread cannot be spawned.
pub fn spawn_backend(db: Database) -> BackendHandle {
    let (cmd_tx, cmd_rx) = unbounded();
    let (evt_tx, evt_rx) = unbounded();

    thread::Builder::new()
        .name("snipvault-backend".to_string())
        .spawn(move || {
            for cmd in cmd_rx.iter() {
                match cmd {
                    CoreCmd::GetSnippets => match db.snippets.list() {
                        Ok(items) => {
                            let _ = evt_tx.send(CoreEvent::SnippetList { items });
                        }
                        Err(err) => {
                            error!("backend list failed: {}", err);
                            send_error(&evt_tx, format!("List failed: {}", err));
                        }
                    },
                    CoreCmd::SearchSnippets { query } => match db.snippets.search(&query) {
                        Ok(items) => {
                            let _ = evt_tx.send(CoreEvent::SearchResults { query, items });
                        }
                        Err(err) => {
                            error!("backend search failed: {}", err);
                            send_error(&evt_tx, format!("Search failed: {}", err));
                        }
                    },
                    CoreCmd::CreateSnippet {
                        title,
                        code,
                        language,
                        tags,
                    } => {
                        let request = CreateSnippetRequest {
                            title,
                            code,
                            language,
                            tags,
                        };
                        match db.snippets.create(&request) {
                            Ok(snippet) => {
                                let _ = evt_tx.send(CoreEvent::SnippetCreated { snippet });
                            }
                            Err(err) => {
                                error!("backend create failed: {}", err);
                                send_error(&evt_tx, format!("Create failed: {}", err));
                            }
                        }
                    }
                    CoreCmd::UpdateSnippet {
                        id,
                        title,
                        code,
                        language,
                        tags,
                    } => {
                        let request = UpdateSnippetRequest {
                            title,
                            code,
                            language,
                            tags,
                        };
                        match db.snippets.update(id, &request) {
                            Ok(Some(snippet)) => {
                                let _ = evt_tx.send(CoreEvent::SnippetUpdated { snippet });
                            }
                            Ok(None) => {
                                let _ = evt_tx.send(CoreEvent::SnippetMissing { id });
                            }
                            Err(err) => {
                                error!("backend update failed: {}", err);
                                send_error(&evt_tx, format!("Update failed: {}", err));
                            }
                        }
                    }
                    CoreCmd::DeleteSnippet { id } => match db.snippets.delete(id) {
                        Ok(true) => {
                            let _ = evt_tx.send(CoreEvent::SnippetDeleted { id });
                        }
                        Ok(false) => {
                            let _ = evt_tx.send(CoreEvent::SnippetMissing { id });
                        }
                        Err(err) => {
                            error!("backend delete failed: {}", err);
                            send_error(&evt_tx, format!("Delete failed: {}", err));
                        }
                    },
                    CoreCmd::ToggleFavorite { id } => match db.snippets.toggle_favorite(id) {
                        Ok(Some(is_favorite)) => {
                            let _ = evt_tx.send(CoreEvent::FavoriteToggled { id, is_favorite });
                        }
                        Ok(None) => {
                            let _ = evt_tx.send(CoreEvent::SnippetMissing { id });
                        }
                        Err(err) => {
                            error!("backend favorite toggle failed: {}", err);
                            send_error(&evt_tx, format!("Favorite toggle failed: {}", err));
                        }
                    },
                }
            }
        })
        .expect("spawn backend thread");

    BackendHandle { cmd_tx, evt_rx }
}
