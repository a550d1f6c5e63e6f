//! Delete confirmation modal.

use crate::app::SnipVaultApp;
use eframe::egui::{self, Align2};

impl SnipVaultApp {
    pub(in crate::app) fn render_delete_confirm(&mut self, ctx: &egui::Context) {
        let Some(id) = self.pending_delete else {
            return;
        };
        let title = self
            .all_snippets
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.title.clone())
            .unwrap_or_else(|| format!("snippet {id}"));

        let mut confirmed = false;
        let mut cancelled = false;
        egui::Window::new("Delete snippet?")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!("\"{title}\" will be permanently deleted."));
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if confirmed {
            self.confirm_delete();
        } else if cancelled {
            self.pending_delete = None;
        }
    }
}
