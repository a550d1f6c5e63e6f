//! Top bar and bottom status bar.

use crate::app::style::{COLOR_ACCENT, COLOR_TEXT_SECONDARY};
use crate::app::SnipVaultApp;
use eframe::egui::{self, RichText};

impl SnipVaultApp {
    pub(in crate::app) fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new("SnipVault").color(COLOR_ACCENT));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(&self.db_path)
                            .monospace()
                            .color(COLOR_TEXT_SECONDARY),
                    );
                });
            });
        });
    }

    pub(in crate::app) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let Some(status) = &self.status else {
            return;
        };
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(RichText::new(&status.text).color(COLOR_TEXT_SECONDARY));
        });
    }
}
