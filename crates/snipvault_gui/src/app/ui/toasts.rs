//! Transient toast notifications, stacked in the top-right corner.

use crate::app::style::{COLOR_BG_SECONDARY, COLOR_BORDER};
use crate::app::SnipVaultApp;
use eframe::egui::{self, Align2, Frame, Order, RichText, Stroke};

impl SnipVaultApp {
    pub(in crate::app) fn render_toasts(&mut self, ctx: &egui::Context) {
        if self.toasts.is_empty() {
            return;
        }
        egui::Area::new(egui::Id::new("toasts"))
            .order(Order::Foreground)
            .anchor(Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
            .interactable(false)
            .show(ctx, |ui| {
                // Newest toast on top.
                for toast in self.toasts.iter().rev() {
                    Frame::popup(ui.style())
                        .fill(COLOR_BG_SECONDARY)
                        .stroke(Stroke::new(1.0, COLOR_BORDER))
                        .show(ui, |ui| {
                            ui.label(RichText::new(&toast.text).small());
                        });
                }
            });
    }
}
