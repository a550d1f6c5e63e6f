//! Left-hand browser panel: filter controls and the snippet list.

use crate::app::style::{COLOR_FAVORITE, COLOR_TEXT_MUTED};
use crate::app::SnipVaultApp;
use eframe::egui::{self, ComboBox, RichText, ScrollArea, TextEdit};
use snipvault_core::models::snippet::SUPPORTED_LANGUAGES;

const BROWSER_WIDTH: f32 = 300.0;
const ROW_HEIGHT: f32 = 30.0;

impl SnipVaultApp {
    pub(in crate::app) fn render_browser_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("browser")
            .default_width(BROWSER_WIDTH)
            .show(ctx, |ui| {
                self.render_filter_controls(ui);
                ui.separator();
                self.render_snippet_list(ui);
            });
    }

    fn render_filter_controls(&mut self, ui: &mut egui::Ui) {
        let mut query = self.criteria.search_query.clone();
        let search = ui.add(
            TextEdit::singleline(&mut query)
                .hint_text("Search snippets...")
                .desired_width(f32::INFINITY),
        );
        if search.changed() {
            self.set_search_query(query);
        }

        let mut language_changed = false;
        ComboBox::from_id_salt("language_filter")
            .width(ui.available_width())
            .selected_text(if self.criteria.language_filter.is_empty() {
                "All languages".to_string()
            } else {
                self.criteria.language_filter.clone()
            })
            .show_ui(ui, |ui| {
                language_changed |= ui
                    .selectable_value(
                        &mut self.criteria.language_filter,
                        String::new(),
                        "All languages",
                    )
                    .changed();
                for language in SUPPORTED_LANGUAGES {
                    language_changed |= ui
                        .selectable_value(
                            &mut self.criteria.language_filter,
                            language.to_string(),
                            *language,
                        )
                        .changed();
                }
            });
        if language_changed {
            self.refresh_derived_state();
        }

        let tag_edit = ui.add(
            TextEdit::singleline(&mut self.criteria.tag_filter)
                .hint_text("Tags (comma separated)")
                .desired_width(f32::INFINITY),
        );
        if tag_edit.changed() {
            self.refresh_derived_state();
        }

        if !self.tag_vocabulary.is_empty() {
            let mut clicked_tag = None;
            ui.horizontal_wrapped(|ui| {
                for tag in &self.tag_vocabulary {
                    if ui.small_button(tag).clicked() {
                        clicked_tag = Some(tag.clone());
                    }
                }
            });
            if let Some(tag) = clicked_tag {
                self.append_tag_filter(&tag);
            }
        }

        if ui
            .checkbox(&mut self.criteria.show_favorites_only, "Favorites only")
            .changed()
        {
            self.refresh_derived_state();
        }
    }

    fn render_snippet_list(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(format!("Snippets ({})", self.visible.len()));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("+ New").clicked() {
                    self.begin_create();
                }
            });
        });

        if self.visible.is_empty() {
            ui.label(RichText::new("No snippets match.").color(COLOR_TEXT_MUTED));
            return;
        }

        let mut pending_select = None;
        let mut pending_favorite = None;
        ScrollArea::vertical().auto_shrink([false, false]).show_rows(
            ui,
            ROW_HEIGHT,
            self.visible.len(),
            |ui, row_range| {
                for snippet in &self.visible[row_range] {
                    ui.horizontal(|ui| {
                        let star = if snippet.is_favorite {
                            RichText::new("\u{2605}").color(COLOR_FAVORITE)
                        } else {
                            RichText::new("\u{2606}").color(COLOR_TEXT_MUTED)
                        };
                        if ui.small_button(star).clicked() {
                            pending_favorite = Some(snippet.id);
                        }
                        let selected = self.selected_id == Some(snippet.id);
                        let label =
                            format!("{}  ({})", snippet.title, snippet.language);
                        if ui.selectable_label(selected, label).clicked() {
                            pending_select = Some(snippet.id);
                        }
                    });
                }
            },
        );
        if let Some(id) = pending_favorite {
            self.toggle_favorite(id);
        }
        if let Some(id) = pending_select {
            self.select_snippet(id);
        }
    }
}
