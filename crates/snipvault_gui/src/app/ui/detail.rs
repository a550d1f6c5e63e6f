//! Central panel: snippet detail view and the create/edit form.

use crate::app::style::{COLOR_FAVORITE, COLOR_TEXT_MUTED, COLOR_TEXT_SECONDARY};
use crate::app::SnipVaultApp;
use eframe::egui::{self, ComboBox, RichText, ScrollArea, TextEdit};
use egui_extras::syntax_highlighting::{code_view_ui, CodeTheme};
use snipvault_core::models::snippet::{Snippet, SUPPORTED_LANGUAGES};

/// Map a stored language name onto a syntect extension hint.
pub(crate) fn syntax_hint(language: &str) -> &'static str {
    match language {
        "javascript" => "js",
        "typescript" => "ts",
        "python" => "py",
        "rust" => "rs",
        "java" => "java",
        "cpp" => "cpp",
        "csharp" => "cs",
        "go" => "go",
        "html" => "html",
        "css" => "css",
        "sql" => "sql",
        "bash" => "sh",
        "json" => "json",
        "yaml" => "yaml",
        "markdown" => "md",
        _ => "txt",
    }
}

impl SnipVaultApp {
    pub(in crate::app) fn render_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.editor.is_some() {
                self.render_editor_form(ui);
            } else if let Some(snippet) = self.selected_snippet().cloned() {
                self.render_snippet_view(ui, &snippet);
            } else {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("Select a snippet or press Ctrl+N to create one.")
                            .color(COLOR_TEXT_MUTED),
                    );
                });
            }
        });
    }

    fn render_snippet_view(&mut self, ui: &mut egui::Ui, snippet: &Snippet) {
        ui.horizontal(|ui| {
            ui.heading(&snippet.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Delete").clicked() {
                    self.request_delete(snippet.id);
                }
                if ui.button("Edit").clicked() {
                    self.begin_edit(snippet);
                }
                if ui.button("Copy").clicked() {
                    self.copy_snippet_code(snippet.code.clone());
                }
                let star = if snippet.is_favorite {
                    RichText::new("\u{2605}").color(COLOR_FAVORITE)
                } else {
                    RichText::new("\u{2606}").color(COLOR_TEXT_MUTED)
                };
                if ui.button(star).clicked() {
                    self.toggle_favorite(snippet.id);
                }
            });
        });

        ui.horizontal(|ui| {
            ui.label(RichText::new(&snippet.language).color(COLOR_TEXT_SECONDARY));
            if !snippet.tags.trim().is_empty() {
                ui.label(
                    RichText::new(format!("tags: {}", snippet.tags))
                        .color(COLOR_TEXT_SECONDARY),
                );
            }
            ui.label(
                RichText::new(format!("updated {}", snippet.updated_at))
                    .small()
                    .color(COLOR_TEXT_MUTED),
            );
        });

        ui.separator();

        let theme = CodeTheme::from_memory(ui.ctx(), ui.style());
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                code_view_ui(ui, &theme, &snippet.code, syntax_hint(&snippet.language));
            });
    }

    fn render_editor_form(&mut self, ui: &mut egui::Ui) {
        let Some(mut form) = self.editor.clone() else {
            return;
        };
        let mut save = false;
        let mut cancel = false;

        ui.heading(if form.id.is_some() {
            "Edit snippet"
        } else {
            "New snippet"
        });

        ui.add(
            TextEdit::singleline(&mut form.title)
                .hint_text("Title")
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            ComboBox::from_id_salt("editor_language")
                .selected_text(form.language.clone())
                .show_ui(ui, |ui| {
                    for language in SUPPORTED_LANGUAGES {
                        ui.selectable_value(&mut form.language, language.to_string(), *language);
                    }
                });
            ui.add(
                TextEdit::singleline(&mut form.tags)
                    .hint_text("Tags (comma separated)")
                    .desired_width(f32::INFINITY),
            );
        });

        ScrollArea::vertical()
            .max_height(ui.available_height() - 48.0)
            .show(ui, |ui| {
                ui.add(
                    TextEdit::multiline(&mut form.code)
                        .code_editor()
                        .hint_text("Paste or type code here")
                        .desired_rows(16)
                        .desired_width(f32::INFINITY),
                );
            });

        ui.horizontal(|ui| {
            if ui.button("Save").clicked() {
                save = true;
            }
            if ui.button("Cancel").clicked() {
                cancel = true;
            }
            ui.label(
                RichText::new("Ctrl+S saves, Esc cancels")
                    .small()
                    .color(COLOR_TEXT_MUTED),
            );
        });

        if cancel {
            self.cancel_editor();
            return;
        }
        self.editor = Some(form);
        if save {
            self.submit_editor();
        }
    }
}
