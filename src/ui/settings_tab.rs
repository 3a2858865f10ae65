//! Settings tab UI rendering

use eframe::egui::{self, RichText, Vec2};

use crate::app::DevNotesApp;
use crate::app_data::app_data;
use crate::state::TipSource;
use crate::ui::components::section_frame;
use crate::ui::theme::ThemePreset;

/// Render the settings tab
pub fn render_settings_tab(app: &mut DevNotesApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    egui::ScrollArea::vertical()
        .id_salt("settings_scroll")
        .show(ui, |ui| {
            ui.label(
                RichText::new("Settings")
                    .color(theme.text_primary)
                    .size(20.0)
                    .strong(),
            );
            ui.add_space(16.0);

            section_frame(ui, &theme, "Appearance", |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Theme:").color(theme.text_muted));

                    egui::ComboBox::from_id_salt("theme_select")
                        .selected_text(app.config.ui.theme.name())
                        .show_ui(ui, |ui| {
                            for preset in ThemePreset::all() {
                                if ui
                                    .selectable_label(app.config.ui.theme == *preset, preset.name())
                                    .clicked()
                                {
                                    app.config.ui.theme = *preset;
                                    app.ui.current_theme = preset.theme();
                                    app.ui.theme_dirty = true;
                                    app.save_config();
                                }
                            }
                        });
                });

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Preview:").color(theme.text_muted));
                    ui.add_space(8.0);

                    let swatch_size = Vec2::new(24.0, 24.0);
                    for (name, color) in [
                        ("Background", theme.bg_dark),
                        ("Accent", theme.accent),
                        ("Success", theme.success),
                        ("Error", theme.error),
                    ] {
                        let (rect, response) =
                            ui.allocate_exact_size(swatch_size, egui::Sense::hover());
                        ui.painter().rect_filled(rect, 4.0, color);
                        response.on_hover_text(name);
                    }
                });
            });

            ui.add_space(12.0);

            section_frame(ui, &theme, "Joke API", |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Endpoint:").color(theme.text_muted));
                    ui.add(
                        egui::TextEdit::singleline(&mut app.ui.endpoint_input)
                            .desired_width(360.0),
                    );
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    let changed = app.ui.endpoint_input.trim() != app.config.joke.endpoint;
                    if ui.add_enabled(changed, egui::Button::new("Apply")).clicked() {
                        let input = app.ui.endpoint_input.clone();
                        app.apply_endpoint(&input);
                    }
                    if ui.button("Reset to default").clicked() {
                        app.apply_endpoint("");
                    }
                });

                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Default: {}", app_data().joke.endpoint))
                        .color(theme.text_muted)
                        .size(11.0),
                );
            });

            ui.add_space(12.0);

            section_frame(ui, &theme, "Tips", |ui| {
                let source = match app.tips.source() {
                    TipSource::Embedded => "Built-in tips".to_string(),
                    TipSource::File(path) => path.display().to_string(),
                };

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Source:").color(theme.text_muted));
                    ui.label(RichText::new(source).color(theme.text_primary));
                });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Load file...").clicked() {
                        app.browse_for_tips_file();
                    }
                    let custom = app.tips.source() != &TipSource::Embedded;
                    if ui
                        .add_enabled(custom, egui::Button::new("Use built-in tips"))
                        .clicked()
                    {
                        app.use_tips_file(None);
                    }
                });
            });
        });
}
