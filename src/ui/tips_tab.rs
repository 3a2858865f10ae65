//! Tips tab UI rendering

use eframe::egui::{self, RichText};
use egui_commonmark::CommonMarkViewer;

use crate::app::DevNotesApp;
use crate::state::TipSource;
use crate::tips::{strip_markup, TipSection};

/// Render the tips tab
pub fn render_tips_tab(app: &mut DevNotesApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    ui.horizontal(|ui| {
        ui.label(RichText::new("Tips").color(theme.text_primary).size(20.0).strong());
        if let TipSource::File(path) = app.tips.source() {
            ui.label(
                RichText::new(path.display().to_string())
                    .color(theme.text_muted)
                    .size(11.0),
            );
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Collapse all").clicked() {
                app.tips.expansion.collapse_all();
            }
            if ui.button("Expand all").clicked() {
                app.tips.expansion.expand_all();
            }
        });
    });
    ui.add_space(12.0);

    let mut toggled = None;

    egui::ScrollArea::vertical()
        .id_salt("tips_scroll")
        .show(ui, |ui| {
            for (index, tip) in app.tips.tips().iter().enumerate() {
                let expanded = app.tips.is_expanded(index);

                egui::Frame::new()
                    .fill(theme.bg_medium)
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::same(12))
                    .stroke(egui::Stroke::new(1.0, theme.border))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());

                        let indicator = if expanded { "▼" } else { "▶" };
                        let header = egui::Button::new(
                            RichText::new(format!("{}  {}", indicator, tip.title))
                                .color(if expanded { theme.accent } else { theme.text_primary })
                                .strong(),
                        )
                        .frame(false);
                        if ui.add(header).clicked() {
                            toggled = Some(index);
                        }

                        if !expanded {
                            return;
                        }

                        ui.add_space(8.0);
                        for section in tip.sections() {
                            match section {
                                TipSection::Description(text) => {
                                    CommonMarkViewer::new().show(
                                        ui,
                                        &mut app.ui.markdown_cache,
                                        text,
                                    );
                                }
                                TipSection::ResultPreview(html) => {
                                    ui.add_space(8.0);
                                    ui.label(
                                        RichText::new("Result").color(theme.text_muted).size(11.0),
                                    );
                                    egui::Frame::new()
                                        .fill(theme.bg_light)
                                        .corner_radius(egui::CornerRadius::same(4))
                                        .inner_margin(egui::Margin::same(8))
                                        .show(ui, |ui| {
                                            ui.set_width(ui.available_width());
                                            ui.label(
                                                RichText::new(strip_markup(html))
                                                    .color(theme.text_primary),
                                            )
                                            .on_hover_text(html);
                                        });
                                }
                                TipSection::Code(code) => {
                                    ui.add_space(8.0);
                                    ui.label(
                                        RichText::new("Code").color(theme.text_muted).size(11.0),
                                    );
                                    let mut code = code;
                                    ui.add(
                                        egui::TextEdit::multiline(&mut code)
                                            .code_editor()
                                            .desired_rows(1)
                                            .desired_width(f32::INFINITY),
                                    );
                                }
                            }
                        }
                    });

                ui.add_space(6.0);
            }
        });

    if let Some(index) = toggled {
        app.tips.toggle(index);
    }
}
