//! Shared UI components

use eframe::egui::{self, Color32, CornerRadius, RichText, Vec2};

use crate::app::DevNotesApp;
use crate::app_data::app_data;
use crate::state::Tab;
use crate::ui::theme::Theme;

/// Render a tab button
pub fn render_tab(app: &mut DevNotesApp, ui: &mut egui::Ui, tab: Tab, label: &str) {
    let theme = &app.ui.current_theme;
    let is_active = app.ui.active_tab == tab;

    let (bg, text_color) = if is_active {
        (theme.bg_medium, theme.accent)
    } else {
        (Color32::TRANSPARENT, theme.text_secondary)
    };

    let button = egui::Button::new(RichText::new(label).color(text_color))
        .fill(bg)
        .corner_radius(CornerRadius {
            nw: 6,
            ne: 6,
            sw: 0,
            se: 0,
        })
        .min_size(Vec2::new(80.0, 32.0));

    if ui.add(button).clicked() {
        app.ui.active_tab = tab;
    }
}

/// Render a titled, bordered section
pub fn section_frame(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::new()
        .fill(theme.bg_medium)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(16))
        .stroke(egui::Stroke::new(1.0, theme.border))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(title).color(theme.accent).size(13.0).strong());
            ui.add_space(12.0);
            add_contents(ui);
        });
}

/// Render the About dialog
pub fn render_about_dialog(app: &mut DevNotesApp, ctx: &egui::Context) {
    if !app.ui.show_about_dialog {
        return;
    }

    let theme = app.ui.current_theme.clone();
    let urls = &app_data().urls;

    egui::Window::new("About DevNotes")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 240.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(8.0);
                ui.label(RichText::new("DevNotes").size(24.0).strong().color(theme.accent));
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme.text_muted),
                );

                ui.add_space(12.0);
                ui.label(
                    RichText::new("Tips and a little humor for the tutorial site")
                        .color(theme.text_secondary),
                );

                ui.add_space(12.0);
                if ui.link("DevNotes site").clicked() {
                    let _ = open::that(&urls.site);
                }
                ui.add_space(4.0);
                if ui.link("Source code").clicked() {
                    let _ = open::that(&urls.project_repository);
                }
                ui.add_space(4.0);
                if ui.link("Joke API").clicked() {
                    let _ = open::that(&urls.joke_api);
                }

                ui.add_space(12.0);
                if ui.button("Close").clicked() {
                    app.ui.show_about_dialog = false;
                }
                ui.add_space(8.0);
            });
        });
}
