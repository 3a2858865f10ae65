//! Joke tab UI rendering

use eframe::egui::{self, RichText};

use crate::app::DevNotesApp;
use crate::state::FetchPhase;
use crate::ui::components::section_frame;

/// Render the joke tab
pub fn render_joke_tab(app: &mut DevNotesApp, ui: &mut egui::Ui) {
    let theme = app.ui.current_theme.clone();

    section_frame(ui, &theme, "Random Joke", |ui| {
        ui.horizontal(|ui| {
            let loading = app.fetcher.is_loading();
            let label = if loading { "Loading..." } else { "Get a joke" };

            // Disabled while loading so one click is one request
            if ui.add_enabled(!loading, egui::Button::new(label)).clicked() {
                app.fetcher.fetch();
                app.status_message = "Fetching a joke...".to_string();
            }

            if loading {
                ui.spinner();
                if ui.button("Cancel").clicked() {
                    app.fetcher.cancel();
                    app.status_message = "Cancelled".to_string();
                }
            } else if app.fetcher.phase != FetchPhase::Idle && ui.button("Clear").clicked() {
                app.fetcher.clear();
            }
        });

        ui.add_space(16.0);

        match &app.fetcher.phase {
            FetchPhase::Idle => {
                ui.label(
                    RichText::new("Press the button for a random programming-friendly joke.")
                        .color(theme.text_muted),
                );
            }
            FetchPhase::Loading => {
                ui.label(RichText::new("Asking the joke API...").color(theme.text_muted));
            }
            FetchPhase::Resolved(text) => {
                ui.label(RichText::new(text).color(theme.text_primary).size(16.0));
                if let Some(at) = app.fetcher.fetched_at {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Fetched at {}", at.format("%H:%M:%S")))
                            .color(theme.text_muted)
                            .size(11.0),
                    );
                }
            }
            FetchPhase::Failed(message) => {
                ui.label(RichText::new(message).color(theme.error));
            }
        }
    });

    ui.add_space(8.0);
    ui.label(
        RichText::new(format!("Source: {}", app.fetcher.endpoint()))
            .color(theme.text_muted)
            .size(11.0),
    );
}
