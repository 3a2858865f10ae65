use eframe::egui::{self, RichText};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::joke::JokeClient;
use crate::state::{FetcherState, StateEvent, Tab, TipSource, TipsState, UiState};
use crate::ui::{
    render_about_dialog, render_joke_tab, render_settings_tab, render_tab, render_tips_tab,
};

/// Main application state
pub struct DevNotesApp {
    /// Application configuration
    pub config: Config,
    /// Status message for the status bar
    pub status_message: String,
    /// Joke widget
    pub fetcher: FetcherState,
    /// Tips widget
    pub tips: TipsState,
    /// Theme, tabs, dialogs
    pub ui: UiState,
}

impl DevNotesApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>, config: Config) -> anyhow::Result<Self> {
        let client = JokeClient::new(config.joke.endpoint.clone(), config.joke.timeout())?;
        let (tips, events) = TipsState::load(config.tips.file.as_deref().map(Path::new));
        let ui = UiState::new(config.ui.theme, &config.joke.endpoint);

        let mut app = Self {
            config,
            status_message: "Ready".to_string(),
            fetcher: FetcherState::new(client),
            tips,
            ui,
        };
        app.handle_events(events);

        Ok(app)
    }

    /// Apply events returned by state methods
    pub fn handle_events(&mut self, events: Vec<StateEvent>) {
        for event in events {
            match event {
                StateEvent::StatusMessage(msg) => self.status_message = msg,
                StateEvent::LogError(msg) => tracing::error!("{}", msg),
                StateEvent::LogInfo(msg) => tracing::info!("{}", msg),
            }
        }
    }

    /// Save configuration to disk
    pub fn save_config(&mut self) {
        if let Err(e) = self.config.save() {
            tracing::error!("Failed to save config: {}", e);
            self.status_message = "Failed to save settings".to_string();
        }
    }

    /// Point the joke widget at a new endpoint and persist it
    pub fn apply_endpoint(&mut self, endpoint: &str) {
        if let Err(e) = self.config.set_value("joke.endpoint", endpoint.trim()) {
            self.status_message = e.to_string();
            return;
        }

        match JokeClient::new(self.config.joke.endpoint.clone(), self.config.joke.timeout()) {
            Ok(client) => {
                self.fetcher.set_client(client);
                self.ui.endpoint_input = self.config.joke.endpoint.clone();
                self.status_message = format!("Joke endpoint set to {}", self.config.joke.endpoint);
                self.save_config();
            }
            Err(e) => {
                tracing::error!("Failed to create HTTP client: {}", e);
                self.status_message = "Failed to create HTTP client".to_string();
            }
        }
    }

    /// Replace the tips list with a file chosen by the user (or the built-in set)
    pub fn use_tips_file(&mut self, path: Option<PathBuf>) {
        let (tips, events) = TipsState::load(path.as_deref());
        self.config.tips.file = match tips.source() {
            TipSource::File(p) => Some(p.to_string_lossy().to_string()),
            TipSource::Embedded => None,
        };
        self.status_message = format!("{} tips loaded", tips.tips().len());
        self.tips = tips;
        self.handle_events(events);
        self.save_config();
    }

    /// Open a file picker for a custom tips file
    pub fn browse_for_tips_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Select Tips File")
            .add_filter("JSON", &["json"])
            .pick_file()
        {
            self.use_tips_file(Some(path));
        }
    }
}

impl eframe::App for DevNotesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ui.theme_dirty {
            self.ui.current_theme.apply(ctx);
            self.ui.theme_dirty = false;
        }

        // Poll async tasks
        let events = self.fetcher.poll(ctx);
        self.handle_events(events);

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("Open DevNotes site").clicked() {
                        let _ = open::that(&crate::app_data::app_data().urls.site);
                    }
                    if ui.button("About").clicked() {
                        self.ui.show_about_dialog = true;
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&self.status_message).color(self.ui.current_theme.text_muted),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                render_tab(self, ui, Tab::Joke, "Joke");
                render_tab(self, ui, Tab::Tips, "Tips");
                render_tab(self, ui, Tab::Settings, "Settings");
            });
            ui.separator();
            ui.add_space(8.0);

            match self.ui.active_tab {
                Tab::Joke => render_joke_tab(self, ui),
                Tab::Tips => render_tips_tab(self, ui),
                Tab::Settings => render_settings_tab(self, ui),
            }
        });

        render_about_dialog(self, ctx);
    }
}
