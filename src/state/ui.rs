//! UI-related application state

use egui_commonmark::CommonMarkCache;

use crate::ui::theme::{Theme, ThemePreset};

/// Application tabs representing the main navigation sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    /// Random joke widget
    #[default]
    Joke,
    /// Expandable tips list
    Tips,
    /// Theme, joke endpoint and tips file
    Settings,
}

/// UI-related state
pub struct UiState {
    /// Cache for markdown rendering of tip descriptions
    pub markdown_cache: CommonMarkCache,
    /// Current theme
    pub current_theme: Theme,
    /// Currently selected tab
    pub active_tab: Tab,
    /// Whether theme needs to be applied
    pub theme_dirty: bool,
    /// Whether to show the About dialog
    pub show_about_dialog: bool,
    /// Endpoint text being edited in Settings
    pub endpoint_input: String,
}

impl UiState {
    pub fn new(preset: ThemePreset, endpoint: &str) -> Self {
        Self {
            markdown_cache: CommonMarkCache::default(),
            current_theme: preset.theme(),
            active_tab: Tab::default(),
            theme_dirty: true, // Apply theme on first frame
            show_about_dialog: false,
            endpoint_input: endpoint.to_string(),
        }
    }
}
