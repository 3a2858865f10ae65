//! Application data embedded from TOML/JSON files at compile time.
//!
//! This module provides access to application-level constants that are:
//! - Embedded at compile time via `include_str!`
//! - Parsed lazily on first access via `OnceLock`
//! - Immutable at runtime (not user-configurable)
//!
//! This is distinct from `config.rs` which handles user preferences.
//! App data defines *how the application works* (window layout, joke API defaults),
//! while config defines *user choices* (theme, custom endpoint, tips file).
//!
//! Data files are located in `embedded/`:
//! - `app.toml` - Window settings, joke API defaults, links
//! - `tips.json` - The built-in tips shown in the Tips tab

use serde::Deserialize;
use std::sync::OnceLock;

use crate::tips::Tip;

const APP_TOML: &str = include_str!("../embedded/app.toml");
const TIPS_JSON: &str = include_str!("../embedded/tips.json");

/// Application constants
#[derive(Debug, Deserialize)]
pub struct AppData {
    pub window: WindowData,
    pub joke: JokeData,
    pub urls: UrlsData,
}

#[derive(Debug, Deserialize)]
pub struct WindowData {
    pub initial_size: [f32; 2],
    pub min_size: [f32; 2],
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct JokeData {
    /// Default joke API endpoint (overridable in config)
    pub endpoint: String,
    /// Joins setup and punchline
    pub separator: String,
    /// The only failure text the joke widget ever shows
    pub failure_message: String,
}

#[derive(Debug, Deserialize)]
pub struct UrlsData {
    pub site: String,
    pub project_repository: String,
    pub joke_api: String,
}

/// Get application constants (lazy-loaded)
pub fn app_data() -> &'static AppData {
    static DATA: OnceLock<AppData> = OnceLock::new();
    DATA.get_or_init(|| {
        toml::from_str(APP_TOML).unwrap_or_else(|e| {
            panic!("Failed to parse app.toml: {}", e);
        })
    })
}

/// Get the built-in tips (lazy-loaded)
pub fn embedded_tips() -> &'static [Tip] {
    static TIPS: OnceLock<Vec<Tip>> = OnceLock::new();
    TIPS.get_or_init(|| {
        serde_json::from_str(TIPS_JSON).unwrap_or_else(|e| {
            panic!("Failed to parse tips.json: {}", e);
        })
    })
}
