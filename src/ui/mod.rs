//! UI modules for DevNotes
//!
//! Rendering code for each tab plus shared components. Rendering reads and
//! mutates `DevNotesApp`; all widget logic lives in `crate::state`.

mod components;
mod joke_tab;
mod settings_tab;
pub mod theme;
mod tips_tab;

pub use components::{render_about_dialog, render_tab};
pub use joke_tab::render_joke_tab;
pub use settings_tab::render_settings_tab;
pub use tips_tab::render_tips_tab;
