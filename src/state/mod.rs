//! Application state modules
//!
//! Each widget owns its state struct. The app shell holds one of each and
//! turns the events they return into status bar text and log lines.

mod fetcher;
mod tips;
mod ui;

pub use fetcher::{FetchPhase, FetcherState};
pub use tips::{TipSource, TipsState};
pub use ui::{Tab, UiState};

/// Events that state methods can return.
/// These communicate results back to DevNotesApp without direct mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateEvent {
    /// Update the status message
    StatusMessage(String),

    /// Log an error message
    LogError(String),

    /// Log an info message
    LogInfo(String),
}
