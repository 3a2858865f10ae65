//! Tips widget state

use std::path::{Path, PathBuf};

use crate::app_data::embedded_tips;
use crate::state::StateEvent;
use crate::tips::{self, ExpansionState, Tip};

/// Where the loaded tips came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipSource {
    Embedded,
    File(PathBuf),
}

/// Tips widget state
pub struct TipsState {
    tips: Vec<Tip>,
    source: TipSource,
    /// Which tips are expanded
    pub expansion: ExpansionState,
}

impl TipsState {
    /// Create state over a fixed list of tips. Nothing starts expanded.
    pub fn new(tips: Vec<Tip>, source: TipSource) -> Self {
        let expansion = ExpansionState::new(tips.len());
        Self {
            tips,
            source,
            expansion,
        }
    }

    /// State over the built-in tips
    pub fn embedded() -> Self {
        Self::new(embedded_tips().to_vec(), TipSource::Embedded)
    }

    /// Load tips from `file` if given, falling back to the built-in tips on error
    pub fn load(file: Option<&Path>) -> (Self, Vec<StateEvent>) {
        let Some(path) = file else {
            return (Self::embedded(), Vec::new());
        };

        match tips::load_tips_file(path) {
            Ok(list) => {
                let count = list.len();
                (
                    Self::new(list, TipSource::File(path.to_path_buf())),
                    vec![StateEvent::LogInfo(format!(
                        "Loaded {} tips from {}",
                        count,
                        path.display()
                    ))],
                )
            }
            Err(e) => (
                Self::embedded(),
                vec![
                    StateEvent::LogError(e.to_string()),
                    StateEvent::StatusMessage(
                        "Could not load tips file, showing built-in tips".to_string(),
                    ),
                ],
            ),
        }
    }

    pub fn tips(&self) -> &[Tip] {
        &self.tips
    }

    pub fn source(&self) -> &TipSource {
        &self.source
    }

    /// Expand or collapse the tip at `index`
    pub fn toggle(&mut self, index: usize) {
        self.expansion.toggle(index);
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expansion.is_expanded(index)
    }
}
