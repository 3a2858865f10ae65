use eframe::egui::{self, Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};

/// Available theme presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreset {
    #[default]
    Slate,
    Ocean,
    Catppuccin,
}

impl ThemePreset {
    /// Get all available presets
    pub fn all() -> &'static [ThemePreset] {
        &[
            ThemePreset::Slate,
            ThemePreset::Ocean,
            ThemePreset::Catppuccin,
        ]
    }

    /// Get display name for the preset
    pub fn name(&self) -> &'static str {
        match self {
            ThemePreset::Slate => "Slate",
            ThemePreset::Ocean => "Ocean",
            ThemePreset::Catppuccin => "Catppuccin Mocha",
        }
    }

    /// Key used in config.toml
    pub fn key(&self) -> &'static str {
        match self {
            ThemePreset::Slate => "slate",
            ThemePreset::Ocean => "ocean",
            ThemePreset::Catppuccin => "catppuccin",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.key().eq_ignore_ascii_case(key))
    }

    /// Get the theme colors for this preset
    pub fn theme(&self) -> Theme {
        match self {
            ThemePreset::Slate => Theme::slate(),
            ThemePreset::Ocean => Theme::ocean(),
            ThemePreset::Catppuccin => Theme::catppuccin(),
        }
    }
}

/// Theme color definitions
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg_dark: Color32,
    pub bg_medium: Color32,
    pub bg_light: Color32,

    // Text colors
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,

    // Accent colors
    pub accent: Color32,
    pub accent_hover: Color32,
    pub accent_muted: Color32,

    // Semantic colors
    pub success: Color32,
    pub error: Color32,

    // UI element colors
    pub border: Color32,
    pub selection: Color32,
    pub code_bg: Color32,
}

impl Theme {
    /// Slate theme - neutral grays with an indigo accent, like the docs site
    pub fn slate() -> Self {
        Self {
            bg_dark: Color32::from_rgb(22, 25, 31),
            bg_medium: Color32::from_rgb(30, 34, 42),
            bg_light: Color32::from_rgb(45, 51, 62),

            text_primary: Color32::from_rgb(241, 245, 249),
            text_secondary: Color32::from_rgb(203, 213, 225),
            text_muted: Color32::from_rgb(148, 163, 184),

            accent: Color32::from_rgb(99, 102, 241),        // Indigo-500
            accent_hover: Color32::from_rgb(129, 140, 248), // Indigo-400
            accent_muted: Color32::from_rgb(67, 56, 202),   // Indigo-700

            success: Color32::from_rgb(34, 197, 94),
            error: Color32::from_rgb(239, 68, 68),

            border: Color32::from_rgb(51, 65, 85),
            selection: Color32::from_rgb(99, 102, 241).gamma_multiply(0.3),
            code_bg: Color32::from_rgb(11, 13, 17),
        }
    }

    /// Ocean theme - deep blue with a cyan accent
    pub fn ocean() -> Self {
        Self {
            bg_dark: Color32::from_rgb(15, 23, 42),
            bg_medium: Color32::from_rgb(22, 33, 54),
            bg_light: Color32::from_rgb(35, 48, 70),

            text_primary: Color32::from_rgb(248, 250, 252),
            text_secondary: Color32::from_rgb(200, 210, 220),
            text_muted: Color32::from_rgb(130, 145, 160),

            accent: Color32::from_rgb(6, 182, 212),
            accent_hover: Color32::from_rgb(34, 211, 238),
            accent_muted: Color32::from_rgb(8, 140, 165),

            success: Color32::from_rgb(52, 211, 153),
            error: Color32::from_rgb(251, 113, 133),

            border: Color32::from_rgb(51, 65, 85),
            selection: Color32::from_rgb(6, 182, 212).gamma_multiply(0.3),
            code_bg: Color32::from_rgb(8, 14, 22),
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin() -> Self {
        Self {
            bg_dark: Color32::from_rgb(24, 24, 37),       // Mantle
            bg_medium: Color32::from_rgb(30, 30, 46),     // Base
            bg_light: Color32::from_rgb(49, 50, 68),      // Surface0

            text_primary: Color32::from_rgb(205, 214, 244),   // Text
            text_secondary: Color32::from_rgb(186, 194, 222), // Subtext1
            text_muted: Color32::from_rgb(147, 153, 178),     // Overlay1

            accent: Color32::from_rgb(203, 166, 247),       // Mauve
            accent_hover: Color32::from_rgb(180, 190, 254), // Lavender
            accent_muted: Color32::from_rgb(150, 120, 200),

            success: Color32::from_rgb(166, 227, 161), // Green
            error: Color32::from_rgb(243, 139, 168),   // Red

            border: Color32::from_rgb(69, 71, 90), // Surface1
            selection: Color32::from_rgb(203, 166, 247).gamma_multiply(0.3),
            code_bg: Color32::from_rgb(17, 17, 27),
        }
    }

    /// Apply this theme to egui's visuals
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.window_fill = self.bg_dark;
        visuals.panel_fill = self.bg_dark;
        visuals.faint_bg_color = self.bg_medium;
        visuals.extreme_bg_color = self.code_bg;

        visuals.widgets.noninteractive.bg_fill = self.bg_medium;
        visuals.widgets.noninteractive.weak_bg_fill = self.bg_light;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.inactive.bg_fill = self.bg_medium;
        visuals.widgets.inactive.weak_bg_fill = self.bg_light;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, self.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.hovered.bg_fill = self.bg_light;
        visuals.widgets.hovered.weak_bg_fill = self.bg_light;
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, self.accent);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.active.bg_fill = self.accent_muted;
        visuals.widgets.active.weak_bg_fill = self.accent_muted;
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, self.accent_hover);
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);
        visuals.hyperlink_color = self.accent;

        visuals.window_stroke = Stroke::new(1.0, self.border);
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        ctx.set_visuals(visuals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_keys_round_trip() {
        for preset in ThemePreset::all() {
            assert_eq!(ThemePreset::from_key(preset.key()), Some(*preset));
        }
        assert_eq!(ThemePreset::from_key("OCEAN"), Some(ThemePreset::Ocean));
        assert_eq!(ThemePreset::from_key("amber"), None);
    }

    #[test]
    fn test_apply_uses_every_background() {
        let ctx = egui::Context::default();
        for preset in ThemePreset::all() {
            let theme = preset.theme();
            theme.apply(&ctx);

            let visuals = ctx.style().visuals.clone();
            assert_eq!(visuals.panel_fill, theme.bg_dark);
            assert_eq!(visuals.faint_bg_color, theme.bg_medium);
            assert_eq!(visuals.widgets.inactive.weak_bg_fill, theme.bg_light);
            assert_eq!(visuals.extreme_bg_color, theme.code_bg);
        }
    }
}
