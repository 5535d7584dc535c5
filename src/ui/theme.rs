//! Search bar palette and egui theme

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// Search bar color palette
pub struct SearchColors;

impl SearchColors {
    pub const ACCENT: Color32 = Color32::from_rgb(0x2C, 0x6B, 0xED);
    pub const ACCENT_HOVER: Color32 = Color32::from_rgb(0x1E, 0x5A, 0xD8);

    // Widget surface
    pub const SURFACE: Color32 = Color32::from_rgb(0x2D, 0x2D, 0x2D);
    pub const SURFACE_LIGHT: Color32 = Color32::from_rgb(0xE9, 0xE9, 0xE9);
    pub const ICON: Color32 = Color32::from_rgb(0x80, 0x80, 0x80);

    pub const DARK_BG: Color32 = Color32::from_rgb(0x1B, 0x1B, 0x1B);
    pub const LIGHT_BG: Color32 = Color32::from_rgb(0xF6, 0xF6, 0xF6);

    pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xFF, 0xFF, 0xFF);
    pub const TEXT_DARK: Color32 = Color32::from_rgb(0x1B, 0x1B, 0x1B);

    /// Search bar fill for the current visuals
    pub fn surface(dark_mode: bool) -> Color32 {
        if dark_mode {
            Self::SURFACE
        } else {
            Self::SURFACE_LIGHT
        }
    }
}

/// Theme used by the demo host
pub struct SearchTheme {
    pub is_dark: bool,
}

impl SearchTheme {
    pub fn dark() -> Self {
        Self { is_dark: true }
    }

    pub fn light() -> Self {
        Self { is_dark: false }
    }

    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        style.visuals = self.visuals();

        style.text_styles = [
            (TextStyle::Heading, FontId::new(20.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
            (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        ]
        .into();

        style.spacing.item_spacing = egui::vec2(8.0, 8.0);
        style.spacing.window_margin = egui::Margin::same(16.0);

        ctx.set_style(style);
    }

    fn visuals(&self) -> Visuals {
        let (mut visuals, background, text) = if self.is_dark {
            (Visuals::dark(), SearchColors::DARK_BG, SearchColors::TEXT_LIGHT)
        } else {
            (Visuals::light(), SearchColors::LIGHT_BG, SearchColors::TEXT_DARK)
        };

        visuals.panel_fill = background;
        visuals.extreme_bg_color = background;

        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, text);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, text);
        visuals.widgets.inactive.rounding = Rounding::same(8.0);
        visuals.widgets.hovered.bg_fill = SearchColors::ACCENT_HOVER;
        visuals.widgets.hovered.rounding = Rounding::same(8.0);

        visuals.selection.bg_fill = SearchColors::ACCENT.linear_multiply(0.4);
        visuals.selection.stroke = Stroke::new(1.0, SearchColors::ACCENT);
        visuals.hyperlink_color = SearchColors::ACCENT;

        visuals
    }
}
