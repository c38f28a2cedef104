use ratatui::style::Color;

use crate::config::ThemeConfig;

/// Helper to convert hex color string to ratatui Color
pub fn hex_to_color(hex: &str) -> Color {
    ThemeConfig::parse_hex(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

/// Theme colors resolved once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub selected: Color,
    pub normal: Color,
    pub dimmed: Color,
    pub text: Color,
    pub description: Color,
    pub popup_border: Color,
}

impl Palette {
    pub fn from_theme(theme: &ThemeConfig) -> Self {
        Self {
            selected: hex_to_color(&theme.color_selected),
            normal: hex_to_color(&theme.color_normal),
            dimmed: hex_to_color(&theme.color_dimmed),
            text: hex_to_color(&theme.color_text),
            description: hex_to_color(&theme.color_description),
            popup_border: hex_to_color(&theme.color_popup_border),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_theme(&ThemeConfig::default())
    }
}
