use ratatui::style::Color;

use crate::model::config::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub dim: Color,
    pub accent: Color,
    /// Row currently being dragged
    pub drag_source: Color,
    /// Background of the row under the pointer during a drag
    pub drop_zone_bg: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x10, 0x18),
            text: Color::Rgb(0xC8, 0xC8, 0xD8),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            dim: Color::Rgb(0x70, 0x70, 0x88),
            accent: Color::Rgb(0x44, 0xDD, 0xFF),
            drag_source: Color::Rgb(0xFF, 0xD7, 0x00),
            drop_zone_bg: Color::Rgb(0x26, 0x3A, 0x2E),
            warning: Color::Rgb(0xFF, 0x44, 0x44),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from settings, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();
        for (name, hex) in &ui.colors {
            if let Some(color) = parse_hex_color(hex) {
                match name.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "dim" => theme.dim = color,
                    "accent" => theme.accent = color,
                    "drag_source" => theme.drag_source = color,
                    "drop_zone" => theme.drop_zone_bg = color,
                    "warning" => theme.warning = color,
                    _ => {}
                }
            }
        }
        theme
    }
}
