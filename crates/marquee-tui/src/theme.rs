use marquee_core::config::ThemeColorOverrides;
use ratatui::style::Color;

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub card: Color,
    pub active: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Dark
        Self {
            bg: Color::Rgb(0x28, 0x28, 0x28),
            fg: Color::Rgb(0xd4, 0xbe, 0x98),
            accent: Color::Rgb(0x89, 0xb4, 0x82),
            muted: Color::Rgb(0x7c, 0x6f, 0x64),
            card: Color::Rgb(0x32, 0x30, 0x2f),
            active: Color::Rgb(0xd8, 0xa6, 0x57),
        }
    }
}

impl Theme {
    /// Default theme with any valid overrides applied
    pub fn from_overrides(overrides: &ThemeColorOverrides) -> Self {
        let mut theme = Self::default();

        let apply = |value: &Option<String>, slot: &mut Color| {
            if let Some(hex) = value {
                match parse_hex_color(hex) {
                    Some(color) => *slot = color,
                    None => tracing::warn!("Invalid theme color '{}', keeping default", hex),
                }
            }
        };

        apply(&overrides.bg, &mut theme.bg);
        apply(&overrides.fg, &mut theme.fg);
        apply(&overrides.accent, &mut theme.accent);
        apply(&overrides.muted, &mut theme.muted);
        apply(&overrides.card, &mut theme.card);
        apply(&overrides.active, &mut theme.active);

        theme
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}
