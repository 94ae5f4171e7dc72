use swatchy_core::StyleHook;
use swatchy_core::theme::{self, DEFAULT_MARKER, Theme};
use tuirealm::props::Color;

/// The terminal session's styling hook.
///
/// Plays the role of the document-root attribute: a single optional value
/// the chrome colors key off of. The view resolves it to a palette on every
/// redraw, so there is nothing to invalidate.
#[derive(Debug, Default)]
pub struct SessionHook {
    value: Option<String>,
}

impl SessionHook {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StyleHook for SessionHook {
    fn set(&mut self, id: &str) {
        self.value = Some(id.to_string());
    }

    fn clear(&mut self) {
        self.value = None;
    }

    fn current(&self) -> Option<String> {
        self.value.clone()
    }
}

/// Colors derived from the effective theme's swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: Color,
    pub accent_alt: Color,
}

/// Resolve the palette for an effective theme value.
///
/// Unknown identifiers get the default swatch for the chrome only; the hook
/// still carries the literal value, exactly as an unstyled attribute would.
pub fn palette_for(effective: &str) -> Palette {
    let theme = resolve_theme(effective);
    Palette {
        accent: hex_to_color(theme.swatch.start),
        accent_alt: hex_to_color(theme.swatch.end),
    }
}

fn resolve_theme(effective: &str) -> &'static Theme {
    if effective == DEFAULT_MARKER {
        theme::default_theme()
    } else {
        theme::builtin(effective).unwrap_or_else(theme::default_theme)
    }
}

/// Convert a hex color string to a tuirealm Color.
pub fn hex_to_color(hex: &str) -> Color {
    if hex.is_empty() || hex == "reset" {
        return Color::Reset;
    }

    match hex.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        _ => match parse_hex_color(hex) {
            Ok((r, g, b)) => Color::Rgb(r, g, b),
            Err(_) => Color::Reset,
        },
    }
}

fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), &'static str> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err("Invalid hex color format");
    }

    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid red component")?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid green component")?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid blue component")?;

    Ok((r, g, b))
}
