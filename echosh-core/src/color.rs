// echosh-core/src/color.rs
//! Color-name resolution and terminal decoration.
//!
//! Maps caller-supplied color names onto the 16 ANSI named colors and wraps
//! text in per-call escape/reset pairs. Decoration is a pure function from
//! (text, spec) to decorated text; there is no process-wide color state, so
//! concurrent calls cannot corrupt each other's styling.

use owo_colors::{AnsiColors, OwoColorize, Style};

use crate::errors::EchoshError;

/// Resolves a color name to its ANSI color, case-insensitively.
///
/// Both the plain/bright ANSI names ("red", "brightyellow") and the
/// `LIGHT*_EX` aliases ("LIGHTYELLOW_EX") are recognized. An unrecognized
/// name is a caller configuration error and fails fast, before any output
/// is produced.
pub fn color_from_name(name: &str) -> Result<AnsiColors, EchoshError> {
    let lower = name.to_lowercase();
    let color = match lower.as_str() {
        "black" => AnsiColors::Black,
        "red" => AnsiColors::Red,
        "green" => AnsiColors::Green,
        "yellow" => AnsiColors::Yellow,
        "blue" => AnsiColors::Blue,
        "magenta" => AnsiColors::Magenta,
        "cyan" => AnsiColors::Cyan,
        "white" => AnsiColors::White,
        "brightblack" | "lightblack_ex" => AnsiColors::BrightBlack,
        "brightred" | "lightred_ex" => AnsiColors::BrightRed,
        "brightgreen" | "lightgreen_ex" => AnsiColors::BrightGreen,
        "brightyellow" | "lightyellow_ex" => AnsiColors::BrightYellow,
        "brightblue" | "lightblue_ex" => AnsiColors::BrightBlue,
        "brightmagenta" | "lightmagenta_ex" => AnsiColors::BrightMagenta,
        "brightcyan" | "lightcyan_ex" => AnsiColors::BrightCyan,
        "brightwhite" | "lightwhite_ex" => AnsiColors::BrightWhite,
        _ => return Err(EchoshError::UnknownColor(name.to_string())),
    };
    Ok(color)
}

/// How a rendered text block is wrapped before it reaches the console.
///
/// `error` forces the red error foreground and takes precedence over any
/// explicit `text_color`. The two highlight modes are independent toggles;
/// when both are set the highlight wrap sits innermost and the secondary
/// highlight wraps around it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoration {
    pub text_color: Option<AnsiColors>,
    pub highlight: bool,
    pub secondary_highlight: bool,
    pub error: bool,
}

impl Decoration {
    /// Wraps `text` according to this spec. Every wrapped region is
    /// individually terminated with a full style reset.
    pub fn apply(&self, text: &str) -> String {
        let mut styled = text.to_string();
        if self.highlight {
            styled = wrap(
                &styled,
                Style::new()
                    .color(AnsiColors::Black)
                    .on_color(AnsiColors::BrightYellow),
            );
        }
        if self.secondary_highlight {
            styled = wrap(
                &styled,
                Style::new()
                    .color(AnsiColors::BrightYellow)
                    .on_color(AnsiColors::Black),
            );
        }
        let foreground = if self.error {
            Some(AnsiColors::Red)
        } else {
            self.text_color
        };
        if let Some(color) = foreground {
            styled = wrap(&styled, Style::new().color(color));
        }
        styled
    }
}

/// Wraps `text` in a single foreground color escape/reset pair.
pub fn paint(text: &str, color: AnsiColors) -> String {
    wrap(text, Style::new().color(color))
}

fn wrap(text: &str, style: Style) -> String {
    text.style(style).to_string()
}
