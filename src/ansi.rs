//! ANSI SGR escape primitives.
//!
//! The styling vocabulary the renderer emits: the eight classic terminal
//! colors as 3x/4x SGR parameters, plus the handful of text attributes used
//! for diff highlighting. Code tables per
//! <https://en.wikipedia.org/wiki/ANSI_escape_code>.

/// Control Sequence Introducer.
pub const CSI: &str = "\x1b[";

/// Reset sequence terminating every styled token.
pub const RESET: &str = "\x1b[0m";

/// SGR parameter: bold.
pub const BOLD: u8 = 1;
/// SGR parameter: underline.
pub const UNDERLINE: u8 = 4;
/// SGR parameter: reverse video.
pub const REVERSE: u8 = 7;

/// The classic terminal colors plus the terminal's configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    /// Whatever the terminal is configured to use (SGR 39/49).
    Default = 9,
}

/// Foreground SGR parameter for a color.
pub fn fg(color: Color) -> u8 {
    color as u8 + 30
}

/// Background SGR parameter for a color.
pub fn bg(color: Color) -> u8 {
    color as u8 + 40
}

/// Wraps `text` in a single SGR sequence built from `params` (joined with
/// `;`), followed by a full reset.
pub fn format_text(text: &str, params: &[u8]) -> String {
    let attrs = params
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(";");
    format!("{}{}m{}{}", CSI, attrs, text, RESET)
}
