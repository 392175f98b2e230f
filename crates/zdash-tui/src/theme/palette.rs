//! Color palette for the dashboard theme.

use ratatui::style::Color;
use zdash_core::StatusClass;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_BRIGHT: Color = Color::White;
/// Foreground on accent-coloured backgrounds
pub const CONTRAST_FG: Color = Color::Black;

// --- Effects ---
pub const SHADOW: Color = Color::Rgb(5, 6, 8);

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_GRAY: Color = Color::Gray;
pub const STATUS_YELLOW: Color = Color::Yellow;

/// Badge colour for a status class
pub fn status_color(class: StatusClass) -> Color {
    match class {
        StatusClass::Positive => STATUS_GREEN,
        StatusClass::Negative => STATUS_RED,
        StatusClass::Indeterminate => STATUS_GRAY,
    }
}
