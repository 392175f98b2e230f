//! Abstract input key event, independent of terminal library.
//!
//! Keeps zdash-app free of crossterm so the headless frontend can drive the
//! engine without a terminal.

/// Abstract input key event, independent of terminal library.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, etc.)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
}
