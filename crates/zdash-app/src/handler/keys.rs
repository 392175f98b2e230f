//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit works everywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.ui_mode {
        UiMode::Normal => handle_key_normal(key),
        UiMode::LanguageMenu => handle_key_language_menu(key),
        UiMode::ModulesModal => handle_key_modules_modal(key),
    }
}

/// Handle key events on the dashboard
fn handle_key_normal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Char('r') => Some(Message::Refresh),
        InputKey::Char('l') => Some(Message::ToggleLanguageMenu),
        InputKey::Char('m') => Some(Message::ShowModules),
        _ => None,
    }
}

/// Handle key events while the language dropdown is open
///
/// Anything other than navigation or confirmation dismisses the menu, like a
/// click outside a dropdown.
fn handle_key_language_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::LanguageMenuUp),
        InputKey::Down | InputKey::Char('j') | InputKey::Tab => Some(Message::LanguageMenuDown),
        InputKey::Enter => Some(Message::ConfirmLanguage),
        InputKey::Char('l') => Some(Message::ToggleLanguageMenu),
        _ => Some(Message::CloseLanguageMenu),
    }
}

/// Handle key events in the modules modal
fn handle_key_modules_modal(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('m') | InputKey::Enter => Some(Message::HideModules),
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::Up | InputKey::Char('k') | InputKey::PageUp => Some(Message::ScrollModulesUp),
        InputKey::Down | InputKey::Char('j') | InputKey::PageDown => {
            Some(Message::ScrollModulesDown)
        }
        _ => None,
    }
}
