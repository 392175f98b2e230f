//! Semantic style builders for the dashboard theme.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};
use zdash_app::LoadStatus;
use zdash_core::StatusClass;

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn text_bright_bold() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

/// "Black on Cyan" - used for the highlighted row of menus
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

// --- Badge styles ---

/// Bold text in the class colour; unset badges render muted
pub fn badge(class: Option<StatusClass>) -> Style {
    match class {
        Some(class) => Style::default()
            .fg(palette::status_color(class))
            .add_modifier(Modifier::BOLD),
        None => text_muted(),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

// --- Load indicator mapping ---

/// Indicator for the footer: `(icon, Style)` for the current load state.
///
/// An in-flight refresh takes precedence over the last completed result.
pub fn load_indicator(status: LoadStatus, refreshing: bool) -> (&'static str, Style) {
    if refreshing {
        return (
            "↻",
            Style::default()
                .fg(palette::STATUS_YELLOW)
                .add_modifier(Modifier::BOLD),
        );
    }
    match status {
        LoadStatus::Pending => ("○", text_muted()),
        LoadStatus::Loaded => (
            "●",
            Style::default()
                .fg(palette::STATUS_GREEN)
                .add_modifier(Modifier::BOLD),
        ),
        LoadStatus::ReadFailed | LoadStatus::BridgeError => (
            "✗",
            Style::default()
                .fg(palette::STATUS_RED)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_styles_have_correct_colors() {
        assert_eq!(text_primary().fg, Some(palette::TEXT_PRIMARY));
        assert_eq!(text_secondary().fg, Some(palette::TEXT_SECONDARY));
        assert_eq!(text_muted().fg, Some(palette::TEXT_MUTED));
        assert!(text_bright_bold().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_badge_style_follows_class() {
        assert_eq!(
            badge(Some(StatusClass::Positive)).fg,
            Some(palette::STATUS_GREEN)
        );
        assert_eq!(
            badge(Some(StatusClass::Negative)).fg,
            Some(palette::STATUS_RED)
        );
        assert_eq!(
            badge(Some(StatusClass::Indeterminate)).fg,
            Some(palette::STATUS_GRAY)
        );
        assert_eq!(badge(None).fg, Some(palette::TEXT_MUTED));
    }

    #[test]
    fn test_focused_selected_uses_black_on_cyan() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
    }

    #[test]
    fn test_load_indicator_refreshing_wins() {
        let (icon, style) = load_indicator(LoadStatus::Loaded, true);
        assert_eq!(icon, "↻");
        assert_eq!(style.fg, Some(palette::STATUS_YELLOW));
    }

    #[test]
    fn test_load_indicator_states() {
        assert_eq!(load_indicator(LoadStatus::Pending, false).0, "○");
        assert_eq!(load_indicator(LoadStatus::Loaded, false).0, "●");
        let (icon, style) = load_indicator(LoadStatus::BridgeError, false);
        assert_eq!(icon, "✗");
        assert_eq!(style.fg, Some(palette::STATUS_RED));
    }
}
