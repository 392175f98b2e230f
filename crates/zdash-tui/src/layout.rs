//! Screen layout definitions for the dashboard
//!
//! Cards sit side by side on wide terminals and stack on narrow ones.

use ratatui::layout::{Constraint, Layout, Rect};

/// Terminals at least this wide show the info and device cards side by side
pub const WIDE_BREAKPOINT: u16 = 80;

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 1;
/// Borders plus name, version, author, description, root implementation
const INFO_CARD_HEIGHT: u16 = 7;
/// Borders plus three badges and the module count
const STATUS_CARD_HEIGHT: u16 = 6;

/// Screen areas for the dashboard
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title, version and current language
    pub header: Rect,

    /// Basic module information
    pub info: Rect,

    /// Kernel, SDK, ABI
    pub device: Rect,

    /// Status badges and module count
    pub status: Rect,

    /// Keybindings, load indicator and last refresh time
    pub footer: Rect,
}

/// Create the dashboard layout for `area`
pub fn create(area: Rect) -> ScreenAreas {
    let wide = area.width >= WIDE_BREAKPOINT;

    let cards_height = if wide {
        INFO_CARD_HEIGHT
    } else {
        // Device card is borders plus three rows
        INFO_CARD_HEIGHT + 5
    };

    let [header, cards, status, _, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(cards_height),
        Constraint::Length(STATUS_CARD_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(FOOTER_HEIGHT),
    ])
    .areas(area);

    let [info, device] = if wide {
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(cards)
    } else {
        Layout::vertical([Constraint::Length(INFO_CARD_HEIGHT), Constraint::Min(0)]).areas(cards)
    };

    ScreenAreas {
        header,
        info,
        device,
        status,
        footer,
    }
}
