//! Header bar widget
//!
//! Shows the module name on the left and the active language on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use zdash_app::{Dashboard, SlotId};
use zdash_core::{label, Locale};

use crate::theme::{icons::IconSet, palette, styles};

/// Main header showing the module name and the language selector
pub struct MainHeader<'a> {
    dashboard: &'a Dashboard,
    locale: Locale,
    icons: IconSet,
    menu_open: bool,
}

impl<'a> MainHeader<'a> {
    pub fn new(dashboard: &'a Dashboard, locale: Locale, icons: IconSet) -> Self {
        Self {
            dashboard,
            locale,
            icons,
            menu_open: false,
        }
    }

    /// Highlight the language selector while its dropdown is open
    pub fn menu_open(mut self, open: bool) -> Self {
        self.menu_open = open;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.icons.activity(), styles::accent()),
            Span::raw(" "),
            Span::styled(
                self.dashboard.text(SlotId::PropName),
                styles::accent_bold(),
            ),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(label(self.locale, "dashboard"), styles::text_secondary()),
        ]);
        let left_width = left.width() as u16;

        let selector_style = if self.menu_open {
            styles::focused_selected()
        } else {
            styles::text_primary()
        };
        let right = Line::from(vec![
            Span::styled(self.icons.globe(), styles::accent()),
            Span::raw(" "),
            Span::styled(self.locale.native_name(), selector_style),
            Span::raw(" "),
            Span::styled("[l]", styles::keybinding()),
            Span::raw(" "),
        ]);
        let right_width = right.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Right-align the selector when it fits beside the title
        if left_width + right_width + 2 <= inner.width {
            let right_x = inner.x + inner.width - right_width;
            buf.set_line(right_x, inner.y, &right, right_width);
        }
    }
}
