//! Language dropdown anchored under the header's language selector

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;
use zdash_core::{label, Locale, SUPPORTED_LOCALES};

use super::modal_overlay;
use crate::theme::{icons::IconSet, styles};

pub struct LanguageMenu {
    current: Locale,
    cursor: usize,
    icons: IconSet,
}

impl LanguageMenu {
    pub fn new(current: Locale, cursor: usize, icons: IconSet) -> Self {
        Self {
            current,
            cursor,
            icons,
        }
    }

    /// Rect of the dropdown: right-aligned, just below the header
    pub fn area_within(screen: Rect, header: Rect) -> Rect {
        let content_width = SUPPORTED_LOCALES
            .iter()
            .map(|l| l.native_name().width())
            .max()
            .unwrap_or(0) as u16;
        // Borders, padding, check mark column
        let width = (content_width + 8).max(16).min(screen.width);
        let height = (SUPPORTED_LOCALES.len() as u16 + 2).min(screen.height);
        let x = screen.right().saturating_sub(width + 1).max(screen.x);
        let y = header.bottom().min(screen.bottom().saturating_sub(height));
        Rect::new(x, y, width, height)
    }
}

impl Widget for LanguageMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::render_shadow(buf, area);
        Clear.render(area, buf);

        let title = format!(" {} ", label(self.current, "language"));
        let block = styles::modal_block(&title);
        let inner = block.inner(area);
        block.render(area, buf);

        for (row, locale) in SUPPORTED_LOCALES.iter().enumerate() {
            let y = inner.y + row as u16;
            if y >= inner.bottom() {
                break;
            }
            let marker = if *locale == self.current {
                self.icons.check()
            } else {
                " "
            };
            let style = if row == self.cursor {
                styles::focused_selected()
            } else {
                styles::text_primary()
            };
            let line = Line::from(vec![
                Span::styled(format!(" {} ", marker), style),
                Span::styled(locale.native_name(), style),
                Span::styled(" ", style),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
