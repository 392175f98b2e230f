//! Labeled key/value card used for module and device information

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{palette, styles};

/// A bordered card of `label  value` rows with labels aligned
pub struct InfoCard<'a> {
    title: String,
    rows: Vec<(&'a str, &'a str)>,
}

impl<'a> InfoCard<'a> {
    pub fn new(title: String) -> Self {
        Self {
            title,
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, label: &'a str, value: &'a str) -> Self {
        self.rows.push((label, value));
        self
    }
}

impl Widget for InfoCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(Line::from(Span::styled(
                format!(" {} ", self.title),
                styles::accent_bold(),
            )))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Display width, not char count, so CJK labels line up
        let label_width = self
            .rows
            .iter()
            .map(|(label, _)| label.width())
            .max()
            .unwrap_or(0);

        for (i, (label, value)) in self.rows.iter().enumerate() {
            let y = inner.y + i as u16;
            if y >= inner.bottom() {
                break;
            }
            let padding = " ".repeat(label_width - label.width() + 2);
            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(*label, styles::text_secondary()),
                Span::raw(padding),
                Span::styled(*value, styles::text_primary()),
            ]);
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}
