//! Footer line: key hints on the left, load state and refresh time on the right

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use zdash_app::LoadStatus;
use zdash_core::{label, Locale};

use crate::theme::styles;

/// Format used for the last refresh time
const TIME_FORMAT: &str = "%H:%M:%S";

pub struct Footer<'a> {
    locale: Locale,
    load_status: LoadStatus,
    refreshing: bool,
    last_refresh: Option<DateTime<Local>>,
    last_error: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(locale: Locale, load_status: LoadStatus) -> Self {
        Self {
            locale,
            load_status,
            refreshing: false,
            last_refresh: None,
            last_error: None,
        }
    }

    pub fn refreshing(mut self, refreshing: bool) -> Self {
        self.refreshing = refreshing;
        self
    }

    pub fn last_refresh(mut self, at: Option<DateTime<Local>>) -> Self {
        self.last_refresh = at;
        self
    }

    pub fn last_error(mut self, error: Option<&'a str>) -> Self {
        self.last_error = error;
        self
    }

    fn hints(&self) -> Line<'static> {
        let mut spans = Vec::new();
        for (key, label_key) in [
            ("r", "refresh"),
            ("l", "language"),
            ("m", "modules"),
            ("q", "quit"),
        ] {
            spans.push(Span::styled(format!(" [{}] ", key), styles::keybinding()));
            spans.push(Span::styled(
                label(self.locale, label_key),
                styles::text_muted(),
            ));
        }
        Line::from(spans)
    }

    fn status(&self) -> Line<'a> {
        let (icon, style) = styles::load_indicator(self.load_status, self.refreshing);
        let mut spans = vec![Span::styled(icon, style), Span::raw(" ")];

        if self.refreshing {
            spans.push(Span::styled(
                format!("{}...", label(self.locale, "refreshing")),
                style,
            ));
        } else if let Some(error) = self.last_error.filter(|_| self.load_status.is_failure()) {
            spans.push(Span::styled(error, style));
        } else if let Some(at) = self.last_refresh {
            spans.push(Span::styled(
                format!("{} {}", label(self.locale, "last_refresh"), at.format(TIME_FORMAT)),
                styles::text_secondary(),
            ));
        }
        spans.push(Span::raw(" "));
        Line::from(spans)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let hints = self.hints();
        let status = self.status();
        let status_width = (status.width() as u16).min(area.width);

        buf.set_line(area.x, area.y, &hints, area.width);
        // Status wins when both don't fit
        let status_x = area.right() - status_width;
        buf.set_line(status_x, area.y, &status, status_width);
    }
}
