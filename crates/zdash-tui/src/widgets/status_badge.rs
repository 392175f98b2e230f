//! Status badges and the card that groups them

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;
use zdash_app::{BadgeSlot, Dashboard, SlotId};
use zdash_core::{label, Locale};

use crate::theme::{icons::IconSet, palette, styles};

/// Badge rows in display order, with the label key for each
const BADGE_ROWS: &[(SlotId, &str)] = &[
    (SlotId::ValMonitor, "zygote_monitor"),
    (SlotId::ValZygote64, "zygote64"),
    (SlotId::ValDaemon64, "daemon64"),
];

/// A single badge: `icon label` in the class colour
pub struct StatusBadge<'a> {
    badge: &'a BadgeSlot,
    icons: IconSet,
}

impl<'a> StatusBadge<'a> {
    pub fn new(badge: &'a BadgeSlot, icons: IconSet) -> Self {
        Self { badge, icons }
    }

    pub fn line(&self) -> Line<'a> {
        let style = styles::badge(self.badge.class());
        Line::from(vec![
            Span::styled(self.icons.status(self.badge.icon()), style),
            Span::raw(" "),
            Span::styled(self.badge.label(), style),
        ])
    }

    /// Columns the badge occupies
    pub fn width(&self) -> usize {
        self.icons.status(self.badge.icon()).width() + 1 + self.badge.label().width()
    }
}

impl Widget for StatusBadge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        buf.set_line(area.x, area.y, &self.line(), area.width);
    }
}

/// Card listing the three process badges and the module count
pub struct StatusCard<'a> {
    dashboard: &'a Dashboard,
    locale: Locale,
    icons: IconSet,
}

impl<'a> StatusCard<'a> {
    pub fn new(dashboard: &'a Dashboard, locale: Locale, icons: IconSet) -> Self {
        Self {
            dashboard,
            locale,
            icons,
        }
    }
}

impl Widget for StatusCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", label(self.locale, "status"));
        let block = styles::glass_block(false)
            .title(Line::from(Span::styled(title, styles::accent_bold())))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let modules_label = label(self.locale, "modules");
        let row_labels: Vec<&str> = BADGE_ROWS
            .iter()
            .map(|(_, key)| label(self.locale, key))
            .chain(std::iter::once(modules_label))
            .collect();
        let label_width = row_labels.iter().map(|l| l.width()).max().unwrap_or(0);

        let mut y = inner.y;
        for ((slot, _), row_label) in BADGE_ROWS.iter().zip(&row_labels) {
            if y >= inner.bottom() {
                return;
            }
            let Some(badge) = self.dashboard.badge(*slot) else {
                continue;
            };
            let x = render_label(buf, inner, y, row_label, label_width);
            let badge_area = Rect::new(x, y, inner.right().saturating_sub(x), 1);
            StatusBadge::new(badge, self.icons).render(badge_area, buf);
            y += 1;
        }

        if y < inner.bottom() {
            let x = render_label(buf, inner, y, modules_label, label_width);
            let count = Line::from(vec![
                Span::styled(self.icons.layers(), styles::accent()),
                Span::raw(" "),
                Span::styled(
                    self.dashboard.text(SlotId::ValModulesCount),
                    styles::text_bright_bold(),
                ),
                Span::raw("  "),
                Span::styled("[m]", styles::keybinding()),
            ]);
            buf.set_line(x, y, &count, inner.right().saturating_sub(x));
        }
    }
}

/// Draw a padded row label and return the x where its value starts
fn render_label(buf: &mut Buffer, inner: Rect, y: u16, text: &str, width: usize) -> u16 {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(text, styles::text_secondary()),
    ]);
    buf.set_line(inner.x, y, &line, inner.width);
    let width = u16::try_from(width).unwrap_or(u16::MAX);
    inner
        .x
        .saturating_add(1)
        .saturating_add(width)
        .saturating_add(2)
        .min(inner.right())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use zdash_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn loaded_dashboard(locale: Locale) -> Dashboard {
        let mut dashboard = Dashboard::new();
        let record = zdash_core::parse(
            "monitor_status=tracing\nzygote_64_status=crashed\ndaemon_64_status=weird\nmodules_count=2\n",
        );
        dashboard.apply_record(&record, locale);
        dashboard
    }

    #[test]
    fn test_badge_uses_class_icon_and_color() {
        let dashboard = loaded_dashboard(Locale::En);
        let badge = dashboard.badge(SlotId::ValMonitor).unwrap();

        let mut term = TestTerminal::with_size(20, 1);
        term.render_widget(StatusBadge::new(badge, icons()), term.area());

        assert!(term.line_contains(0, "✔ Tracing"));
        assert_eq!(term.buffer()[(0, 0)].fg, palette::STATUS_GREEN);
    }

    #[test]
    fn test_badge_width_counts_columns() {
        let mut dashboard = Dashboard::new();
        dashboard.update_badge(SlotId::ValDaemon64, Some("running"), Locale::Zh);
        let badge = dashboard.badge(SlotId::ValDaemon64).unwrap();

        // "✔" + space + "运行中" (three double-width glyphs)
        assert_eq!(StatusBadge::new(badge, icons()).width(), 1 + 1 + 6);
    }

    #[test]
    fn test_status_card_renders_all_badges() {
        let dashboard = loaded_dashboard(Locale::En);
        let mut term = TestTerminal::with_size(50, 6);

        term.render_widget(
            StatusCard::new(&dashboard, Locale::En, icons()),
            term.area(),
        );

        assert!(term.buffer_contains("Zygote Monitor"));
        assert!(term.buffer_contains("✔ Tracing"));
        assert!(term.buffer_contains("✖ Crashed"));
        // Unknown token: info icon, raw text
        assert!(term.buffer_contains("ℹ weird"));
        assert!(term.buffer_contains("2"));
    }

    #[test]
    fn test_status_card_placeholders_before_load() {
        let dashboard = Dashboard::new();
        let mut term = TestTerminal::with_size(50, 6);

        term.render_widget(
            StatusCard::new(&dashboard, Locale::En, icons()),
            term.area(),
        );

        assert!(term.buffer_contains("ℹ -"));
    }

    #[test]
    fn test_status_card_chinese_labels() {
        let dashboard = loaded_dashboard(Locale::Zh);
        let mut term = TestTerminal::with_size(50, 6);

        term.render_widget(
            StatusCard::new(&dashboard, Locale::Zh, icons()),
            term.area(),
        );

        assert!(term.buffer_contains(label(Locale::Zh, "zygote_monitor")));
        assert!(term.buffer_contains(label(Locale::Zh, "tracing")));
    }

    #[test]
    fn test_label_column_clamped_at_right_edge() {
        let area = Rect::new(u16::MAX - 12, 0, 12, 1);
        let mut buf = Buffer::empty(area);

        let x = render_label(&mut buf, area, 0, "Zygote Monitor", 14);
        assert_eq!(x, area.right());

        let x = render_label(&mut buf, area, 0, "Zygote Monitor", usize::MAX);
        assert_eq!(x, area.right());
    }

    #[test]
    fn test_status_card_narrower_than_labels() {
        let dashboard = loaded_dashboard(Locale::En);
        let mut term = TestTerminal::with_size(8, 6);

        term.render_widget(
            StatusCard::new(&dashboard, Locale::En, icons()),
            term.area(),
        );

        assert!(!term.buffer_contains("Tracing"));
    }
}
