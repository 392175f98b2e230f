//! Modal listing the modules currently loaded by the daemon

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use zdash_core::{label, Locale};

use super::modal_overlay;
use crate::theme::{icons::IconSet, styles};

const MODAL_WIDTH: u16 = 50;
/// Visible list rows; borders and the hint row come on top
const MAX_VISIBLE_ROWS: u16 = 12;

pub struct ModulesModal<'a> {
    modules: &'a [String],
    scroll: usize,
    locale: Locale,
    icons: IconSet,
}

impl<'a> ModulesModal<'a> {
    pub fn new(modules: &'a [String], scroll: usize, locale: Locale, icons: IconSet) -> Self {
        Self {
            modules,
            scroll,
            locale,
            icons,
        }
    }
}

impl Widget for ModulesModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = (self.modules.len().max(1) as u16).min(MAX_VISIBLE_ROWS);
        // Borders + list + blank + hint
        let height = rows + 4;

        let modal = modal_overlay::prepare_modal(buf, area, MODAL_WIDTH, height, true);
        let title = format!(
            " {} ({}) ",
            label(self.locale, "modules_list"),
            self.modules.len()
        );
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.modules.is_empty() {
            let line = Line::from(Span::styled(
                format!(" {}", label(self.locale, "no_modules")),
                styles::text_muted(),
            ));
            buf.set_line(inner.x, inner.y, &line, inner.width);
        } else {
            let visible = self
                .modules
                .iter()
                .enumerate()
                .skip(self.scroll)
                .take(rows as usize);
            for (row, (index, module)) in visible.enumerate() {
                let line = Line::from(vec![
                    Span::styled(format!(" {:>2}", index + 1), styles::text_muted()),
                    Span::raw(" "),
                    Span::styled(self.icons.chevron_right(), styles::accent()),
                    Span::raw(" "),
                    Span::styled(module.as_str(), styles::text_primary()),
                ]);
                buf.set_line(inner.x, inner.y + row as u16, &line, inner.width);
            }
        }

        let hint = Line::from(vec![
            Span::styled(" [Esc] ", styles::keybinding()),
            Span::styled(label(self.locale, "close"), styles::text_muted()),
        ]);
        let hint_y = inner.bottom().saturating_sub(1);
        buf.set_line(inner.x, hint_y, &hint, inner.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use zdash_app::config::IconMode;

    fn icons() -> IconSet {
        IconSet::new(IconMode::Unicode)
    }

    fn modules(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_lists_modules_with_count() {
        let list = modules(&["a", "b", "c"]);
        let mut term = TestTerminal::new();

        term.render_widget(ModulesModal::new(&list, 0, Locale::En, icons()), term.area());

        assert!(term.buffer_contains("Running Modules (3)"));
        assert!(term.buffer_contains(" 1 › a"));
        assert!(term.buffer_contains(" 3 › c"));
        assert!(term.buffer_contains("[Esc] Close"));
    }

    #[test]
    fn test_empty_list_message() {
        let mut term = TestTerminal::new();

        term.render_widget(ModulesModal::new(&[], 0, Locale::En, icons()), term.area());

        assert!(term.buffer_contains("No modules loaded"));
    }

    #[test]
    fn test_scroll_skips_leading_entries() {
        let names: Vec<String> = (1..=20).map(|i| format!("mod{:02}", i)).collect();
        let mut term = TestTerminal::new();

        term.render_widget(ModulesModal::new(&names, 5, Locale::En, icons()), term.area());

        assert!(!term.buffer_contains("mod05"));
        assert!(term.buffer_contains("mod06"));
        assert!(term.buffer_contains("mod17"));
        assert!(!term.buffer_contains("mod18"));
    }
}
