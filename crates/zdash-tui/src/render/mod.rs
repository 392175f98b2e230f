//! Main render/view function (View in TEA pattern)

use ratatui::{style::Style, widgets::Block, Frame};
use zdash_app::{AppState, SlotId, UiMode};
use zdash_core::label;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// This is a pure rendering function - it should not modify state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area);
    let icons = IconSet::new(state.settings.ui.icons);
    let locale = state.locale;
    let dashboard = &state.dashboard;

    let header = widgets::MainHeader::new(dashboard, locale, icons)
        .menu_open(state.ui_mode == UiMode::LanguageMenu);
    frame.render_widget(header, areas.header);

    let info = widgets::InfoCard::new(label(locale, "basic_info").to_string())
        .row(label(locale, "version"), dashboard.text(SlotId::PropVersion))
        .row(label(locale, "author"), dashboard.text(SlotId::PropAuthor))
        .row(label(locale, "root_impl"), dashboard.text(SlotId::ValRoot))
        .row(
            label(locale, "description"),
            dashboard.text(SlotId::PropDescription),
        );
    frame.render_widget(info, areas.info);

    let device = widgets::InfoCard::new(label(locale, "device_info").to_string())
        .row(label(locale, "kernel"), dashboard.text(SlotId::DeviceKernel))
        .row(label(locale, "sdk"), dashboard.text(SlotId::DeviceSdk))
        .row(label(locale, "abi"), dashboard.text(SlotId::DeviceAbi));
    frame.render_widget(device, areas.device);

    frame.render_widget(
        widgets::StatusCard::new(dashboard, locale, icons),
        areas.status,
    );

    let footer = widgets::Footer::new(locale, state.load_status)
        .refreshing(state.is_refreshing())
        .last_refresh(state.last_refresh)
        .last_error(state.last_error.as_deref());
    frame.render_widget(footer, areas.footer);

    match state.ui_mode {
        UiMode::Normal => {}
        UiMode::LanguageMenu => {
            let menu_area = widgets::LanguageMenu::area_within(area, areas.header);
            frame.render_widget(
                widgets::LanguageMenu::new(locale, state.language_cursor, icons),
                menu_area,
            );
        }
        UiMode::ModulesModal => {
            frame.render_widget(
                widgets::ModulesModal::new(
                    dashboard.modules(),
                    state.modules_scroll,
                    locale,
                    icons,
                ),
                area,
            );
        }
    }
}

#[cfg(test)]
mod tests;
