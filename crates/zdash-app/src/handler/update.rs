//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;

use crate::dashboard::LoadFailure;
use crate::message::Message;
use crate::state::{AppPhase, AppState, LoadStatus, UiMode};
use zdash_bridge::ExecResult;
use zdash_core::prelude::*;
use zdash_core::SUPPORTED_LOCALES;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Property Loading
        // ─────────────────────────────────────────────────────────
        Message::Refresh => {
            state.refreshes_in_flight += 1;
            debug!("Refresh requested ({} in flight)", state.refreshes_in_flight);
            UpdateResult::action(UpdateAction::FetchProperties {
                command: state.settings.source.command.clone(),
            })
        }

        Message::PropertiesFetched { result } => handle_properties_fetched(state, result),

        Message::PropertiesFetchFailed { error } => {
            error!("Failed to load module properties: {}", error);
            finish_refresh(state);
            record_failure(state, LoadFailure::BridgeError, error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Language
        // ─────────────────────────────────────────────────────────
        Message::SetLocale(locale) => {
            let relabeled = state.set_locale(locale);
            debug!("Locale set to {} ({} badges relabeled)", locale, relabeled);
            if state.ui_mode == UiMode::LanguageMenu {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        Message::ToggleLanguageMenu => {
            if state.ui_mode == UiMode::LanguageMenu {
                state.ui_mode = UiMode::Normal;
            } else {
                state.language_cursor = SUPPORTED_LOCALES
                    .iter()
                    .position(|l| *l == state.locale)
                    .unwrap_or(0);
                state.ui_mode = UiMode::LanguageMenu;
            }
            UpdateResult::none()
        }

        Message::CloseLanguageMenu => {
            if state.ui_mode == UiMode::LanguageMenu {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        Message::LanguageMenuUp => {
            let len = SUPPORTED_LOCALES.len();
            state.language_cursor = (state.language_cursor + len - 1) % len;
            UpdateResult::none()
        }

        Message::LanguageMenuDown => {
            state.language_cursor = (state.language_cursor + 1) % SUPPORTED_LOCALES.len();
            UpdateResult::none()
        }

        Message::ConfirmLanguage => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::message(Message::SetLocale(state.highlighted_locale()))
        }

        // ─────────────────────────────────────────────────────────
        // Modules Modal
        // ─────────────────────────────────────────────────────────
        Message::ShowModules => {
            state.modules_scroll = 0;
            state.ui_mode = UiMode::ModulesModal;
            UpdateResult::none()
        }

        Message::HideModules => {
            if state.ui_mode == UiMode::ModulesModal {
                state.ui_mode = UiMode::Normal;
            }
            UpdateResult::none()
        }

        Message::ScrollModulesUp => {
            state.modules_scroll = state.modules_scroll.saturating_sub(1);
            UpdateResult::none()
        }

        Message::ScrollModulesDown => {
            let max = state.dashboard.modules().len().saturating_sub(1);
            state.modules_scroll = (state.modules_scroll + 1).min(max);
            UpdateResult::none()
        }
    }
}

/// Handle the bridge's answer to a fetch
///
/// Only a zero exit with non-empty stdout is parsed; anything else puts the
/// read-failure placeholder in the module name slot.
fn handle_properties_fetched(state: &mut AppState, result: ExecResult) -> UpdateResult {
    finish_refresh(state);

    match result.output() {
        Some(text) => {
            let record = zdash_core::parse(text);
            let changed = state.dashboard.apply_record(&record, state.locale);
            info!(
                "Loaded {} properties ({} slots changed)",
                record.len(),
                changed
            );
            state.load_status = LoadStatus::Loaded;
            state.last_error = None;

            let max = state.dashboard.modules().len().saturating_sub(1);
            state.modules_scroll = state.modules_scroll.min(max);
        }
        None => {
            let reason = if result.is_success() {
                "command produced no output".to_string()
            } else {
                format!("exit {}: {}", result.errno, result.stderr.trim())
            };
            warn!("Failed to read module properties: {}", reason);
            record_failure(state, LoadFailure::ReadFailed, reason);
        }
    }

    UpdateResult::none()
}

fn finish_refresh(state: &mut AppState) {
    state.refreshes_in_flight = state.refreshes_in_flight.saturating_sub(1);
    state.last_refresh = Some(Local::now());
}

fn record_failure(state: &mut AppState, failure: LoadFailure, reason: String) {
    state.dashboard.show_load_failure(failure);
    state.load_status = failure.into();
    state.last_error = Some(reason);
}
