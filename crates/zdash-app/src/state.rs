//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::config::Settings;
use crate::dashboard::{Dashboard, LoadFailure};
use zdash_core::{Locale, SUPPORTED_LOCALES};

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Dashboard cards
    #[default]
    Normal,

    /// Language dropdown open over the dashboard
    LanguageMenu,

    /// Running-module list shown in a modal
    ModulesModal,
}

/// Outcome of the most recent completed load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    /// Nothing has completed yet
    #[default]
    Pending,
    Loaded,
    ReadFailed,
    BridgeError,
}

impl From<LoadFailure> for LoadStatus {
    fn from(failure: LoadFailure) -> Self {
        match failure {
            LoadFailure::ReadFailed => LoadStatus::ReadFailed,
            LoadFailure::BridgeError => LoadStatus::BridgeError,
        }
    }
}

impl LoadStatus {
    pub fn is_failure(self) -> bool {
        matches!(self, LoadStatus::ReadFailed | LoadStatus::BridgeError)
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Active locale; every label lookup goes through it
    pub locale: Locale,

    pub dashboard: Dashboard,

    pub ui_mode: UiMode,

    pub phase: AppPhase,

    /// Index into `SUPPORTED_LOCALES` while the language menu is open
    pub language_cursor: usize,

    /// Fetches issued but not yet answered
    pub refreshes_in_flight: usize,

    /// When the last fetch completed, successfully or not
    pub last_refresh: Option<DateTime<Local>>,

    pub load_status: LoadStatus,

    /// Diagnostic from the last failed load
    pub last_error: Option<String>,

    /// First visible row of the modules modal
    pub modules_scroll: usize,
}

impl AppState {
    pub fn new(settings: Settings, locale: Locale) -> Self {
        Self {
            settings,
            locale,
            dashboard: Dashboard::new(),
            ui_mode: UiMode::Normal,
            phase: AppPhase::Running,
            language_cursor: locale_index(locale),
            refreshes_in_flight: 0,
            last_refresh: None,
            load_status: LoadStatus::Pending,
            last_error: None,
            modules_scroll: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshes_in_flight > 0
    }

    /// Switch locale and relabel badges. Returns the number of badges changed.
    pub fn set_locale(&mut self, locale: Locale) -> usize {
        self.language_cursor = locale_index(locale);
        if self.locale == locale {
            return 0;
        }
        self.locale = locale;
        self.dashboard.relabel(locale)
    }

    /// Locale under the language menu cursor
    pub fn highlighted_locale(&self) -> Locale {
        SUPPORTED_LOCALES
            .get(self.language_cursor)
            .copied()
            .unwrap_or_default()
    }
}

fn locale_index(locale: Locale) -> usize {
    SUPPORTED_LOCALES
        .iter()
        .position(|l| *l == locale)
        .unwrap_or(0)
}
