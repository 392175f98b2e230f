//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use zdash_bridge::ExecResult;
use zdash_core::Locale;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Property Loading
    // ─────────────────────────────────────────────────────────
    /// Run the source command again and reload the dashboard
    Refresh,

    /// The bridge ran the source command (errno may still be non-zero)
    PropertiesFetched { result: ExecResult },

    /// The bridge itself failed
    PropertiesFetchFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Language
    // ─────────────────────────────────────────────────────────
    /// Switch the active locale and relabel every badge
    SetLocale(Locale),

    /// Open or close the language dropdown
    ToggleLanguageMenu,

    /// Close the language dropdown without changing anything
    CloseLanguageMenu,

    LanguageMenuUp,
    LanguageMenuDown,

    /// Apply the locale under the dropdown cursor
    ConfirmLanguage,

    // ─────────────────────────────────────────────────────────
    // Modules Modal
    // ─────────────────────────────────────────────────────────
    ShowModules,
    HideModules,
    ScrollModulesUp,
    ScrollModulesDown,
}
