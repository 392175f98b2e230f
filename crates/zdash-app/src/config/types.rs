//! Configuration types for zygisk-dash
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `SourceSettings` - Where the property file comes from
//! - `UiSettings` - Locale and icon preferences

use std::time::Duration;

use serde::{Deserialize, Serialize};
use zdash_core::Locale;

/// Command that prints the module property file
pub const DEFAULT_SOURCE_COMMAND: &str = "cat /data/adb/neozygisk/module.prop";

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Property source settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceSettings {
    /// Command run through the bridge to obtain the property text
    #[serde(default = "default_command")]
    pub command: String,

    /// Shell used to interpret `command`
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Time allowed for one fetch, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            command: default_command(),
            shell: default_shell(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_command() -> String {
    DEFAULT_SOURCE_COMMAND.to_string()
}

fn default_shell() -> String {
    zdash_bridge::DEFAULT_SHELL.to_string()
}

fn default_timeout_ms() -> u64 {
    zdash_bridge::DEFAULT_TIMEOUT.as_millis() as u64
}

/// Initial locale selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocalePreference {
    /// Follow the host locale (`LC_ALL`, `LC_MESSAGES`, `LANG`)
    #[default]
    Auto,
    En,
    Zh,
}

impl LocalePreference {
    /// Resolve to a concrete locale, consulting the environment for `Auto`
    pub fn resolve(self) -> Locale {
        match self {
            LocalePreference::Auto => Locale::detect_from_env(),
            LocalePreference::En => Locale::En,
            LocalePreference::Zh => Locale::Zh,
        }
    }
}

impl From<Locale> for LocalePreference {
    fn from(locale: Locale) -> Self {
        match locale {
            Locale::En => LocalePreference::En,
            Locale::Zh => LocalePreference::Zh,
        }
    }
}

/// Icon rendering mode for the TUI.
///
/// Nerd Font glyphs need a patched font; Unicode symbols work everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default)]
    pub locale: LocalePreference,

    #[serde(default)]
    pub icons: IconMode,
}
