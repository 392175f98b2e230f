//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use zdash_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "zygisk-dash";

const DEFAULT_CONFIG: &str = r#"# zygisk-dash configuration

[source]
# Command run through the shell to print the module property file
command = "cat /data/adb/neozygisk/module.prop"
shell = "sh"
timeout_ms = 5000   # Give up on a refresh after this long

[ui]
locale = "auto"     # auto | en | zh (auto reads LC_ALL, LC_MESSAGES, LANG)
icons = "unicode"   # unicode | nerd_fonts
"#;

// ─────────────────────────────────────────────────────────────────────────────
// Settings Loading
// ─────────────────────────────────────────────────────────────────────────────

/// Default location: `<config_dir>/zygisk-dash/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit path, or the default location.
///
/// An explicit path that does not exist is an error. A missing default file,
/// or any file that can't be read or parsed, yields default settings.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Ok(load_settings_from(path))
        }
        None => match default_config_path() {
            Some(path) => Ok(load_settings_from(&path)),
            None => {
                debug!("No config directory on this platform, using defaults");
                Ok(Settings::default())
            }
        },
    }
}

/// Load settings from `config_path`
///
/// Returns default settings if file doesn't exist or can't be parsed.
pub fn load_settings_from(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config to `config_path`.
///
/// Returns `false` without touching anything if the file already exists.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        debug!("Config already present at {:?}", config_path);
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {:?}", parent))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;

    info!("Wrote default config to {:?}", config_path);
    Ok(true)
}
