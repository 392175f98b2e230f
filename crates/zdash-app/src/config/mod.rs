//! Configuration file parsing for zygisk-dash
//!
//! Supports `config.toml` under the user config directory
//! (`~/.config/zygisk-dash/config.toml` on Linux) or an explicit path.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, load_settings_from, CONFIG_FILENAME,
};
pub use types::*;
