//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use zdash_app::config::{LocalePreference, Settings};
use zdash_core::Locale;

/// Terminal status dashboard for the NeoZygisk module
#[derive(Parser, Debug, Default)]
#[command(name = "zdash", version)]
#[command(about = "Terminal status dashboard for the NeoZygisk module", long_about = None)]
pub struct Args {
    /// Config file (defaults to <config dir>/zygisk-dash/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Command that prints module.prop
    #[arg(long, value_name = "CMD")]
    pub command: Option<String>,

    /// Display language: auto, en or zh
    #[arg(long, value_name = "LOCALE", value_parser = parse_locale_preference)]
    pub locale: Option<LocalePreference>,

    /// Fetch once and print the dashboard as JSON
    #[arg(long)]
    pub headless: bool,

    /// Write a commented default config file and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Flags take precedence over values from the config file
    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(command) = &self.command {
            settings.source.command = command.clone();
        }
        if let Some(locale) = self.locale {
            settings.ui.locale = locale;
        }
    }
}

fn parse_locale_preference(value: &str) -> Result<LocalePreference, String> {
    if value.eq_ignore_ascii_case("auto") {
        return Ok(LocalePreference::Auto);
    }
    Locale::parse(value)
        .map(LocalePreference::from)
        .ok_or_else(|| format!("unsupported locale '{}' (expected auto, en or zh)", value))
}
