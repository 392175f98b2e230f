//! zdash - NeoZygisk status dashboard
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::process::ExitCode;

use clap::Parser;
use zdash_app::config::{self, Settings};
use zdash_app::Engine;
use zdash_bridge::ShellBridge;
use zdash_core::prelude::*;
use zygisk_dash::{run_headless, Args};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;
    zdash_core::logging::init()?;

    if args.init_config {
        return init_config(&args);
    }

    let mut settings = config::load_settings(args.config.as_deref())?;
    args.apply_overrides(&mut settings);

    let result = run(settings, args.headless).await;
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if e.is_fatal() {
            eprintln!("No usable terminal; `--headless` prints the dashboard as JSON instead");
        }
        if let Ok(log_file) = zdash_core::logging::get_current_log_file() {
            eprintln!("Logs: {}.*", log_file.display());
        }
    }

    info!("zygisk-dash exiting");
    result
}

async fn run(settings: Settings, headless: bool) -> Result<ExitCode> {
    let locale = settings.ui.locale.resolve();
    let bridge =
        ShellBridge::new(settings.source.shell.clone()).with_timeout(settings.source.timeout());
    info!(
        "Locale {}, shell {}, timeout {:?}",
        locale,
        bridge.shell(),
        bridge.timeout()
    );

    let engine = Engine::new(settings, locale, bridge);

    if headless {
        let status = run_headless(engine, std::io::stdout()).await?;
        return Ok(if status.is_failure() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        });
    }

    zdash_tui::run(engine).await?;
    Ok(ExitCode::SUCCESS)
}

fn init_config(args: &Args) -> Result<ExitCode> {
    let Some(path) = args.config.clone().or_else(config::default_config_path) else {
        return Err(Error::config("no config directory available; pass --config"));
    };

    if config::init_config_file(&path)? {
        println!("Wrote default config to {}", path.display());
    } else {
        println!("Config already exists at {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}
