//! Headless mode - one fetch, dashboard printed as JSON
//!
//! Useful for scripting and for checking the property source without a TTY.
//! The report shape matches `zdash_app::DashboardReport`:
//!
//! ```json
//! {
//!   "locale": "en",
//!   "status": "loaded",
//!   "last_refresh": "2026-01-02T13:14:15+08:00",
//!   "dashboard": { "texts": { "prop-name": "NeoZygisk", ... }, "badges": { ... }, ... }
//! }
//! ```

use std::io::Write;

use zdash_app::{Engine, LoadStatus};
use zdash_bridge::CommandBridge;
use zdash_core::prelude::*;

/// Run a single refresh and write the resulting dashboard to `out`
///
/// Returns the final load status so the caller can pick an exit code.
pub async fn run_headless<B, W>(mut engine: Engine<B>, mut out: W) -> Result<LoadStatus>
where
    B: CommandBridge + Send + Sync + 'static,
    W: Write,
{
    info!("Running headless refresh");

    engine.install_signal_handler();
    engine.start();
    engine.run_until_idle().await;

    let status = engine.state.load_status;
    let json = engine.report().to_json_pretty()?;
    writeln!(out, "{}", json).context("Failed to write headless report")?;
    out.flush().context("Failed to flush headless report")?;

    if status.is_failure() {
        warn!(
            "Headless refresh failed: {}",
            engine.state.last_error.as_deref().unwrap_or("unknown error")
        );
    } else {
        info!("Headless refresh finished: {:?}", status);
    }

    Ok(status)
}
