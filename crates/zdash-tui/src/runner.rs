//! Main TUI runner - entry point and event loop

use ratatui::DefaultTerminal;
use zdash_app::Engine;
use zdash_bridge::CommandBridge;
use zdash_core::prelude::*;

use crate::{event, render, terminal};

/// Run the dashboard until the user quits
///
/// Takes ownership of the engine; the initial fetch is started here.
/// Needs the multi-threaded tokio runtime.
pub async fn run<B>(mut engine: Engine<B>) -> Result<()>
where
    B: CommandBridge + Send + Sync + 'static,
{
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    engine.install_signal_handler();
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    terminal::restore();
    info!("Dashboard closed");

    result
}

/// Main event loop
fn run_loop<B>(terminal: &mut DefaultTerminal, engine: &mut Engine<B>) -> Result<()>
where
    B: CommandBridge + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Fetch results and signals
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        // Crossterm polling blocks; let the runtime move fetch tasks elsewhere
        if let Some(message) = tokio::task::block_in_place(event::poll)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
