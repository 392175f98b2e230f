//! Engine - shared orchestration for the TUI and headless frontends
//!
//! Owns the TEA state, the message channel and the command bridge. Frontends
//! feed it messages and read `state` back; background fetches post their
//! results into the same channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::report::DashboardReport;
use crate::signals;
use crate::state::AppState;
use zdash_bridge::CommandBridge;
use zdash_core::prelude::*;
use zdash_core::Locale;

/// Capacity of the unified message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Shared orchestration engine
pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    msg_rx: mpsc::Receiver<Message>,

    bridge: Arc<B>,
}

impl<B> Engine<B>
where
    B: CommandBridge + Send + Sync + 'static,
{
    /// Create an engine with the given settings, starting locale and bridge.
    ///
    /// Nothing is fetched until [`Engine::start`] or a `Refresh` message.
    pub fn new(settings: Settings, locale: Locale, bridge: B) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        Self {
            state: AppState::new(settings, locale),
            msg_tx,
            msg_rx,
            bridge: Arc::new(bridge),
        }
    }

    /// Forward SIGINT/SIGTERM into the message channel as `Quit`
    pub fn install_signal_handler(&self) {
        signals::spawn_signal_handler(self.msg_tx.clone());
    }

    /// Kick off the initial load
    pub fn start(&mut self) {
        info!(
            "Loading module properties with `{}`",
            self.state.settings.source.command
        );
        self.process_message(Message::Refresh);
    }

    /// Process a single message through the TEA update cycle.
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.bridge);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Process messages until no fetch is in flight or the app quits.
    pub async fn run_until_idle(&mut self) {
        while self.state.is_refreshing() && !self.should_quit() {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => {
                    warn!("Message channel closed while waiting for fetch");
                    break;
                }
            }
        }
    }

    /// Get a clone of the message sender for input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Serializable snapshot of the current dashboard
    pub fn report(&self) -> DashboardReport<'_> {
        DashboardReport::from_state(&self.state)
    }
}
