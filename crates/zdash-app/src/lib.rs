//! zdash-app - Application state and orchestration for zygisk-dash
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management, the dashboard view model, the Engine shared by the TUI and
//! headless frontends, and configuration loading.

pub mod actions;
pub mod config;
pub mod dashboard;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod report;
pub mod signals;
pub mod state;

// Re-export primary types
pub use dashboard::{BadgeSlot, Dashboard, LoadFailure, SlotId};
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use report::DashboardReport;
pub use state::{AppPhase, AppState, LoadStatus, UiMode};
