//! zygisk-dash - terminal status dashboard for the NeoZygisk module
//!
//! The binary wires CLI flags into settings, builds a shell bridge and hands
//! an `Engine` to either the TUI or the headless JSON runner.

pub mod cli;
pub mod headless;

pub use cli::Args;
pub use headless::run_headless;
