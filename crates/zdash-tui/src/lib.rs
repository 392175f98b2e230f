//! zdash-tui - Terminal UI for zygisk-dash
//!
//! Renders the dashboard held by a `zdash_app::Engine` and turns key presses
//! into messages for it.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
