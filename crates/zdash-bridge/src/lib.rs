//! # zdash-bridge - Command Execution Bridge
//!
//! Runs privileged commands on behalf of the dashboard and returns their exit
//! code, stdout and stderr. The dashboard reads the module property file
//! through this bridge instead of touching the filesystem itself.
//!
//! Depends on [`zdash_core`] for error handling.
//!
//! ## Public API
//!
//! - [`CommandBridge`] - Async, single-shot command execution (Send futures)
//! - [`LocalCommandBridge`] - Same contract without the `Send` bound
//! - [`ExecResult`] - `errno`, `stdout`, `stderr` of one command
//! - [`ShellBridge`] - Runs commands through `sh -c` with a timeout
//!
//! With the `test-helpers` feature, [`test_utils::ScriptedBridge`] replays
//! canned outcomes for tests in downstream crates.

pub mod exec;
pub mod shell;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use exec::{CommandBridge, ExecResult, LocalCommandBridge};
pub use shell::{ShellBridge, DEFAULT_SHELL, DEFAULT_TIMEOUT};
