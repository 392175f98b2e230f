//! Command bridge contract
//!
//! The dashboard never reads files directly. It asks a bridge to run a
//! command and gets back exit code, stdout and stderr in one shot.

use serde::Serialize;
use zdash_core::prelude::*;

/// Outcome of a single bridge command
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecResult {
    /// Exit code; `0` means success, `-1` means killed by a signal
    pub errno: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecResult {
    /// Successful result carrying `stdout`
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            errno: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    /// Failed result with a diagnostic on stderr
    pub fn failure(errno: i32, stderr: impl Into<String>) -> Self {
        Self {
            errno,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    /// True when the command exited with `0`
    pub fn is_success(&self) -> bool {
        self.errno == 0
    }

    /// Stdout, if the command succeeded and produced any
    pub fn output(&self) -> Option<&str> {
        (self.is_success() && !self.stdout.is_empty()).then_some(self.stdout.as_str())
    }
}

/// Host command-execution bridge
///
/// `Err` is reserved for the bridge itself failing (spawn error, timeout);
/// a command that ran and exited non-zero is an `Ok` with `errno != 0`.
#[trait_variant::make(CommandBridge: Send)]
pub trait LocalCommandBridge {
    /// Run `command` and wait for it to finish
    async fn exec(&self, command: &str) -> Result<ExecResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_output() {
        let result = ExecResult::success("name=x\n");
        assert!(result.is_success());
        assert_eq!(result.output(), Some("name=x\n"));
    }

    #[test]
    fn test_empty_stdout_has_no_output() {
        let result = ExecResult::success("");
        assert!(result.is_success());
        assert_eq!(result.output(), None);
    }

    #[test]
    fn test_failure_has_no_output() {
        let result = ExecResult {
            errno: 1,
            stdout: "partial".to_string(),
            stderr: "cat: No such file or directory".to_string(),
        };
        assert!(!result.is_success());
        assert_eq!(result.output(), None);
    }
}
