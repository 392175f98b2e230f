//! Shell-backed command bridge
//!
//! Runs commands through `<shell> -c <command>`, the same way a root manager
//! WebUI bridge executes them on the device.

use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;
use tokio::time::timeout;

use crate::exec::{CommandBridge, ExecResult};
use zdash_core::prelude::*;

/// Default shell used to interpret commands
pub const DEFAULT_SHELL: &str = "sh";

/// Default time allowed for a single command
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Exit code reported when the process was terminated by a signal
const SIGNAL_ERRNO: i32 = -1;

/// Bridge that spawns a local shell for every command
#[derive(Debug, Clone)]
pub struct ShellBridge {
    shell: String,
    timeout: Duration,
}

impl Default for ShellBridge {
    fn default() -> Self {
        Self::new(DEFAULT_SHELL)
    }
}

impl ShellBridge {
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn shell(&self) -> &str {
        &self.shell
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn run(&self, command: &str) -> Result<ExecResult> {
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| Error::bridge_spawn(format!("{}: {}", self.shell, e)))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !stderr.is_empty() {
            debug!("bridge stderr: {}", stderr.trim_end());
        }

        Ok(ExecResult {
            errno: output.status.code().unwrap_or(SIGNAL_ERRNO),
            stdout,
            stderr,
        })
    }
}

impl CommandBridge for ShellBridge {
    async fn exec(&self, command: &str) -> Result<ExecResult> {
        let start = Instant::now();
        debug!("bridge exec: {}", command);

        let result = timeout(self.timeout, self.run(command))
            .await
            .map_err(|_| Error::BridgeTimeout {
                timeout: self.timeout,
            })??;

        debug!(
            "bridge exec finished with errno {} in {:?}",
            result.errno,
            start.elapsed()
        );
        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_exec_captures_stdout() {
        let bridge = ShellBridge::default();
        let result = bridge.exec("printf 'name=NeoZygisk\\n'").await.unwrap();
        assert_eq!(result.errno, 0);
        assert_eq!(result.stdout, "name=NeoZygisk\n");
    }

    #[tokio::test]
    async fn test_exec_reports_exit_code_and_stderr() {
        let bridge = ShellBridge::default();
        let result = bridge.exec("echo oops >&2; exit 3").await.unwrap();
        assert_eq!(result.errno, 3);
        assert_eq!(result.stderr.trim(), "oops");
        assert!(result.output().is_none());
    }

    #[tokio::test]
    async fn test_missing_shell_is_spawn_error() {
        let bridge = ShellBridge::new("/nonexistent/zdash-shell");
        let err = bridge.exec("true").await.unwrap_err();
        assert!(matches!(err, Error::BridgeSpawn { .. }));
    }

    #[tokio::test]
    async fn test_timeout() {
        let bridge = ShellBridge::default().with_timeout(Duration::from_millis(50));
        let err = bridge.exec("sleep 5").await.unwrap_err();
        assert!(matches!(err, Error::BridgeTimeout { .. }));
    }

    #[test]
    fn test_defaults() {
        let bridge = ShellBridge::default();
        assert_eq!(bridge.shell(), "sh");
        assert_eq!(bridge.timeout(), DEFAULT_TIMEOUT);
    }
}
