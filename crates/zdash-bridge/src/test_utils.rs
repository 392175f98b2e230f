//! Test utilities for bridge consumers
//!
//! Provides a scripted bridge that replays queued outcomes and records the
//! commands it was asked to run.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::exec::{CommandBridge, ExecResult};
use zdash_core::prelude::*;

/// A queued bridge outcome
#[derive(Debug, Clone)]
pub enum ScriptedOutcome {
    /// The command ran; return this result
    Result(ExecResult),
    /// The bridge itself failed with this message
    Error(String),
}

/// Bridge that replays scripted outcomes in order
///
/// When the queue is empty the last outcome is repeated, so a single
/// scripted result serves any number of refreshes.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBridge {
    outcomes: Arc<Mutex<VecDeque<ScriptedOutcome>>>,
    last: Arc<Mutex<Option<ScriptedOutcome>>>,
    commands: Arc<Mutex<Vec<String>>>,
}

impl ScriptedBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bridge that always returns `stdout` with errno 0
    pub fn with_stdout(stdout: &str) -> Self {
        Self::new().then_result(ExecResult::success(stdout))
    }

    /// Queue a result
    pub fn then_result(self, result: ExecResult) -> Self {
        self.push(ScriptedOutcome::Result(result));
        self
    }

    /// Queue a bridge error
    pub fn then_error(self, message: &str) -> Self {
        self.push(ScriptedOutcome::Error(message.to_string()));
        self
    }

    fn push(&self, outcome: ScriptedOutcome) {
        if let Ok(mut queue) = self.outcomes.lock() {
            queue.push_back(outcome);
        }
    }

    /// Commands issued so far, in order
    pub fn commands(&self) -> Vec<String> {
        self.commands
            .lock()
            .map(|c| c.clone())
            .unwrap_or_default()
    }

    fn next_outcome(&self) -> Option<ScriptedOutcome> {
        let next = self.outcomes.lock().ok()?.pop_front();
        let mut last = self.last.lock().ok()?;
        if let Some(outcome) = next {
            *last = Some(outcome);
        }
        last.clone()
    }
}

impl CommandBridge for ScriptedBridge {
    async fn exec(&self, command: &str) -> Result<ExecResult> {
        if let Ok(mut commands) = self.commands.lock() {
            commands.push(command.to_string());
        }

        match self.next_outcome() {
            Some(ScriptedOutcome::Result(result)) => Ok(result),
            Some(ScriptedOutcome::Error(message)) => Err(Error::bridge(message)),
            None => Err(Error::bridge("no scripted outcome")),
        }
    }
}
