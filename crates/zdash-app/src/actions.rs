//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::message::Message;
use crate::UpdateAction;
use zdash_bridge::CommandBridge;
use zdash_core::prelude::*;

/// Execute an action by spawning a background task
pub fn handle_action<B>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, bridge: Arc<B>)
where
    B: CommandBridge + Send + Sync + 'static,
{
    match action {
        UpdateAction::FetchProperties { command } => {
            tokio::spawn(async move {
                let msg = fetch_properties(bridge.as_ref(), &command).await;
                if msg_tx.send(msg).await.is_err() {
                    debug!("Message channel closed before fetch result was delivered");
                }
            });
        }
    }
}

/// Run `command` through the bridge and wrap the outcome as a message
///
/// A command that ran (any exit code) becomes `PropertiesFetched`; only a
/// failure of the bridge itself becomes `PropertiesFetchFailed`.
pub async fn fetch_properties<B>(bridge: &B, command: &str) -> Message
where
    B: CommandBridge + Sync,
{
    match bridge.exec(command).await {
        Ok(result) => Message::PropertiesFetched { result },
        Err(e) => {
            if e.is_recoverable() {
                warn!("Bridge failed for `{}`: {}", command, e);
            } else {
                error!("Bridge failed for `{}`: {:?}", command, e);
            }
            Message::PropertiesFetchFailed {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zdash_bridge::test_utils::ScriptedBridge;
    use zdash_bridge::ExecResult;

    #[tokio::test]
    async fn test_fetch_wraps_result() {
        let bridge = ScriptedBridge::with_stdout("name=x\n");
        let msg = fetch_properties(&bridge, "cat module.prop").await;

        match msg {
            Message::PropertiesFetched { result } => assert_eq!(result.stdout, "name=x\n"),
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(bridge.commands(), vec!["cat module.prop".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_nonzero_exit_is_still_fetched() {
        let bridge = ScriptedBridge::new().then_result(ExecResult::failure(1, "missing"));
        let msg = fetch_properties(&bridge, "cat nope").await;
        assert!(matches!(
            msg,
            Message::PropertiesFetched { result } if result.errno == 1
        ));
    }

    #[tokio::test]
    async fn test_fetch_bridge_error() {
        let bridge = ScriptedBridge::new().then_error("spawn failed");
        let msg = fetch_properties(&bridge, "cat x").await;
        assert!(matches!(
            msg,
            Message::PropertiesFetchFailed { error } if error.contains("spawn failed")
        ));
    }

    #[tokio::test]
    async fn test_handle_action_posts_result() {
        let (tx, mut rx) = mpsc::channel(4);
        let bridge = Arc::new(ScriptedBridge::with_stdout("name=x"));

        handle_action(
            UpdateAction::FetchProperties {
                command: "cat a".to_string(),
            },
            tx,
            bridge,
        );

        let msg = rx.recv().await.unwrap();
        assert!(matches!(msg, Message::PropertiesFetched { .. }));
    }
}
