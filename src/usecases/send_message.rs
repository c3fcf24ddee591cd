//! Use case for sending a chat message to the node.
//!
//! Validates the compose text and produces both the outbound action and the
//! optimistic local echo. The echo is unconditional: the node never
//! acknowledges delivery at this layer.

use crate::{domain::message::Bubble, protocol::ClientAction};

/// Result of a successful send: the frame for the channel and the bubble for
/// the local log. Both carry the same trimmed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub action: ClientAction,
    pub echo: Bubble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendMessageError {
    /// Compose text is empty after trimming. Silently ignored by the shell.
    EmptyMessage,
}

/// Builds the `send_message` action and its local echo.
///
/// `display_name` must be the already-committed session name; committing the
/// pending edit first is the caller's responsibility.
pub fn prepare_send(text: &str, display_name: &str) -> Result<SendOutcome, SendMessageError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(SendMessageError::EmptyMessage);
    }

    Ok(SendOutcome {
        action: ClientAction::SendMessage {
            message: text.to_owned(),
            display_name: display_name.to_owned(),
        },
        echo: Bubble::local_echo(text.to_owned(), display_name),
    })
}
