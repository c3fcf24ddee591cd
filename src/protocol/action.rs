use serde::Serialize;

const ACTION_ENCODE_FAILED: &str = "PROTOCOL_ACTION_ENCODE_FAILED";

/// Control frame sent to the local node, discriminated by the `action` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ClientAction {
    SendMessage {
        message: String,
        display_name: String,
    },
    ConnectPeer {
        ip: String,
        port: u16,
    },
}

/// Serializes an action to a JSON text frame.
///
/// Returns `None` if serialization fails, which is logged and treated as a
/// dropped frame rather than an application error.
pub fn encode_action(action: &ClientAction) -> Option<String> {
    match serde_json::to_string(action) {
        Ok(frame) => Some(frame),
        Err(error) => {
            tracing::warn!(
                code = ACTION_ENCODE_FAILED,
                error = %error,
                "dropping unserializable outbound action"
            );
            None
        }
    }
}
