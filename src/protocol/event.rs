use serde::Deserialize;

const EVENT_DECODE_FAILED: &str = "PROTOCOL_EVENT_DECODE_FAILED";

/// Event frame received from the local node, discriminated by the `type` field.
///
/// Optional fields mirror the node's wire format: a `peer_message` may omit
/// the sender name, and an `info` frame carries whichever identity fields the
/// node currently knows.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackendEvent {
    PeerMessage {
        #[serde(default)]
        from_name: Option<String>,
        #[serde(default)]
        message: Option<String>,
    },
    Status {
        status: String,
    },
    Info {
        #[serde(default)]
        port: Option<u16>,
        #[serde(default)]
        public_key: Option<String>,
    },
    /// Frame kinds this client does not know. Dispatched as a no-op.
    #[serde(other)]
    Unknown,
}

/// Decodes one inbound text frame.
///
/// Malformed frames are a recoverable condition: they are logged with a
/// stable code and discarded, leaving the channel open.
pub fn decode_event(frame: &str) -> Option<BackendEvent> {
    match serde_json::from_str(frame) {
        Ok(event) => Some(event),
        Err(error) => {
            tracing::warn!(
                code = EVENT_DECODE_FAILED,
                error = %error,
                "discarding malformed inbound frame"
            );
            None
        }
    }
}
