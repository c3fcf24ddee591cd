//! Wire protocol: JSON text frames exchanged with the local node.

mod action;
mod event;

pub use action::{encode_action, ClientAction};
pub use event::{decode_event, BackendEvent};

/// Returns the protocol module name for smoke checks.
pub fn module_name() -> &'static str {
    "protocol"
}
