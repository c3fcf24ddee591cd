//! Backend integration layer: the WebSocket channel to the local node.

mod link;

pub use link::{BackendHandle, BackendLink, LinkStartError};

/// Returns the backend module name for smoke checks.
pub fn module_name() -> &'static str {
    "backend"
}
