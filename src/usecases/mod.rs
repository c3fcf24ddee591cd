//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod connect_peer;
pub mod context;
pub mod contracts;
pub mod send_message;
pub mod shell;

/// Returns the usecases module name for smoke checks.
pub fn module_name() -> &'static str {
    "usecases"
}
