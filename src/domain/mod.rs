//! Domain layer: session state, message log, and input-field rules.

pub mod events;
pub mod message;
pub mod session;
pub mod shell_state;
pub mod text_field;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
