use anyhow::Result;

use crate::{
    domain::{events::AppEvent, shell_state::ShellState},
    protocol::ClientAction,
};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Outbound side of the channel. Fire-and-forget: no delivery confirmation
/// exists at this layer.
pub trait ActionSink {
    fn submit(&self, action: ClientAction);
}

impl<T: ActionSink + ?Sized> ActionSink for &T {
    fn submit(&self, action: ClientAction) {
        (*self).submit(action);
    }
}
