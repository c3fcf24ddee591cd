use std::cell::RefCell;

use anyhow::Result;

use crate::{
    infra::{config::AppConfig, contracts::ConfigAdapter},
    protocol::ClientAction,
    usecases::contracts::ActionSink,
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Records submitted actions instead of writing them to a channel.
#[derive(Debug, Default)]
pub struct RecordingActionSink {
    pub sent: RefCell<Vec<ClientAction>>,
}

impl ActionSink for RecordingActionSink {
    fn submit(&self, action: ClientAction) {
        self.sent.borrow_mut().push(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn recording_sink_captures_actions_in_order() {
        let sink = RecordingActionSink::default();
        sink.submit(ClientAction::ConnectPeer {
            ip: "10.0.0.5".to_owned(),
            port: 4000,
        });

        assert_eq!(sink.sent.borrow().len(), 1);
    }
}
