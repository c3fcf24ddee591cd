use crate::protocol::BackendEvent;

/// One unit of work for the shell loop: a terminal key, a backend signal,
/// or a poll timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Tick,
    QuitRequested,
    InputKey(KeyInput),
    Backend(BackendSignal),
}

/// Lifecycle and traffic signals from the channel to the local node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendSignal {
    /// Handshake completed; the channel is open.
    Opened,
    /// The channel terminated, locally or remotely. Terminal: no signal
    /// follows this one.
    Closed,
    /// A decoded inbound frame.
    Event(BackendEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    Tab,
    BackTab,
    Esc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub key: Key,
    pub shift: bool,
}

impl KeyInput {
    pub fn new(key: Key, shift: bool) -> Self {
        Self { key, shift }
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn plain(key: Key) -> Self {
        Self { key, shift: false }
    }
}
