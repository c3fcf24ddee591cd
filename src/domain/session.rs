//! Session state reflected from the channel to the local node.

/// Status text shown once the channel handshake completes.
pub const STATUS_CONNECTED: &str = "Connected to local peer";

/// Status text shown when the channel terminates.
pub const STATUS_DISCONNECTED: &str = "Disconnected";

/// Status text shown before the handshake completes.
pub const STATUS_CONNECTING: &str = "Connecting to local peer...";

/// Number of public-key characters shown before the ellipsis.
const PUBLIC_KEY_VISIBLE_CHARS: usize = 30;

/// Lifecycle of the one channel this process ever opens.
///
/// `Closed` is terminal: there is no reconnect, recovery requires restarting
/// the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkStatus {
    #[default]
    Connecting,
    Open,
    Closed,
}

impl LinkStatus {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Connecting => "LINK_CONNECTING",
            Self::Open => "LINK_OPEN",
            Self::Closed => "LINK_CLOSED",
        }
    }
}

/// Per-process session state. Reset on restart; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    link: LinkStatus,
    display_name: String,
    status_text: String,
    local_port: Option<u16>,
    public_key: Option<String>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            link: LinkStatus::Connecting,
            display_name: String::new(),
            status_text: STATUS_CONNECTING.to_owned(),
            local_port: None,
            public_key: None,
        }
    }
}

impl SessionState {
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn link(&self) -> LinkStatus {
        self.link
    }

    /// Marks the channel open. Ignored once the channel has closed: `Closed`
    /// never transitions back to `Open`.
    pub fn mark_open(&mut self) {
        if self.link == LinkStatus::Closed {
            return;
        }
        self.link = LinkStatus::Open;
        self.status_text = STATUS_CONNECTED.to_owned();
    }

    pub fn mark_closed(&mut self) {
        self.link = LinkStatus::Closed;
        self.status_text = STATUS_DISCONNECTED.to_owned();
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Stores the committed display name. Callers pass the already-trimmed
    /// value; an empty string is a valid (anonymous) name.
    pub fn set_display_name(&mut self, name: String) {
        self.display_name = name;
    }

    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// Overwrites the status text verbatim with a node-provided string.
    pub fn set_status_text(&mut self, status: String) {
        self.status_text = status;
    }

    pub fn local_port(&self) -> Option<u16> {
        self.local_port
    }

    pub fn set_local_port(&mut self, port: u16) {
        self.local_port = Some(port);
    }

    pub fn set_public_key(&mut self, key: String) {
        self.public_key = Some(key);
    }

    /// Returns the public key truncated for display. The full key is never
    /// shown in the UI.
    pub fn truncated_public_key(&self) -> Option<String> {
        self.public_key.as_deref().map(truncate_public_key)
    }
}

fn truncate_public_key(key: &str) -> String {
    let prefix: String = key.chars().take(PUBLIC_KEY_VISIBLE_CHARS).collect();
    format!("{prefix}...")
}
