/// Label used for inbound messages whose sender did not set a name.
pub const FALLBACK_PEER_LABEL: &str = "Peer";

/// Label used for the local echo when no display name is committed.
pub const FALLBACK_ME_LABEL: &str = "Me";

/// Who a bubble belongs to, for styling and alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Me,
    Peer,
}

/// One rendered chat message block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub role: Role,
    pub label: String,
    pub text: String,
}

impl Bubble {
    /// Builds a peer bubble, applying the wire-format defaults: a missing
    /// sender name becomes "Peer", a missing body becomes the empty string.
    pub fn from_peer(from_name: Option<String>, message: Option<String>) -> Self {
        Self {
            role: Role::Peer,
            label: from_name.unwrap_or_else(|| FALLBACK_PEER_LABEL.to_owned()),
            text: message.unwrap_or_default(),
        }
    }

    /// Builds the optimistic local echo for a sent message. An empty
    /// committed display name falls back to the literal "Me".
    pub fn local_echo(text: String, display_name: &str) -> Self {
        let label = if display_name.is_empty() {
            FALLBACK_ME_LABEL.to_owned()
        } else {
            display_name.to_owned()
        };
        Self {
            role: Role::Me,
            label,
            text,
        }
    }
}

/// Append-only, in-order list of bubbles. Never persisted or replayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageLog {
    bubbles: Vec<Bubble>,
}

impl MessageLog {
    pub fn push(&mut self, bubble: Bubble) {
        self.bubbles.push(bubble);
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn len(&self) -> usize {
        self.bubbles.len()
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_empty(&self) -> bool {
        self.bubbles.is_empty()
    }
}
