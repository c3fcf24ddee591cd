//! Use case for asking the node to dial a remote peer.

use crate::protocol::ClientAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectPeerError {
    /// Remote address is empty after trimming.
    EmptyAddress,
    /// Port is not a base-10 integer in port range.
    InvalidPort,
}

impl ConnectPeerError {
    /// Message surfaced as the blocking validation notice.
    pub fn user_message(self) -> &'static str {
        match self {
            Self::EmptyAddress | Self::InvalidPort => "Enter a valid IP and port",
        }
    }
}

/// Validates the remote address fields and builds the `connect_peer` action.
///
/// The IP is trimmed but otherwise passed through verbatim: the node owns any
/// further address validation. The port must parse base-10; the `u16` parse
/// also bounds it to port range, the one check the wire type adds.
pub fn prepare_connect(ip: &str, port: &str) -> Result<ClientAction, ConnectPeerError> {
    let ip = ip.trim();
    if ip.is_empty() {
        return Err(ConnectPeerError::EmptyAddress);
    }

    let port: u16 = port
        .trim()
        .parse()
        .map_err(|_| ConnectPeerError::InvalidPort)?;

    Ok(ClientAction::ConnectPeer {
        ip: ip.to_owned(),
        port,
    })
}
