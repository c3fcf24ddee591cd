use std::sync::mpsc::Sender;

use futures::{SinkExt, StreamExt};
use tokio::{
    runtime::Runtime,
    sync::{mpsc as tokio_mpsc, watch},
};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::{
    domain::events::BackendSignal,
    protocol::{self, ClientAction},
    usecases::contracts::ActionSink,
};

const LINK_STARTED: &str = "BACKEND_LINK_STARTED";
const LINK_STOPPED: &str = "BACKEND_LINK_STOPPED";
const LINK_CONNECT_FAILED: &str = "BACKEND_LINK_CONNECT_FAILED";
const LINK_READ_FAILED: &str = "BACKEND_LINK_READ_FAILED";
const LINK_WRITE_FAILED: &str = "BACKEND_LINK_WRITE_FAILED";
const LINK_SIGNAL_SEND_FAILED: &str = "BACKEND_LINK_SIGNAL_SEND_FAILED";

/// The single channel to the local node.
///
/// One task on the runtime owns the socket: it forwards decoded inbound
/// frames as [`BackendSignal`]s to the UI thread and drains outbound actions
/// from the [`BackendHandle`]. The channel is never reopened; after a
/// `Closed` signal the task exits.
#[derive(Debug)]
pub struct BackendLink {
    stop_tx: Option<watch::Sender<bool>>,
}

/// Fire-and-forget sender half handed to the shell orchestrator.
#[derive(Debug, Clone)]
pub struct BackendHandle {
    action_tx: tokio_mpsc::UnboundedSender<ClientAction>,
}

impl BackendLink {
    pub fn start(
        runtime: &Runtime,
        url: String,
        signal_tx: Sender<BackendSignal>,
    ) -> Result<(Self, BackendHandle), LinkStartError> {
        if url.is_empty() {
            return Err(LinkStartError::EmptyUrl);
        }

        let (action_tx, action_rx) = tokio_mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(false);
        runtime.spawn(run_link(url, signal_tx, action_rx, stop_rx));

        tracing::info!(code = LINK_STARTED, "backend link task started");

        Ok((
            Self {
                stop_tx: Some(stop_tx),
            },
            BackendHandle { action_tx },
        ))
    }
}

impl Drop for BackendLink {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
            tracing::info!(code = LINK_STOPPED, "backend link shutdown signal sent");
        }
    }
}

impl ActionSink for BackendHandle {
    /// Queues an action for the write half. Fire-and-forget: there is no
    /// completion callback, and a dropped receiver means the link already
    /// closed, which the UI learns via the `Closed` signal.
    fn submit(&self, action: ClientAction) {
        let _ = self.action_tx.send(action);
    }
}

async fn run_link(
    url: String,
    signal_tx: Sender<BackendSignal>,
    mut action_rx: tokio_mpsc::UnboundedReceiver<ClientAction>,
    mut stop_rx: watch::Receiver<bool>,
) {
    let stream = match connect_async(url.as_str()).await {
        Ok((stream, _response)) => stream,
        Err(error) => {
            tracing::warn!(
                code = LINK_CONNECT_FAILED,
                url = %url,
                error = %error,
                "backend link handshake failed"
            );
            send_signal(&signal_tx, BackendSignal::Closed);
            return;
        }
    };

    send_signal(&signal_tx, BackendSignal::Opened);
    let (mut write, mut read) = stream.split();

    loop {
        tokio::select! {
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    let _ = write.send(Message::Close(None)).await;
                    return;
                }
            }
            action = action_rx.recv() => {
                let Some(action) = action else { return };
                let Some(frame) = protocol::encode_action(&action) else { continue };
                if let Err(error) = write.send(Message::Text(frame.into())).await {
                    tracing::warn!(
                        code = LINK_WRITE_FAILED,
                        error = %error,
                        "backend link send failed; closing channel"
                    );
                    send_signal(&signal_tx, BackendSignal::Closed);
                    return;
                }
            }
            frame = read.next() => {
                match frame {
                    Some(Ok(Message::Text(text))) => {
                        if let Some(event) = protocol::decode_event(text.as_str()) {
                            send_signal(&signal_tx, BackendSignal::Event(event));
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => {
                        send_signal(&signal_tx, BackendSignal::Closed);
                        return;
                    }
                    // Ping/pong and binary frames carry no protocol content.
                    Some(Ok(_)) => {}
                    Some(Err(error)) => {
                        tracing::warn!(
                            code = LINK_READ_FAILED,
                            error = %error,
                            "backend link read failed; closing channel"
                        );
                        send_signal(&signal_tx, BackendSignal::Closed);
                        return;
                    }
                }
            }
        }
    }
}

fn send_signal(signal_tx: &Sender<BackendSignal>, signal: BackendSignal) {
    if let Err(error) = signal_tx.send(signal) {
        tracing::warn!(
            code = LINK_SIGNAL_SEND_FAILED,
            error = %error,
            "backend link failed to deliver signal to the shell"
        );
    }
}

#[derive(Debug)]
pub enum LinkStartError {
    EmptyUrl,
}

impl std::fmt::Display for LinkStartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUrl => f.write_str("backend url is empty"),
        }
    }
}

impl std::error::Error for LinkStartError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_rejects_empty_url() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .build()
            .expect("runtime must build");
        let (signal_tx, _signal_rx) = std::sync::mpsc::channel();

        let result = BackendLink::start(&runtime, String::new(), signal_tx);

        assert!(matches!(result, Err(LinkStartError::EmptyUrl)));
    }

    #[test]
    fn unreachable_backend_yields_terminal_closed_signal() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .expect("runtime must build");
        let (signal_tx, signal_rx) = std::sync::mpsc::channel();

        // Port 9 on localhost is expected to refuse the connection.
        let (_link, _handle) =
            BackendLink::start(&runtime, "ws://127.0.0.1:9/ws".to_owned(), signal_tx)
                .expect("link must start");

        let signal = signal_rx
            .recv_timeout(std::time::Duration::from_secs(5))
            .expect("a closed signal must arrive");
        assert_eq!(signal, BackendSignal::Closed);
    }

    #[test]
    fn handle_submit_is_fire_and_forget_after_link_drop() {
        let (action_tx, action_rx) = tokio_mpsc::unbounded_channel();
        let handle = BackendHandle { action_tx };
        drop(action_rx);

        // Must not panic or block even though the receiver is gone.
        handle.submit(ClientAction::SendMessage {
            message: "hi".to_owned(),
            display_name: String::new(),
        });
    }
}
