use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, BackendSignal, Key, KeyInput},
        message::Bubble,
        shell_state::{FocusField, ShellState},
    },
    protocol::BackendEvent,
};

use super::{
    connect_peer,
    contracts::{ActionSink, ShellOrchestrator},
    send_message,
};

/// Event-at-a-time shell orchestrator.
///
/// All state lives here and is touched only from the UI thread; backend
/// signals arrive as ordinary events, so no locking is needed.
pub struct DefaultShellOrchestrator<S>
where
    S: ActionSink,
{
    state: ShellState,
    sink: S,
}

impl<S> DefaultShellOrchestrator<S>
where
    S: ActionSink,
{
    pub fn new(sink: S) -> Self {
        Self {
            state: ShellState::new(),
            sink,
        }
    }

    fn handle_backend_signal(&mut self, signal: BackendSignal) {
        match signal {
            BackendSignal::Opened => self.state.session_mut().mark_open(),
            BackendSignal::Closed => self.state.session_mut().mark_closed(),
            BackendSignal::Event(event) => self.dispatch_backend_event(event),
        }
    }

    fn dispatch_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::PeerMessage { from_name, message } => {
                self.state.log_mut().push(Bubble::from_peer(from_name, message));
            }
            BackendEvent::Status { status } => {
                self.state.session_mut().set_status_text(status);
            }
            BackendEvent::Info { port, public_key } => {
                if let Some(port) = port {
                    self.state.session_mut().set_local_port(port);
                }
                if let Some(key) = public_key {
                    self.state.session_mut().set_public_key(key);
                }
            }
            BackendEvent::Unknown => {}
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        // The validation notice blocks nothing beyond the next key press.
        let had_notice = self.state.clear_notice();

        match key.key {
            Key::Esc => {
                if !had_notice {
                    self.state.stop();
                }
            }
            Key::Tab => self.state.focus_next(),
            Key::BackTab => self.state.focus_previous(),
            Key::Enter => self.handle_enter(key.shift),
            Key::Char(ch) => {
                self.state.focused_field_mut().insert_char(ch);
            }
            Key::Backspace => self.state.focused_field_mut().delete_char_before(),
            Key::Delete => self.state.focused_field_mut().delete_char_at(),
            Key::Left => self.state.focused_field_mut().move_cursor_left(),
            Key::Right => self.state.focused_field_mut().move_cursor_right(),
            Key::Home => self.state.focused_field_mut().move_cursor_home(),
            Key::End => self.state.focused_field_mut().move_cursor_end(),
        }
    }

    fn handle_enter(&mut self, shift: bool) {
        match self.state.focus() {
            FocusField::Compose => {
                // Shift+Enter keeps its multi-line meaning; plain Enter sends
                // and never inserts a newline.
                if shift {
                    self.state.focused_field_mut().insert_char('\n');
                } else {
                    self.send_current_message();
                }
            }
            FocusField::DisplayName => self.state.commit_display_name(),
            // Enter on the remote fields triggers connect, which commits the
            // display name as its first step.
            FocusField::RemoteIp | FocusField::RemotePort => self.connect_to_peer(),
        }
    }

    fn send_current_message(&mut self) {
        self.state.commit_display_name();

        let text = self.state.compose().text().to_owned();
        match send_message::prepare_send(&text, self.state.session().display_name()) {
            Ok(outcome) => {
                self.sink.submit(outcome.action);
                self.state.log_mut().push(outcome.echo);
                self.state.compose_mut().clear();
            }
            // Empty compose input is ignored without feedback.
            Err(send_message::SendMessageError::EmptyMessage) => {}
        }
    }

    fn connect_to_peer(&mut self) {
        self.state.commit_display_name();

        let ip = self.state.remote_ip_field().text().to_owned();
        let port = self.state.remote_port_field().text().to_owned();
        match connect_peer::prepare_connect(&ip, &port) {
            Ok(action) => self.sink.submit(action),
            Err(error) => self.state.set_notice(error.user_message().to_owned()),
        }
    }
}

impl<S> ShellOrchestrator for DefaultShellOrchestrator<S>
where
    S: ActionSink,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::Backend(signal) => self.handle_backend_signal(signal),
        }

        Ok(())
    }
}
