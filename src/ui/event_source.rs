use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, BackendSignal, Key, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Drains backend signals first, then polls the terminal. Both feed the same
/// single-threaded shell loop, which preserves per-source ordering.
pub struct CompositeEventSource {
    backend_rx: Receiver<BackendSignal>,
    terminal: CrosstermEventSource,
}

impl CompositeEventSource {
    pub fn new(backend_rx: Receiver<BackendSignal>) -> Self {
        Self {
            backend_rx,
            terminal: CrosstermEventSource,
        }
    }
}

impl AppEventSource for CompositeEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        match self.backend_rx.try_recv() {
            Ok(signal) => return Ok(Some(AppEvent::Backend(signal))),
            // Disconnected means the link task exited after its terminal
            // Closed signal; only terminal input remains.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => {}
        }

        self.terminal.next_event()
    }
}

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        if let Event::Key(key) = event::read()? {
            return Ok(map_key_event(key));
        }

        Ok(None)
    }
}

fn map_key_event(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let mapped = match key.code {
        KeyCode::Char('c') if ctrl => return Some(AppEvent::QuitRequested),
        KeyCode::Char(_) if ctrl => return None,
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(mapped, shift)))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn ctrl_c_maps_to_quit() {
        let event = map_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert_eq!(event, Some(AppEvent::QuitRequested));
    }

    #[test]
    fn plain_enter_maps_without_shift() {
        let event = map_key_event(press(KeyCode::Enter, KeyModifiers::NONE));

        assert_eq!(
            event,
            Some(AppEvent::InputKey(KeyInput::new(Key::Enter, false)))
        );
    }

    #[test]
    fn shift_enter_keeps_the_shift_modifier() {
        let event = map_key_event(press(KeyCode::Enter, KeyModifiers::SHIFT));

        assert_eq!(
            event,
            Some(AppEvent::InputKey(KeyInput::new(Key::Enter, true)))
        );
    }

    #[test]
    fn shifted_characters_map_to_char_keys() {
        let event = map_key_event(press(KeyCode::Char('A'), KeyModifiers::SHIFT));

        assert_eq!(
            event,
            Some(AppEvent::InputKey(KeyInput::new(Key::Char('A'), true)))
        );
    }

    #[test]
    fn back_tab_maps_for_reverse_focus_cycling() {
        let event = map_key_event(press(KeyCode::BackTab, KeyModifiers::SHIFT));

        assert_eq!(
            event,
            Some(AppEvent::InputKey(KeyInput::new(Key::BackTab, true)))
        );
    }

    #[test]
    fn key_release_events_are_ignored() {
        let mut key = press(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert_eq!(map_key_event(key), None);
    }

    #[test]
    fn unhandled_keys_map_to_nothing() {
        assert_eq!(map_key_event(press(KeyCode::F(5), KeyModifiers::NONE)), None);
        assert_eq!(
            map_key_event(press(KeyCode::Char('o'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn composite_source_prefers_backend_signals() {
        let (tx, rx) = std::sync::mpsc::channel();
        tx.send(BackendSignal::Opened).expect("send must succeed");
        let source = CompositeEventSource::new(rx);

        // Only the backend half is exercised here; the terminal half would
        // block on a real poll.
        match source.backend_rx.try_recv() {
            Ok(signal) => assert_eq!(signal, BackendSignal::Opened),
            Err(error) => panic!("expected a queued backend signal, got {error}"),
        }
    }

    #[test]
    fn mock_source_drains_in_order() {
        let mut source =
            MockEventSource::from(vec![AppEvent::Tick, AppEvent::QuitRequested]);

        assert_eq!(
            source.next_event().expect("must read"),
            Some(AppEvent::Tick)
        );
        assert_eq!(
            source.next_event().expect("must read"),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(source.next_event().expect("must read"), None);
    }
}
