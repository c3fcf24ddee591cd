use super::{message::MessageLog, session::SessionState, text_field::TextField};

/// Which input field currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    #[default]
    Compose,
    DisplayName,
    RemoteIp,
    RemotePort,
}

impl FocusField {
    pub fn next(self) -> Self {
        match self {
            Self::Compose => Self::DisplayName,
            Self::DisplayName => Self::RemoteIp,
            Self::RemoteIp => Self::RemotePort,
            Self::RemotePort => Self::Compose,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Compose => Self::RemotePort,
            Self::DisplayName => Self::Compose,
            Self::RemoteIp => Self::DisplayName,
            Self::RemotePort => Self::RemoteIp,
        }
    }
}

/// Whole-shell state: the session record, the message log, the four input
/// fields, and transient UI concerns (focus, validation notice).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    session: SessionState,
    log: MessageLog,
    compose: TextField,
    display_name_field: TextField,
    remote_ip_field: TextField,
    remote_port_field: TextField,
    focus: FocusField,
    notice: Option<String>,
}

impl ShellState {
    pub fn new() -> Self {
        Self {
            running: true,
            ..Self::default()
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    pub fn log(&self) -> &MessageLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    pub fn compose(&self) -> &TextField {
        &self.compose
    }

    pub fn compose_mut(&mut self) -> &mut TextField {
        &mut self.compose
    }

    pub fn display_name_field(&self) -> &TextField {
        &self.display_name_field
    }

    pub fn remote_ip_field(&self) -> &TextField {
        &self.remote_ip_field
    }

    pub fn remote_port_field(&self) -> &TextField {
        &self.remote_port_field
    }

    pub fn focus(&self) -> FocusField {
        self.focus
    }

    /// Moves focus to the next field. Leaving the display-name field commits
    /// the pending edit, mirroring a blur event.
    pub fn focus_next(&mut self) {
        self.move_focus(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.move_focus(self.focus.previous());
    }

    fn move_focus(&mut self, target: FocusField) {
        if self.focus == FocusField::DisplayName && target != FocusField::DisplayName {
            self.commit_display_name();
        }
        self.focus = target;
    }

    /// Returns the field that currently has focus, for editing keys.
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            FocusField::Compose => &mut self.compose,
            FocusField::DisplayName => &mut self.display_name_field,
            FocusField::RemoteIp => &mut self.remote_ip_field,
            FocusField::RemotePort => &mut self.remote_port_field,
        }
    }

    /// Commits the display name: trims the field and stores the trimmed
    /// value, or the empty string. Never stores an untrimmed name.
    pub fn commit_display_name(&mut self) {
        let name = self.display_name_field.text().trim().to_owned();
        self.session.set_display_name(name);
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn set_notice(&mut self, notice: String) {
        self.notice = Some(notice);
    }

    /// Dismisses the validation notice. Returns true if one was showing.
    pub fn clear_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_running_with_compose_focus() {
        let state = ShellState::new();

        assert!(state.is_running());
        assert_eq!(state.focus(), FocusField::Compose);
        assert!(state.log().is_empty());
    }

    #[test]
    fn stop_halts_the_shell() {
        let mut state = ShellState::new();
        state.stop();

        assert!(!state.is_running());
    }

    #[test]
    fn focus_cycles_through_all_fields_and_back() {
        let mut state = ShellState::new();

        state.focus_next();
        assert_eq!(state.focus(), FocusField::DisplayName);
        state.focus_next();
        assert_eq!(state.focus(), FocusField::RemoteIp);
        state.focus_next();
        assert_eq!(state.focus(), FocusField::RemotePort);
        state.focus_next();
        assert_eq!(state.focus(), FocusField::Compose);

        state.focus_previous();
        assert_eq!(state.focus(), FocusField::RemotePort);
    }

    #[test]
    fn commit_display_name_trims_whitespace() {
        let mut state = ShellState::new();
        state.focus_next();
        for ch in " Alice ".chars() {
            state.focused_field_mut().insert_char(ch);
        }

        state.commit_display_name();

        assert_eq!(state.session().display_name(), "Alice");
    }

    #[test]
    fn leaving_display_name_field_commits_it() {
        let mut state = ShellState::new();
        state.focus_next();
        for ch in "  Bob".chars() {
            state.focused_field_mut().insert_char(ch);
        }

        state.focus_next();

        assert_eq!(state.session().display_name(), "Bob");
    }

    #[test]
    fn commit_of_blank_field_stores_empty_string() {
        let mut state = ShellState::new();
        state.focus_next();
        for ch in "   ".chars() {
            state.focused_field_mut().insert_char(ch);
        }

        state.commit_display_name();

        assert_eq!(state.session().display_name(), "");
    }

    #[test]
    fn notice_is_set_and_cleared() {
        let mut state = ShellState::new();
        assert!(!state.clear_notice());

        state.set_notice("Enter a valid IP and port".to_owned());
        assert_eq!(state.notice(), Some("Enter a valid IP and port"));

        assert!(state.clear_notice());
        assert_eq!(state.notice(), None);
    }
}
