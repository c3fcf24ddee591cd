use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::domain::{
    shell_state::{FocusField, ShellState},
    text_field::TextField,
};

use super::{
    message_rendering::{bottom_anchor_offset, build_message_lines},
    styles,
};

/// Placeholder shown in the empty, unfocused compose field.
const COMPOSE_PLACEHOLDER: &str = "Type a message, Enter to send...";

pub fn render(frame: &mut Frame<'_>, state: &ShellState) {
    let [content_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let [sidebar_area, chat_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(1)])
        .areas(content_area);

    let [messages_area, compose_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .areas(chat_area);

    render_sidebar(frame, sidebar_area, state);
    render_messages_panel(frame, messages_area, state);
    render_field(
        frame,
        compose_area,
        "Message",
        state.compose(),
        state.focus() == FocusField::Compose,
        Some(COMPOSE_PLACEHOLDER),
    );

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);
}

fn render_sidebar(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let [name_area, ip_area, port_area, identity_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .areas(area);

    render_field(
        frame,
        name_area,
        "Display name",
        state.display_name_field(),
        state.focus() == FocusField::DisplayName,
        None,
    );
    render_field(
        frame,
        ip_area,
        "Remote IP",
        state.remote_ip_field(),
        state.focus() == FocusField::RemoteIp,
        None,
    );
    render_field(
        frame,
        port_area,
        "Remote port",
        state.remote_port_field(),
        state.focus() == FocusField::RemotePort,
        None,
    );

    let identity = Paragraph::new(identity_lines(state)).block(
        Block::default()
            .title("Local node")
            .borders(Borders::ALL)
            .border_style(styles::inactive_field_border_style()),
    );
    frame.render_widget(identity, identity_area);
}

fn render_messages_panel(frame: &mut Frame<'_>, area: Rect, state: &ShellState) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;

    let lines = build_message_lines(state.log().bubbles(), inner_width);
    let offset = bottom_anchor_offset(lines.len(), inner_height);

    let messages = Paragraph::new(lines).scroll((offset, 0)).block(
        Block::default()
            .title("Messages")
            .borders(Borders::ALL)
            .border_style(styles::inactive_field_border_style()),
    );
    frame.render_widget(messages, area);
}

fn render_field(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &str,
    field: &TextField,
    is_focused: bool,
    placeholder: Option<&str>,
) {
    let border_style = if is_focused {
        styles::active_field_border_style()
    } else {
        styles::inactive_field_border_style()
    };

    let content = if field.is_empty() && !is_focused {
        match placeholder {
            Some(text) => Line::from(Span::styled(text.to_owned(), styles::placeholder_style())),
            None => Line::from(""),
        }
    } else {
        // Only the cursor's line fits in a one-row field.
        let (cursor_line, _) = cursor_line_col(field.text(), field.cursor_position());
        let shown = field
            .text()
            .split('\n')
            .nth(cursor_line)
            .unwrap_or_default()
            .to_owned();
        Line::from(Span::styled(shown, styles::field_text_style()))
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title.to_owned())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);

    if is_focused {
        let (_, cursor_col) = cursor_line_col(field.text(), field.cursor_position());
        let cursor_x = area
            .x
            .saturating_add(1)
            .saturating_add(cursor_col.min(u16::MAX as usize) as u16);
        let cursor_y = area.y.saturating_add(1);
        frame.set_cursor_position((cursor_x, cursor_y));
    }
}

fn identity_lines(state: &ShellState) -> Vec<Line<'static>> {
    let port = state
        .session()
        .local_port()
        .map(|port| port.to_string())
        .unwrap_or_else(|| "-".to_owned());
    let key = state
        .session()
        .truncated_public_key()
        .unwrap_or_else(|| "-".to_owned());

    vec![
        Line::from(Span::styled(format!("Port: {port}"), styles::identity_style())),
        Line::from(Span::styled(format!("Key: {key}"), styles::identity_style())),
    ]
}

fn status_line(state: &ShellState) -> Line<'static> {
    match state.notice() {
        Some(notice) => Line::from(Span::styled(notice.to_owned(), styles::notice_style())),
        None => Line::from(Span::styled(
            state.session().status_text().to_owned(),
            styles::status_style(),
        )),
    }
}

/// Maps a character cursor index to its (line, display-column) position.
fn cursor_line_col(text: &str, cursor_chars: usize) -> (usize, usize) {
    let mut line = 0usize;
    let mut col = 0usize;

    for (idx, ch) in text.chars().enumerate() {
        if idx == cursor_chars {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += ch.width().unwrap_or(0);
        }
    }

    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::STATUS_CONNECTING;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn status_line_shows_session_status_text() {
        let state = ShellState::new();

        assert_eq!(line_text(&status_line(&state)), STATUS_CONNECTING);
    }

    #[test]
    fn status_line_prefers_the_validation_notice() {
        let mut state = ShellState::new();
        state.set_notice("Enter a valid IP and port".to_owned());

        assert_eq!(line_text(&status_line(&state)), "Enter a valid IP and port");
    }

    #[test]
    fn identity_lines_show_placeholders_until_info_arrives() {
        let state = ShellState::new();
        let lines = identity_lines(&state);

        assert_eq!(line_text(&lines[0]), "Port: -");
        assert_eq!(line_text(&lines[1]), "Key: -");
    }

    #[test]
    fn identity_lines_show_port_and_truncated_key() {
        let mut state = ShellState::new();
        state.session_mut().set_local_port(9000);
        state.session_mut().set_public_key("k".repeat(44));

        let lines = identity_lines(&state);

        assert_eq!(line_text(&lines[0]), "Port: 9000");
        assert_eq!(line_text(&lines[1]), format!("Key: {}...", "k".repeat(30)));
    }

    #[test]
    fn cursor_col_counts_display_width() {
        assert_eq!(cursor_line_col("abc", 2), (0, 2));
        // Wide characters occupy two columns each.
        assert_eq!(cursor_line_col("你好", 2), (0, 4));
    }

    #[test]
    fn cursor_tracks_lines_across_newlines() {
        assert_eq!(cursor_line_col("ab\ncd", 3), (1, 0));
        assert_eq!(cursor_line_col("ab\ncd", 5), (1, 2));
    }
}
