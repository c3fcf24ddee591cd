//! Style definitions for the UI components.

use ratatui::style::{Color, Modifier, Style};

/// Style for the label line above a peer bubble.
pub fn peer_label_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the label line above a local bubble.
pub fn me_label_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Style for bubble body text.
pub fn message_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Border style for the focused input field.
pub fn active_field_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Border style for unfocused panels and fields.
pub fn inactive_field_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for field text.
pub fn field_text_style() -> Style {
    Style::default().fg(Color::White)
}

/// Style for placeholder text in an empty, unfocused field.
pub fn placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the node identity lines (port, public key).
pub fn identity_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the status line.
pub fn status_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style for the validation notice shown on the status line.
pub fn notice_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
