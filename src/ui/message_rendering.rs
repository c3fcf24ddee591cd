//! Turns the message log into renderable lines.

use ratatui::{
    layout::Alignment,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::domain::message::{Bubble, Role};

use super::styles;

/// Builds the full line list for the message panel: one label line per
/// bubble followed by its wrapped body lines. Local bubbles are
/// right-aligned, peer bubbles left-aligned.
pub fn build_message_lines(bubbles: &[Bubble], width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for bubble in bubbles {
        let (label_style, alignment) = match bubble.role {
            Role::Me => (styles::me_label_style(), Alignment::Right),
            Role::Peer => (styles::peer_label_style(), Alignment::Left),
        };

        lines.push(Line::from(Span::styled(bubble.label.clone(), label_style)).alignment(alignment));

        for raw_line in bubble.text.split('\n') {
            for wrapped in wrap_to_width(raw_line, width) {
                lines.push(
                    Line::from(Span::styled(wrapped, styles::message_text_style()))
                        .alignment(alignment),
                );
            }
        }
    }

    lines
}

/// Vertical scroll offset that keeps the newest line visible.
pub fn bottom_anchor_offset(total_lines: usize, viewport_height: usize) -> u16 {
    total_lines.saturating_sub(viewport_height).min(u16::MAX as usize) as u16
}

/// Greedy wrap on display width. Character-based, so a single over-wide
/// character still lands on its own line rather than looping.
fn wrap_to_width(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.is_empty() {
        return vec![text.to_owned()];
    }

    let mut wrapped = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if current_width + ch_width > width && !current.is_empty() {
            wrapped.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(ch);
        current_width += ch_width;
    }
    wrapped.push(current);

    wrapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn each_bubble_gets_a_label_line_and_a_body_line() {
        let bubbles = vec![Bubble::from_peer(
            Some("Bob".to_owned()),
            Some("hi".to_owned()),
        )];

        let lines = build_message_lines(&bubbles, 40);

        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[0]), "Bob");
        assert_eq!(text_of(&lines[1]), "hi");
    }

    #[test]
    fn local_bubbles_are_right_aligned() {
        let bubbles = vec![Bubble::local_echo("hi".to_owned(), "Alice")];

        let lines = build_message_lines(&bubbles, 40);

        assert_eq!(lines[0].alignment, Some(Alignment::Right));
        assert_eq!(lines[1].alignment, Some(Alignment::Right));
    }

    #[test]
    fn peer_bubbles_are_left_aligned() {
        let bubbles = vec![Bubble::from_peer(None, Some("hi".to_owned()))];

        let lines = build_message_lines(&bubbles, 40);

        assert_eq!(lines[0].alignment, Some(Alignment::Left));
    }

    #[test]
    fn empty_body_still_renders_one_blank_line() {
        let bubbles = vec![Bubble::from_peer(None, None)];

        let lines = build_message_lines(&bubbles, 40);

        assert_eq!(lines.len(), 2);
        assert_eq!(text_of(&lines[1]), "");
    }

    #[test]
    fn long_body_wraps_to_panel_width() {
        let bubbles = vec![Bubble::from_peer(None, Some("abcdefghij".to_owned()))];

        let lines = build_message_lines(&bubbles, 4);

        let bodies: Vec<_> = lines[1..].iter().map(text_of).collect();
        assert_eq!(bodies, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn multiline_body_keeps_explicit_newlines() {
        let bubbles = vec![Bubble::local_echo("one\ntwo".to_owned(), "")];

        let lines = build_message_lines(&bubbles, 40);

        assert_eq!(lines.len(), 3);
        assert_eq!(text_of(&lines[1]), "one");
        assert_eq!(text_of(&lines[2]), "two");
    }

    #[test]
    fn offset_is_zero_while_everything_fits() {
        assert_eq!(bottom_anchor_offset(5, 10), 0);
    }

    #[test]
    fn offset_anchors_to_the_newest_line() {
        assert_eq!(bottom_anchor_offset(25, 10), 15);
    }

    #[test]
    fn wrap_handles_wide_characters() {
        // Each CJK character is two columns wide.
        let wrapped = wrap_to_width("你好世界", 4);

        assert_eq!(wrapped, vec!["你好", "世界"]);
    }
}
