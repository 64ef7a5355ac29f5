//! Free-text action input with cursor.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::game::GameScreen;

/// Rows taken by the input box.
pub const HEIGHT: u16 = 3;

/// Placeholder while the narrative is still being revealed.
pub const WAIT_PLACEHOLDER: &str = "Wait for the narrator...";
/// Placeholder when the player can type.
pub const TYPE_PLACEHOLDER: &str = "Or type your own action...";

/// Draw the input box.
pub fn draw(frame: &mut Frame, screen: &GameScreen, area: Rect) {
    let enabled = screen.input_enabled();
    let border = if enabled {
        Color::Green
    } else {
        Color::DarkGray
    };
    let send_style = if screen.can_submit() {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = if screen.input_text.is_empty() {
        let placeholder = if screen.is_revealing() || screen.loading {
            WAIT_PLACEHOLDER
        } else {
            TYPE_PLACEHOLDER
        };
        Line::from(vec![
            Span::raw("> "),
            Span::styled(placeholder, Style::default().fg(Color::DarkGray).italic()),
        ])
    } else {
        Line::from(format!("> {}", screen.input_text))
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title_bottom(Line::from(Span::styled(" Send (Enter) ", send_style)).right_aligned()),
    );
    frame.render_widget(input, area);

    if !enabled {
        return;
    }

    // Offset by 2 for "> " prefix, plus 1 for left border.
    let typed = screen.input_text[..screen.input_cursor].chars().count() as u16;
    let cursor_x = area.x + 1 + 2 + typed;
    let cursor_y = area.y + 1;
    if cursor_x < area.x + area.width.saturating_sub(1) {
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}
