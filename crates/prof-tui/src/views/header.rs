//! Title bar.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::game::{GameScreen, GameStatus};

/// Rows taken by the title bar.
pub const HEIGHT: u16 = 3;

/// Draw the title bar.
pub fn draw(frame: &mut Frame, screen: &GameScreen, area: Rect) {
    let mut spans = vec![
        Span::styled(
            " PROFESOR.EXE ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" v1.0.4 ", Style::default().fg(Color::DarkGray)),
        Span::raw("| Academic Simulation"),
    ];
    if screen.status != GameStatus::Idle {
        spans.push(Span::styled(
            "   Ctrl+R: restart",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(header, area);
}
