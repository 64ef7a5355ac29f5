//! End-of-game panel.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::game::{GameScreen, GameStatus};

/// Rows taken by the panel.
pub const HEIGHT: u16 = 5;

/// Draw the victory or defeat panel.
pub fn draw(frame: &mut Frame, screen: &GameScreen, area: Rect) {
    let (heading, color) = if screen.status == GameStatus::Victory {
        ("SEMESTER PASSED!", Color::Green)
    } else {
        ("GAME OVER", Color::Red)
    };

    let hint = if screen.loading {
        Span::styled("Loading...", Style::default().fg(Color::DarkGray).italic())
    } else {
        Span::styled("Enter: play again", Style::default().fg(Color::DarkGray))
    };

    let panel = Paragraph::new(vec![
        Line::from(Span::styled(heading, Style::default().fg(color).bold())),
        Line::from(screen.end_reason()),
        Line::from(hint),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    frame.render_widget(panel, area);
}
