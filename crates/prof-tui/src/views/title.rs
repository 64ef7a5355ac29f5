//! Title screen shown before the first game.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::game::GameScreen;

const BLURB: &str = "You are a university professor facing a class of unmotivated \
students. Keep their motivation up, hold on to your authority, and make sure the \
coffee lasts until the end of the semester.";

/// Draw the title screen.
pub fn draw(frame: &mut Frame, screen: &GameScreen, area: Rect) {
    let button = if screen.loading {
        Span::styled("Loading...", Style::default().fg(Color::DarkGray).italic())
    } else {
        Span::styled(
            "[ START SEMESTER ]",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };

    let lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "Ready to teach?",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::default(),
        Line::from(BLURB),
        Line::default(),
        Line::from(button),
    ];

    let title = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(title, area);
}
