//! Scrollable chat transcript.

use prof_core::{Role, markup};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::game::GameScreen;
use crate::shared::styled_lines;

/// Build the transcript lines, with the last narrative cut at the reveal point.
pub fn lines(screen: &GameScreen) -> Vec<Line<'_>> {
    let turns = screen.transcript.turns();
    let limit = screen.reveal_limit();
    let mut out = Vec::new();

    for (i, turn) in turns.iter().enumerate() {
        if i > 0 {
            out.push(Line::default());
        }
        match turn.role {
            Role::User => out.push(Line::from(Span::styled(
                format!("> {}", turn.text),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))),
            Role::Model => {
                let spans = match limit {
                    Some(n) if i + 1 == turns.len() => markup::reveal(&turn.text, n),
                    _ => markup::spans(&turn.text).collect(),
                };
                out.extend(styled_lines(&spans, Style::default().fg(Color::White)));
            }
        }
    }

    if screen.loading {
        if !out.is_empty() {
            out.push(Line::default());
        }
        out.push(Line::from(Span::styled(
            "...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    out
}

/// Draw the transcript, pinned to the bottom unless scrolled.
pub fn draw(frame: &mut Frame, screen: &GameScreen, area: Rect) {
    let lines = lines(screen);

    // Count rows with the same word wrapping the renderer uses.
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let inner_width = area.width.saturating_sub(2);
    let total_wrapped = u16::try_from(paragraph.line_count(inner_width)).unwrap_or(u16::MAX);

    let visible_height = area.height.saturating_sub(2);
    let max_scroll = total_wrapped.saturating_sub(visible_height);
    let scroll = max_scroll.saturating_sub(screen.output_scroll);

    let paragraph = paragraph
        .block(
            Block::default()
                .title(" Lecture Hall ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .scroll((scroll, 0));

    frame.render_widget(paragraph, area);
}
