//! Shared utilities for TUI views: layout helpers, markup styling, and popups.

use prof_core::markup::Span as MarkupSpan;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Style for emphasized (`**bold**`) narrative text.
pub fn strong_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Turn markup runs into display lines, breaking at newlines.
pub fn styled_lines<'a>(spans: &[MarkupSpan<'a>], base: Style) -> Vec<Line<'a>> {
    let mut lines = vec![Line::default()];
    for span in spans {
        let style = if span.emphasized {
            base.patch(strong_style())
        } else {
            base
        };
        for (i, piece) in span.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if !piece.is_empty()
                && let Some(line) = lines.last_mut()
            {
                line.push_span(Span::styled(piece, style));
            }
        }
    }
    lines
}

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Draw a blocking notice that must be dismissed.
pub fn draw_notice(frame: &mut Frame, text: &str) {
    let area = centered_rect(60, 40, frame.area());

    let mut lines: Vec<Line> = text.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: dismiss",
        Style::default().fg(Color::DarkGray),
    )));

    let popup = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Connection error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Draw the help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Title / end screen:"),
        Line::from("  Enter       Start semester / play again"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from("In class:"),
        Line::from("  1-3         Pick a suggested action (empty input)"),
        Line::from("  Enter       Send your own action"),
        Line::from("  Esc         Skip narration / clear input"),
        Line::from("  \u{2191} / \u{2193}       Scroll transcript"),
        Line::from("  \u{2190} / \u{2192}       Move cursor in input"),
        Line::from("  Ctrl+R      Restart the semester"),
        Line::from(""),
        Line::from("  Click a suggested action to send it."),
        Line::from("  ?           Toggle this help"),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use prof_core::markup;

    #[test]
    fn styled_lines_marks_emphasis() {
        let spans: Vec<_> = markup::spans("You **pass** the test").collect();
        let lines = styled_lines(&spans, Style::default());
        assert_eq!(lines.len(), 1);
        let line = &lines[0];
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[1].content, "pass");
        assert!(line.spans[1].style.add_modifier.contains(Modifier::BOLD));
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(line.to_string(), "You pass the test");
    }

    #[test]
    fn styled_lines_split_newlines() {
        let spans: Vec<_> = markup::spans("First.\n\n**Second**\nThird.").collect();
        let lines = styled_lines(&spans, Style::default());
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text, vec!["First.", "", "Second", "Third."]);
    }

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(60, 40, outer);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
    }
}
