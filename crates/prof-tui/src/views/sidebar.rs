//! Sidebar panel: system status and inventory flavor.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

/// Inventory entries and their condition color.
const INVENTORY: &[(&str, Color)] = &[
    ("Laptop (40% battery)", Color::Green),
    ("Whiteboard marker (almost dry)", Color::Green),
    ("Coffee mug (empty)", Color::Yellow),
    ("USB stick (2023 exams)", Color::Red),
];

/// Draw the sidebar.
pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Status ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 3 || inner.width < 6 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(2)])
        .split(inner);

    let label = Style::default().fg(Color::DarkGray);
    let system = Paragraph::new(vec![
        Line::from(Span::styled("System", Style::default().fg(Color::Cyan).bold())),
        Line::from(vec![
            Span::styled("Course: ", label),
            Span::raw("Algorithms and Data Structures II"),
        ]),
        Line::from(vec![Span::styled("Room: ", label), Span::raw("Lab 404")]),
    ])
    .wrap(Wrap { trim: true });
    frame.render_widget(system, chunks[0]);

    let items: Vec<ListItem> = INVENTORY
        .iter()
        .map(|(item, color)| {
            ListItem::new(Line::from(Span::styled(
                format!(" \u{25b8} {item}"),
                Style::default().fg(*color),
            )))
        })
        .collect();

    let inventory = List::new(items).block(
        Block::default()
            .title("Inventory")
            .borders(Borders::NONE)
            .title_style(Style::default().fg(Color::Magenta).bold()),
    );
    frame.render_widget(inventory, chunks[1]);
}
