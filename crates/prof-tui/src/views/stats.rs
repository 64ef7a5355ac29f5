//! The three stat bars.

use prof_core::GameStats;
use prof_core::stats::StatKind;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge};

/// Rows taken by the stat bars.
pub const HEIGHT: u16 = 3;

fn color(kind: StatKind) -> Color {
    match kind {
        StatKind::Motivation => Color::Green,
        StatKind::Authority => Color::Blue,
        StatKind::Energy => Color::Yellow,
    }
}

/// Draw one bordered gauge per stat, side by side.
pub fn draw(frame: &mut Frame, stats: &GameStats, area: Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (meter, col) in stats.meters().iter().zip(cols.iter()) {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(format!(" {} ", meter.kind.label()))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .gauge_style(Style::default().fg(color(meter.kind)).bg(Color::Black))
            .ratio(meter.fraction())
            .label(Span::styled(
                format!("{}%", meter.percent),
                Style::default().fg(Color::White).bold(),
            ));
        frame.render_widget(gauge, *col);
    }
}
