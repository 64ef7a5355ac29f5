//! Suggested action buttons, one per row.

use prof_core::response::MAX_CHOICES;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::game::GameScreen;

/// Rows reserved for the buttons.
pub const HEIGHT: u16 = MAX_CHOICES as u16;

/// Draw the buttons. Nothing is drawn while the controls are disabled.
pub fn draw(frame: &mut Frame, screen: &GameScreen, area: Rect) {
    if !screen.choices_visible() {
        return;
    }

    let style = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    for (i, choice) in screen.choices().iter().enumerate() {
        if i as u16 >= area.height {
            break;
        }
        let row = Rect::new(area.x, area.y + i as u16, area.width, 1);
        let line = Line::from(vec![
            Span::styled(format!(" [{}] {} ", i + 1, choice), style),
            Span::raw(" "),
        ]);
        frame.render_widget(Paragraph::new(line), row);
    }
}

/// Check if a click at (col, row) hits a button. Returns its 0-based index.
pub fn hit_test(col: u16, row: u16, area: Rect, choices: &[String]) -> Option<usize> {
    if row < area.y || row >= area.y + area.height || col < area.x {
        return None;
    }

    let index = (row - area.y) as usize;
    let choice = choices.get(index)?;

    // " [n] label "
    let width = format!(" [{}] {} ", index + 1, choice).chars().count() as u16;
    (col < area.x + width).then_some(index)
}
