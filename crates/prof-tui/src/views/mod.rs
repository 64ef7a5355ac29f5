//! View rendering for the game screen.

pub mod choices;
pub mod ending;
pub mod header;
pub mod input;
pub mod sidebar;
pub mod stats;
pub mod title;
pub mod transcript;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::game::{GameScreen, GameStatus};
use crate::shared;

/// Minimum terminal width before the sidebar is shown.
pub const SIDEBAR_MIN_WIDTH: u16 = 100;
/// Sidebar width.
const SIDEBAR_WIDTH: u16 = 34;

/// Screen regions for the current state. Unused regions are empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub header: Rect,
    /// Title screen content (idle only).
    pub title: Rect,
    /// Stat bars.
    pub stats: Rect,
    /// Chat transcript.
    pub transcript: Rect,
    /// System status and inventory.
    pub sidebar: Rect,
    /// Suggested action buttons (playing only).
    pub choices: Rect,
    /// Free-text input (playing only).
    pub input: Rect,
    /// End-of-game panel.
    pub ending: Rect,
    /// Key hints.
    pub status: Rect,
}

/// Split `area` into regions for `screen`.
pub fn layout(area: Rect, screen: &GameScreen) -> ScreenLayout {
    let footer_height = match screen.status {
        GameStatus::Idle => 0,
        GameStatus::Playing => choices::HEIGHT + input::HEIGHT,
        GameStatus::GameOver | GameStatus::Victory => ending::HEIGHT,
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header::HEIGHT),
            Constraint::Min(3),
            Constraint::Length(footer_height),
            Constraint::Length(1),
        ])
        .split(area);

    let mut out = ScreenLayout {
        header: rows[0],
        status: rows[3],
        ..ScreenLayout::default()
    };

    let main = if area.width >= SIDEBAR_MIN_WIDTH {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(SIDEBAR_WIDTH)])
            .split(rows[1]);
        out.sidebar = cols[1];
        cols[0]
    } else {
        rows[1]
    };

    if screen.status == GameStatus::Idle {
        out.title = main;
        return out;
    }

    let stats_height = if screen.current.is_some() {
        stats::HEIGHT
    } else {
        0
    };
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(stats_height), Constraint::Min(1)])
        .split(main);
    out.stats = body[0];
    out.transcript = body[1];

    match screen.status {
        GameStatus::Playing => {
            let footer = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(choices::HEIGHT),
                    Constraint::Length(input::HEIGHT),
                ])
                .split(rows[2]);
            out.choices = footer[0];
            out.input = footer[1];
        }
        GameStatus::GameOver | GameStatus::Victory => out.ending = rows[2],
        GameStatus::Idle => {}
    }

    out
}

/// Draw the whole screen.
pub fn draw(frame: &mut Frame, screen: &GameScreen) {
    let regions = layout(frame.area(), screen);

    header::draw(frame, screen, regions.header);
    if !regions.sidebar.is_empty() {
        sidebar::draw(frame, regions.sidebar);
    }

    match screen.status {
        GameStatus::Idle => title::draw(frame, screen, regions.title),
        status => {
            if let Some(current) = &screen.current {
                stats::draw(frame, &current.stats, regions.stats);
            }
            transcript::draw(frame, screen, regions.transcript);
            if status == GameStatus::Playing {
                choices::draw(frame, screen, regions.choices);
                input::draw(frame, screen, regions.input);
            } else {
                ending::draw(frame, screen, regions.ending);
            }
        }
    }

    draw_status_bar(frame, screen, regions.status);

    if let Some(notice) = &screen.notice {
        shared::draw_notice(frame, notice);
    } else if screen.show_help {
        shared::draw_help_popup(frame);
    }
}

/// Context-aware key hints.
fn draw_status_bar(frame: &mut Frame, screen: &GameScreen, area: Rect) {
    let hints: &[(&str, &str)] = if screen.notice.is_some() {
        &[("Enter", "dismiss")]
    } else if screen.loading {
        &[("Ctrl+C", "quit")]
    } else {
        match screen.status {
            GameStatus::Idle => &[("Enter", "start"), ("?", "help"), ("q", "quit")],
            GameStatus::Playing if screen.is_revealing() => {
                &[("Esc", "skip"), ("Ctrl+R", "restart"), ("Ctrl+C", "quit")]
            }
            GameStatus::Playing => &[
                ("1-3", "choose"),
                ("Enter", "send"),
                ("\u{2191}\u{2193}", "scroll"),
                ("Ctrl+R", "restart"),
                ("?", "help"),
                ("Ctrl+C", "quit"),
            ],
            GameStatus::GameOver | GameStatus::Victory => {
                &[("Enter", "play again"), ("?", "help"), ("q", "quit")]
            }
        }
    };

    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, Style::default().fg(Color::Yellow)),
                Span::raw(format!(":{action}  ")),
            ]
        })
        .collect();

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::DarkGray).bg(Color::Black));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use prof_core::{GameResponse, GameStats};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn day_one() -> GameResponse {
        GameResponse {
            narrative: "Day one.".to_string(),
            stats: GameStats::new(50, 80, 100),
            choices: vec![
                "Teach calmly".to_string(),
                "Crack a joke".to_string(),
                "Give a pop quiz".to_string(),
            ],
            game_over: false,
            victory: false,
            reason: None,
        }
    }

    fn playing(response: GameResponse) -> GameScreen {
        let mut s = GameScreen::new(Duration::ZERO);
        s.request_start().unwrap();
        s.finish_start(Ok(response));
        s
    }

    fn render(screen: &GameScreen, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, screen)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn idle_layout_has_only_title() {
        let s = GameScreen::new(Duration::ZERO);
        let l = layout(Rect::new(0, 0, 80, 24), &s);
        assert!(!l.title.is_empty());
        assert!(l.choices.is_empty());
        assert!(l.input.is_empty());
        assert!(l.sidebar.is_empty());
    }

    #[test]
    fn playing_layout_has_controls() {
        let s = playing(day_one());
        let l = layout(Rect::new(0, 0, 120, 40), &s);
        assert_eq!(l.choices.height, choices::HEIGHT);
        assert_eq!(l.input.height, input::HEIGHT);
        assert_eq!(l.stats.height, stats::HEIGHT);
        assert!(!l.sidebar.is_empty());
        assert!(l.ending.is_empty());
    }

    #[test]
    fn renders_day_one() {
        let s = playing(day_one());
        let out = render(&s, 120, 40);
        assert!(out.contains("Day one."));
        assert!(out.contains("50%"));
        assert!(out.contains("80%"));
        assert!(out.contains("100%"));
        assert!(out.contains("[1] Teach calmly"));
        assert!(out.contains("[2] Crack a joke"));
        assert!(out.contains("[3] Give a pop quiz"));
    }

    #[test]
    fn renders_clamped_stats() {
        let mut r = day_one();
        r.stats = GameStats::new(-30, 250, 40);
        let out = render(&playing(r), 120, 40);
        assert!(out.contains(" 0%"));
        assert!(out.contains("100%"));
        assert!(!out.contains("-30"));
        assert!(!out.contains("250"));
    }

    #[test]
    fn renders_title_screen() {
        let out = render(&GameScreen::new(Duration::ZERO), 80, 24);
        assert!(out.contains("START SEMESTER"));
    }

    #[test]
    fn renders_game_over() {
        let mut s = playing(day_one());
        s.request_action("Nap").unwrap();
        let mut r = day_one();
        r.game_over = true;
        r.reason = Some("Energy hit zero.".to_string());
        s.finish_action(Ok(r));
        let out = render(&s, 120, 40);
        assert!(out.contains("GAME OVER"));
        assert!(out.contains("Energy hit zero."));
        assert!(!out.contains("[1] Teach calmly"));
    }

    #[test]
    fn hides_choices_while_loading() {
        let mut s = playing(day_one());
        s.request_action("Crack a joke").unwrap();
        let out = render(&s, 120, 40);
        assert!(!out.contains("[1] Teach calmly"));
        assert!(out.contains("> Crack a joke"));
    }
}
