//! Integration tests: app_flow.
use std::collections::VecDeque;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use prof_core::Role;
use prof_session::{Conversation, GameMaster, NarrativeService, ServiceError, ServiceResult};
use prof_tui::app::TuiApp;
use prof_tui::config::UiConfig;
use prof_tui::game::{FALLBACK_MESSAGE, GameStatus};
use prof_tui::views;

/// Plays back canned replies and records every message it was sent.
#[derive(Default)]
struct ScriptedService {
    replies: Mutex<VecDeque<ServiceResult<Option<String>>>>,
    messages: Mutex<Vec<String>>,
    /// Panic instead of answering this message.
    panic_on: Option<&'static str>,
}

#[async_trait]
impl NarrativeService for ScriptedService {
    async fn generate(
        &self,
        _conversation: &Conversation,
        message: &str,
    ) -> ServiceResult<Option<String>> {
        self.messages.lock().unwrap().push(message.to_string());
        if self.panic_on == Some(message) {
            panic!("service crashed on {message:?}");
        }
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(None))
    }
}

const DAY_ONE: &str = r#"{"narrative":"Day one.","stats":{"motivation":50,"authority":80,"energy":100},"choices":["Teach calmly","Crack a joke","Give a pop quiz"],"gameOver":false,"victory":false}"#;

const PANIC: &str = r#"{"narrative":"Students **panic**.","stats":{"motivation":20,"authority":85,"energy":90},"choices":["Apologize","Double down"],"gameOver":false,"victory":false}"#;

const PASSED: &str = r#"{"narrative":"Grades are in.","stats":{"motivation":95,"authority":90,"energy":5},"choices":[],"gameOver":false,"victory":true,"reason":"Everyone passed."}"#;

fn ok(text: &str) -> ServiceResult<Option<String>> {
    Ok(Some(text.to_string()))
}

struct Harness {
    // Kept alive for the spawned requests.
    _runtime: tokio::runtime::Runtime,
    app: TuiApp<ScriptedService>,
}

fn harness(replies: Vec<ServiceResult<Option<String>>>) -> Harness {
    harness_with(ScriptedService {
        replies: Mutex::new(replies.into()),
        ..ScriptedService::default()
    })
}

fn harness_with(service: ScriptedService) -> Harness {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let app = TuiApp::new(
        GameMaster::new(service),
        runtime.handle().clone(),
        UiConfig::default().with_char_delay_ms(0),
    );
    Harness {
        _runtime: runtime,
        app,
    }
}

impl Harness {
    fn key(&mut self, code: KeyCode) {
        self.app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(&mut self, c: char) {
        self.app
            .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.key(KeyCode::Char(c));
        }
    }

    /// Wait for the in-flight request to come back.
    fn settle(&mut self) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while self.app.screen.loading {
            self.app.poll_completions();
            assert!(Instant::now() < deadline, "request never completed");
            thread::sleep(Duration::from_millis(2));
        }
        assert!(!self.app.is_busy());
    }

    fn texts(&self) -> Vec<(Role, String)> {
        self.app
            .screen
            .transcript
            .turns()
            .iter()
            .map(|t| (t.role, t.text.clone()))
            .collect()
    }
}

#[test]
fn enter_starts_the_semester() {
    let mut h = harness(vec![ok(DAY_ONE)]);
    h.key(KeyCode::Enter);
    assert!(h.app.screen.loading);
    assert!(h.app.is_busy());
    h.settle();

    assert_eq!(h.app.screen.status, GameStatus::Playing);
    assert_eq!(h.texts(), vec![(Role::Model, "Day one.".to_string())]);
    assert_eq!(h.app.screen.choices().len(), 3);
}

#[test]
fn digit_picks_suggested_action() {
    let mut h = harness(vec![ok(DAY_ONE), ok(PANIC)]);
    h.key(KeyCode::Enter);
    h.settle();

    h.key(KeyCode::Char('3'));
    assert!(h.app.screen.loading);
    h.settle();

    assert_eq!(
        h.texts(),
        vec![
            (Role::Model, "Day one.".to_string()),
            (Role::User, "Give a pop quiz".to_string()),
            (Role::Model, "Students **panic**.".to_string()),
        ]
    );
    let stats = h.app.screen.current.as_ref().unwrap().stats;
    assert_eq!(stats.motivation, 20);
    assert_eq!(h.app.screen.choices().len(), 2);
}

#[test]
fn digits_are_typed_when_input_has_text() {
    let mut h = harness(vec![ok(DAY_ONE), ok(PANIC)]);
    h.key(KeyCode::Enter);
    h.settle();

    h.type_text("Room 3");
    assert_eq!(h.app.screen.input_text, "Room 3");
    assert!(!h.app.screen.loading);

    h.key(KeyCode::Enter);
    h.settle();
    assert_eq!(h.texts()[1], (Role::User, "Room 3".to_string()));
    assert!(h.app.screen.input_text.is_empty());
}

#[test]
fn failed_action_shows_fallback() {
    let mut h = harness(vec![ok(DAY_ONE), ok("not json")]);
    h.key(KeyCode::Enter);
    h.settle();

    h.type_text("Teach calmly");
    h.key(KeyCode::Enter);
    h.settle();

    assert_eq!(h.app.screen.status, GameStatus::Playing);
    assert_eq!(h.texts()[2], (Role::Model, FALLBACK_MESSAGE.to_string()));
}

#[test]
fn failed_start_raises_notice() {
    let mut h = harness(vec![Err(ServiceError::Api {
        status: 403,
        message: "API key not valid".to_string(),
    })]);
    h.key(KeyCode::Enter);
    h.settle();

    assert_eq!(h.app.screen.status, GameStatus::Idle);
    let notice = h.app.screen.notice.clone().unwrap();
    assert!(notice.contains("API key not valid"));

    // Other keys are swallowed until the notice is dismissed.
    h.key(KeyCode::Char('q'));
    assert!(!h.app.should_quit);
    h.key(KeyCode::Enter);
    assert!(h.app.screen.notice.is_none());
    assert!(!h.app.screen.loading);
}

#[test]
fn victory_then_play_again() {
    let mut h = harness(vec![ok(DAY_ONE), ok(PASSED), ok(DAY_ONE)]);
    h.key(KeyCode::Enter);
    h.settle();
    h.key(KeyCode::Char('1'));
    h.settle();

    assert_eq!(h.app.screen.status, GameStatus::Victory);
    assert_eq!(h.app.screen.end_reason(), "Everyone passed.");

    // Typing does nothing at the end screen.
    h.key(KeyCode::Char('x'));
    assert!(h.app.screen.input_text.is_empty());

    h.key(KeyCode::Enter);
    h.settle();
    assert_eq!(h.app.screen.status, GameStatus::Playing);
    assert_eq!(h.texts(), vec![(Role::Model, "Day one.".to_string())]);
}

#[test]
fn ctrl_r_restarts_mid_game() {
    let mut h = harness(vec![ok(DAY_ONE), ok(PANIC), ok(DAY_ONE)]);
    h.key(KeyCode::Enter);
    h.settle();
    h.key(KeyCode::Char('2'));
    h.settle();
    assert_eq!(h.texts().len(), 3);

    h.ctrl('r');
    h.settle();
    assert_eq!(h.texts().len(), 1);
}

#[test]
fn ctrl_r_ignored_on_title_screen() {
    let mut h = harness(vec![ok(DAY_ONE)]);
    h.ctrl('r');
    assert!(!h.app.screen.loading);
    assert_eq!(h.app.screen.status, GameStatus::Idle);
}

#[test]
fn quit_keys() {
    let mut h = harness(vec![]);
    h.key(KeyCode::Char('q'));
    assert!(h.app.should_quit);

    let mut h = harness(vec![ok(DAY_ONE)]);
    h.key(KeyCode::Enter);
    h.settle();
    // 'q' is just a letter while playing.
    h.key(KeyCode::Char('q'));
    assert!(!h.app.should_quit);
    assert_eq!(h.app.screen.input_text, "q");
    h.ctrl('c');
    assert!(h.app.should_quit);
}

#[test]
fn help_toggles_on_empty_input() {
    let mut h = harness(vec![ok(DAY_ONE)]);
    h.key(KeyCode::Enter);
    h.settle();
    h.key(KeyCode::Char('?'));
    assert!(h.app.screen.show_help);
    h.key(KeyCode::Char('?'));
    assert!(!h.app.screen.show_help);
}

#[test]
fn click_on_choice_sends_it() {
    let mut h = harness(vec![ok(DAY_ONE), ok(PANIC)]);
    h.key(KeyCode::Enter);
    h.settle();

    let area = Rect::new(0, 0, 120, 40);
    let choices = views::layout(area, &h.app.screen).choices;
    h.app.handle_mouse(
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: choices.x + 2,
            row: choices.y + 1,
            modifiers: KeyModifiers::NONE,
        },
        area,
    );
    assert!(h.app.screen.loading);
    h.settle();
    assert_eq!(h.texts()[1], (Role::User, "Crack a joke".to_string()));
}

#[test]
fn crashed_request_does_not_lock_the_game() {
    let mut h = harness_with(ScriptedService {
        replies: Mutex::new(vec![ok(DAY_ONE), ok(PANIC)].into()),
        panic_on: Some("Crack a joke"),
        ..ScriptedService::default()
    });
    h.key(KeyCode::Enter);
    h.settle();

    h.key(KeyCode::Char('2'));
    h.settle();
    assert_eq!(h.app.screen.status, GameStatus::Playing);
    assert_eq!(h.texts()[2], (Role::Model, FALLBACK_MESSAGE.to_string()));
    assert!(h.app.screen.input_enabled());

    // The session survives and answers the next action.
    h.key(KeyCode::Char('3'));
    h.settle();
    assert_eq!(h.texts()[3], (Role::User, "Give a pop quiz".to_string()));
    assert_eq!(h.texts()[4], (Role::Model, "Students **panic**.".to_string()));
}
