//! Top-level application state: the game screen plus the session wrapper.
//!
//! Requests run on a tokio task that locks the [`GameMaster`]; the result
//! comes back through a channel. The in-flight flag admits one request at a
//! time, and a request whose task dies still reports back, so the screen
//! never stays stuck in the loading state.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use prof_core::GameResponse;
use prof_session::{GameMaster, NarrativeService, SessionError, SessionResult};
use ratatui::layout::{Position, Rect};
use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::config::UiConfig;
use crate::game::{GameScreen, GameStatus, Request};
use crate::views::{self, choices};

/// A finished request.
struct Completion {
    kind: RequestKind,
    result: SessionResult<GameResponse>,
}

#[derive(Debug, Clone, Copy)]
enum RequestKind {
    Start,
    Action,
}

/// Main application state for the TUI.
pub struct TuiApp<S> {
    /// The game screen.
    pub screen: GameScreen,
    /// UI settings.
    pub config: UiConfig,
    /// Whether the app should quit.
    pub should_quit: bool,
    master: Arc<Mutex<GameMaster<S>>>,
    in_flight: bool,
    runtime: Handle,
    tx: Sender<Completion>,
    rx: Receiver<Completion>,
}

impl<S: NarrativeService + 'static> TuiApp<S> {
    /// Create an app that runs session calls on `runtime`.
    pub fn new(master: GameMaster<S>, runtime: Handle, config: UiConfig) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            screen: GameScreen::new(config.char_delay),
            config,
            should_quit: false,
            master: Arc::new(Mutex::new(master)),
            in_flight: false,
            runtime,
            tx,
            rx,
        }
    }

    /// Whether a request is running.
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// Start or restart a game.
    pub fn start(&mut self) {
        if let Some(request) = self.screen.request_start() {
            self.dispatch(request);
        }
    }

    /// Submit the input line.
    pub fn submit(&mut self) {
        if let Some(request) = self.screen.submit_input() {
            self.dispatch(request);
        }
    }

    /// Send a suggested action (0-based).
    pub fn choose(&mut self, index: usize) {
        if let Some(request) = self.screen.select_choice(index) {
            self.dispatch(request);
        }
    }

    /// Run `request` on the runtime.
    pub fn dispatch(&mut self, request: Request) {
        if self.in_flight {
            // The loading flag keeps a second request from being issued.
            warn!(?request, "Request dropped: another request is in flight");
            return;
        }
        self.in_flight = true;
        debug!(?request, "Dispatching request");

        let kind = match request {
            Request::Start => RequestKind::Start,
            Request::Action(_) => RequestKind::Action,
        };
        let master = Arc::clone(&self.master);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let call = tokio::spawn(async move {
                let mut master = master.lock().await;
                match request {
                    Request::Start => master.start_game().await,
                    Request::Action(action) => master.send_action(&action).await,
                }
            });
            let result = call.await.unwrap_or_else(|e| {
                error!(error = %e, "Request task failed");
                Err(SessionError::Interrupted(e.to_string()))
            });
            // The receiver only goes away when the app is shutting down.
            let _ = tx.send(Completion { kind, result });
        });
    }

    /// Apply any finished requests. Returns `true` if something changed.
    pub fn poll_completions(&mut self) -> bool {
        let mut changed = false;
        while let Ok(done) = self.rx.try_recv() {
            self.in_flight = false;
            match done.kind {
                RequestKind::Start => self.screen.finish_start(done.result),
                RequestKind::Action => self.screen.finish_action(done.result),
            }
            changed = true;
        }
        changed
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // A notice blocks everything until dismissed.
        if self.screen.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.screen.dismiss_notice();
            }
            return;
        }

        if self.screen.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter) {
                self.screen.show_help = false;
            }
            return;
        }

        if ctrl && key.code == KeyCode::Char('r') {
            if self.screen.status != GameStatus::Idle {
                self.start();
            }
            return;
        }

        match self.screen.status {
            GameStatus::Idle => match key.code {
                KeyCode::Enter | KeyCode::Char('s') => self.start(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('?') => self.screen.show_help = true,
                _ => {}
            },
            GameStatus::GameOver | GameStatus::Victory => match key.code {
                KeyCode::Enter | KeyCode::Char('r') => self.start(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('?') => self.screen.show_help = true,
                KeyCode::Up => self.screen.scroll_up(),
                KeyCode::Down => self.screen.scroll_down(),
                _ => {}
            },
            GameStatus::Playing => self.handle_playing_key(key),
        }
    }

    fn handle_playing_key(&mut self, key: KeyEvent) {
        let empty = self.screen.input_text.is_empty();
        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                if self.screen.is_revealing() {
                    self.screen.skip_reveal();
                } else {
                    self.screen.clear_input();
                }
            }
            KeyCode::Backspace => self.screen.backspace(),
            KeyCode::Delete => self.screen.delete_char(),
            KeyCode::Left => self.screen.cursor_left(),
            KeyCode::Right => self.screen.cursor_right(),
            KeyCode::Home => self.screen.cursor_home(),
            KeyCode::End => self.screen.cursor_end(),
            KeyCode::Up => self.screen.scroll_up(),
            KeyCode::Down => self.screen.scroll_down(),
            KeyCode::Char(c @ '1'..='3') if empty && self.screen.choices_visible() => {
                self.choose(c as usize - '1' as usize);
            }
            KeyCode::Char('?') if empty => self.screen.show_help = true,
            KeyCode::Char(c) => self.screen.push_char(c),
            _ => {}
        }
    }

    /// Handle a mouse event on a terminal of size `area`.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.screen.notice.is_some() || self.screen.show_help {
                    return;
                }
                let regions = views::layout(area, &self.screen);
                let at = Position::new(mouse.column, mouse.row);
                match self.screen.status {
                    GameStatus::Idle if regions.title.contains(at) => self.start(),
                    status if status.is_terminal() && regions.ending.contains(at) => {
                        self.start();
                    }
                    GameStatus::Playing if self.screen.choices_visible() => {
                        if let Some(index) = choices::hit_test(
                            mouse.column,
                            mouse.row,
                            regions.choices,
                            self.screen.choices(),
                        ) {
                            self.choose(index);
                        }
                    }
                    _ => {}
                }
            }
            MouseEventKind::ScrollUp => self.screen.scroll_up(),
            MouseEventKind::ScrollDown => self.screen.scroll_down(),
            _ => {}
        }
    }
}
