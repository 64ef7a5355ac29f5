//! Game screen state: status, transcript, current turn, and input.
//!
//! Everything here is synchronous. Operations that need the narrative
//! service return a [`Request`] for the caller to run, and the caller feeds
//! the result back through [`GameScreen::finish_start`] or
//! [`GameScreen::finish_action`]. While a request is outstanding the loading
//! flag keeps every game-affecting control disabled.

use std::time::Duration;

use prof_core::{GameResponse, Outcome, Role, Transcript, markup};
use prof_session::SessionResult;
use tracing::{debug, error};

use crate::typewriter::Typewriter;

/// Transcript entry appended when an action could not be answered.
pub const FALLBACK_MESSAGE: &str = "System error... retrying connection...";

/// Notice shown when a game could not be started.
pub const START_FAILED_NOTICE: &str =
    "Could not connect to the narrative service. Check your API key.";

/// Shown on the end screen when the game master gives no reason.
pub const DEFAULT_END_REASON: &str = "The dean wants to see you in their office...";

/// Where the player is in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Title screen; no game yet.
    Idle,
    /// A game is running.
    Playing,
    /// The last turn ended the game in defeat.
    GameOver,
    /// The last turn ended the game in victory.
    Victory,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::GameOver | GameStatus::Victory)
    }
}

impl From<&Outcome> for GameStatus {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Playing => GameStatus::Playing,
            Outcome::Lost { .. } => GameStatus::GameOver,
            Outcome::Won { .. } => GameStatus::Victory,
        }
    }
}

/// Work for the session wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Start (or restart) a game.
    Start,
    /// Send a player action.
    Action(String),
}

/// State of the game screen.
pub struct GameScreen {
    /// Game status.
    pub status: GameStatus,
    /// Chat transcript.
    pub transcript: Transcript,
    /// Latest structured turn; drives stats and choices.
    pub current: Option<GameResponse>,
    /// A request is in flight.
    pub loading: bool,
    /// Reveal of the latest narrative, while it runs.
    pub typewriter: Option<Typewriter>,
    /// Current input text.
    pub input_text: String,
    /// Cursor position within input text (byte offset).
    pub input_cursor: usize,
    /// Scroll offset from the bottom (0 = fully scrolled down).
    pub output_scroll: u16,
    /// Blocking notice; must be dismissed before anything else.
    pub notice: Option<String>,
    /// Whether the help popup is visible.
    pub show_help: bool,
    char_delay: Duration,
}

impl GameScreen {
    /// Create an idle screen revealing one character every `char_delay`.
    pub fn new(char_delay: Duration) -> Self {
        Self {
            status: GameStatus::Idle,
            transcript: Transcript::new(),
            current: None,
            loading: false,
            typewriter: None,
            input_text: String::new(),
            input_cursor: 0,
            output_scroll: 0,
            notice: None,
            show_help: false,
            char_delay,
        }
    }

    // -- requests ---------------------------------------------------------

    /// Ask to start a new game. `None` while another request is in flight.
    pub fn request_start(&mut self) -> Option<Request> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(Request::Start)
    }

    /// Apply the result of a start request.
    ///
    /// Success clears the transcript and begins a fresh game. Failure leaves
    /// the status alone and raises a blocking notice.
    pub fn finish_start(&mut self, result: SessionResult<GameResponse>) {
        self.loading = false;
        match result {
            Ok(response) => {
                self.transcript.clear();
                self.transcript.push_model(&response.narrative);
                self.status = GameStatus::Playing;
                self.clear_input();
                self.output_scroll = 0;
                self.show_turn(response);
            }
            Err(e) => {
                error!(error = %e, "Game start failed");
                self.notice = Some(format!("{START_FAILED_NOTICE}\n\n{e}"));
            }
        }
    }

    /// Ask to send `text` as the player's action.
    ///
    /// Ignored unless a game is running, nothing is in flight, the narrative
    /// has finished revealing, and the text is not blank. The action goes
    /// into the transcript right away.
    pub fn request_action(&mut self, text: &str) -> Option<Request> {
        let action = text.trim();
        if action.is_empty() || !self.input_enabled() {
            return None;
        }
        self.transcript.push_user(action);
        self.clear_input();
        self.output_scroll = 0;
        self.loading = true;
        Some(Request::Action(action.to_string()))
    }

    /// Apply the result of an action request.
    ///
    /// On failure the status is untouched and a fallback entry is appended;
    /// the player's action stays in the transcript.
    pub fn finish_action(&mut self, result: SessionResult<GameResponse>) {
        self.loading = false;
        self.output_scroll = 0;
        match result {
            Ok(response) => {
                self.transcript.push_model(&response.narrative);
                self.status = GameStatus::from(&response.outcome());
                self.show_turn(response);
            }
            Err(e) => {
                error!(error = %e, "Action failed");
                self.transcript.push_model(FALLBACK_MESSAGE);
            }
        }
    }

    /// Submit the input line as an action.
    pub fn submit_input(&mut self) -> Option<Request> {
        if !self.can_submit() {
            return None;
        }
        let text = self.input_text.clone();
        self.request_action(&text)
    }

    /// Send the suggested action at `index` (0-based).
    pub fn select_choice(&mut self, index: usize) -> Option<Request> {
        if !self.choices_visible() {
            return None;
        }
        let choice = self.choices().get(index)?.clone();
        self.request_action(&choice)
    }

    fn show_turn(&mut self, response: GameResponse) {
        let total = markup::visible_len(&response.narrative);
        self.typewriter = Some(Typewriter::new(total, self.char_delay));
        self.current = Some(response);
        if self.typewriter.as_ref().is_some_and(Typewriter::is_done) {
            self.typewriter = None;
        }
    }

    // -- control gating ---------------------------------------------------

    /// Whether the latest narrative is still being revealed.
    pub fn is_revealing(&self) -> bool {
        self.typewriter.is_some()
    }

    /// Whether the text field accepts input.
    pub fn input_enabled(&self) -> bool {
        self.status == GameStatus::Playing && !self.loading && !self.is_revealing()
    }

    /// Whether the submit action is enabled.
    pub fn can_submit(&self) -> bool {
        self.input_enabled() && !self.input_text.trim().is_empty()
    }

    /// Whether the suggested-action buttons are shown.
    pub fn choices_visible(&self) -> bool {
        self.input_enabled() && self.current.is_some()
    }

    /// Suggested actions of the latest turn, at most three.
    pub fn choices(&self) -> &[String] {
        self.current
            .as_ref()
            .map(GameResponse::visible_choices)
            .unwrap_or(&[])
    }

    /// Reason shown on the end screen.
    pub fn end_reason(&self) -> &str {
        self.current
            .as_ref()
            .and_then(|r| r.reason.as_deref())
            .filter(|r| !r.trim().is_empty())
            .unwrap_or(DEFAULT_END_REASON)
    }

    /// Characters of the last transcript entry to show, if it is mid-reveal.
    pub fn reveal_limit(&self) -> Option<usize> {
        let last = self.transcript.last()?;
        if last.role != Role::Model {
            return None;
        }
        self.typewriter.as_ref().map(Typewriter::shown)
    }

    // -- animation --------------------------------------------------------

    /// Advance the reveal by `elapsed`.
    pub fn tick(&mut self, elapsed: Duration) {
        if let Some(t) = self.typewriter.as_mut()
            && t.advance(elapsed)
        {
            self.typewriter = None;
        }
    }

    /// Show the whole narrative now.
    pub fn skip_reveal(&mut self) {
        self.typewriter = None;
    }

    /// Close the blocking notice.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -- input editing ----------------------------------------------------

    /// Push a character to the input at the cursor position.
    pub fn push_char(&mut self, c: char) {
        if !self.input_enabled() {
            debug!("Input ignored while disabled");
            return;
        }
        self.input_text.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.input_text[..self.input_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input_text.remove(prev);
            self.input_cursor = prev;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete_char(&mut self) {
        if self.input_cursor < self.input_text.len() {
            self.input_text.remove(self.input_cursor);
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        if self.input_cursor > 0 {
            let prev = self.input_text[..self.input_cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input_cursor = prev;
        }
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        if self.input_cursor < self.input_text.len() {
            let next = self.input_text[self.input_cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.input_cursor + i)
                .unwrap_or(self.input_text.len());
            self.input_cursor = next;
        }
    }

    /// Move cursor to start of input.
    pub fn cursor_home(&mut self) {
        self.input_cursor = 0;
    }

    /// Move cursor to end of input.
    pub fn cursor_end(&mut self) {
        self.input_cursor = self.input_text.len();
    }

    /// Empty the input line.
    pub fn clear_input(&mut self) {
        self.input_text.clear();
        self.input_cursor = 0;
    }

    /// Scroll output up.
    pub fn scroll_up(&mut self) {
        self.output_scroll = self.output_scroll.saturating_add(1);
    }

    /// Scroll output down.
    pub fn scroll_down(&mut self) {
        self.output_scroll = self.output_scroll.saturating_sub(1);
    }
}
