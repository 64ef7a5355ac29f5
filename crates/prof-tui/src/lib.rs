//! Terminal UI for Profesor.exe.
//!
//! A ratatui front end that shows the classroom stats, the chat transcript
//! with a typewriter reveal, up to three suggested actions and a free-text
//! input, and forwards the player's intents to a
//! [`prof_session::GameMaster`].

pub mod app;
pub mod config;
pub mod game;
pub mod shared;
pub mod terminal;
pub mod typewriter;
pub mod views;
