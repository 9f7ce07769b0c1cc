//! Wordle Game
//!
//! A single-player Wordle engine: guess scoring, board and keyboard state, and a
//! timed reveal sequencer, with terminal front-ends on top.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use wordle_game::core::Word;
//! use wordle_game::game::{Command, Dictionary, GameConfig, Scheduler, Session, SessionStatus};
//!
//! let dictionary = Dictionary::embedded().unwrap();
//! let secret = Word::new("crane").unwrap();
//! let mut session = Session::with_secret(&dictionary, GameConfig::default(), 0, secret);
//! let mut scheduler = Scheduler::new();
//!
//! for ch in "crane".chars() {
//!     session.handle(Command::Letter(ch), Duration::ZERO, &mut scheduler);
//! }
//! session.handle(Command::Submit, Duration::ZERO, &mut scheduler);
//!
//! // Drive the reveal with virtual time
//! let now = Duration::from_millis(1800);
//! while let Some(action) = scheduler.pop_due(now) {
//!     session.apply(action, &mut scheduler);
//! }
//! assert_eq!(session.status(), SessionStatus::Won);
//! ```

// Core domain types
pub mod core;

// Game engine: board, keyboard, messages, turn controller
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
