//! Turn controller and reveal sequencer
//!
//! A `Session` owns everything about one game: the secret, the board, keyboard
//! memory, pending messages, and the input lock. Commands arrive through
//! [`Session::handle`]; deferred reveal steps come back through
//! [`Session::apply`] when the shared [`Scheduler`] says they are due.
//!
//! ```text
//! Idle --submit--> Evaluating --valid--> Revealing --finalize--> Idle | Won | Lost
//!                      |
//!                      +--not a word--> Idle
//! ```

use super::board::{Board, FlipPhase};
use super::config::GameConfig;
use super::dictionary::Dictionary;
use super::input::Command;
use super::keyboard::KeyboardMemory;
use super::messages::MessageQueue;
use super::schedule::{RevealAction, RevealSchedule, ScheduledAction, Scheduler};
use crate::core::{Feedback, Verdict, Word};
use rand::Rng;
use std::time::Duration;

pub const NOT_ENOUGH_LETTERS: &str = "Not enough letters";
pub const NOT_IN_WORD_LIST: &str = "Not in word list";

/// Position of the turn controller's state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Accepting input
    Idle,
    /// A full row was submitted and is being checked
    Evaluating,
    /// Tiles are flipping; input is locked
    Revealing,
    Won,
    Lost,
}

/// Coarse outcome of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won,
    Lost,
}

/// A recoverable submission error, shown to the player as a message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotEnoughLetters,
    NotInWordList,
}

/// What a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Typed,
    Deleted,
    RevealStarted,
    Rejected(Rejection),
    /// No effect: locked input, terminal session, full row, or empty row
    Ignored,
}

/// Observable change produced by a scheduled action or a tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    TileFlipping {
        row: usize,
        col: usize,
    },
    TileRevealed {
        row: usize,
        col: usize,
        verdict: Verdict,
    },
    TileSettled {
        row: usize,
        col: usize,
    },
    GuessCommitted {
        row: usize,
        word: Word,
        feedback: Feedback,
    },
    Won {
        guesses: usize,
    },
    Lost {
        secret: Word,
    },
    /// Fired once, after the win/loss display delay
    SessionEnded,
    MessageExpired {
        id: u64,
    },
}

/// Read-only view handed to renderers
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'s> {
    pub generation: u64,
    pub board: &'s Board,
    pub keyboard: &'s KeyboardMemory,
    pub status: SessionStatus,
    pub messages: &'s MessageQueue,
    pub revealing: bool,
    pub shaking_row: Option<usize>,
    pub popped_tile: Option<(usize, usize)>,
    /// Exposed only once the session is over
    pub secret: Option<&'s Word>,
}

#[derive(Debug, Clone)]
struct PendingGuess {
    word: Word,
    feedback: Feedback,
}

/// One game, from first keypress to the end notification
#[derive(Debug)]
pub struct Session<'a> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    generation: u64,
    secret: Word,
    board: Board,
    keyboard: KeyboardMemory,
    messages: MessageQueue,
    state: TurnState,
    input_locked: bool,
    pending: Option<PendingGuess>,
    shake_until: Option<(usize, Duration)>,
    pop_until: Option<(usize, usize, Duration)>,
    ended: bool,
}

impl<'a> Session<'a> {
    /// Start a session with a secret drawn from `dictionary`
    pub fn start<R: Rng>(
        dictionary: &'a Dictionary,
        config: GameConfig,
        generation: u64,
        rng: &mut R,
    ) -> Self {
        let secret = dictionary.pick_secret_word(rng).clone();
        Self::with_secret(dictionary, config, generation, secret)
    }

    /// Start a session with a known secret
    #[must_use]
    pub fn with_secret(
        dictionary: &'a Dictionary,
        config: GameConfig,
        generation: u64,
        secret: Word,
    ) -> Self {
        tracing::debug!(generation, secret = %secret, "session started");
        Self {
            dictionary,
            config,
            generation,
            secret,
            board: Board::new(config.max_guesses),
            keyboard: KeyboardMemory::new(),
            messages: MessageQueue::new(config.message_tick()),
            state: TurnState::Idle,
            input_locked: false,
            pending: None,
            shake_until: None,
            pop_until: None,
            ended: false,
        }
    }

    /// Apply a player command
    ///
    /// Commands arriving while a reveal runs or after the session is decided
    /// are ignored without any message.
    pub fn handle(&mut self, command: Command, now: Duration, scheduler: &mut Scheduler) -> Outcome {
        if self.input_locked || self.state != TurnState::Idle {
            tracing::trace!(?command, state = ?self.state, "input locked, command ignored");
            return Outcome::Ignored;
        }

        match command {
            Command::Letter(letter) => {
                if self.board.append_letter(letter) {
                    let row = self.board.current_row_index();
                    let col = self.board.current_col_index() - 1;
                    self.pop_until = Some((row, col, now + self.config.pop()));
                    Outcome::Typed
                } else {
                    Outcome::Ignored
                }
            }
            Command::Delete => {
                if self.board.delete_letter() {
                    Outcome::Deleted
                } else {
                    Outcome::Ignored
                }
            }
            Command::Submit => self.submit(now, scheduler),
        }
    }

    fn submit(&mut self, now: Duration, scheduler: &mut Scheduler) -> Outcome {
        if !self.board.is_row_full() {
            tracing::debug!(
                filled = self.board.current_col_index(),
                "submit rejected: not enough letters"
            );
            self.messages.push(NOT_ENOUGH_LETTERS, now);
            return Outcome::Rejected(Rejection::NotEnoughLetters);
        }

        self.state = TurnState::Evaluating;
        let text = self
            .board
            .current_row()
            .map(super::board::Row::word)
            .unwrap_or_default();

        let guess = match Word::new(text.as_str()) {
            Ok(word) if self.dictionary.is_valid_word(word.text()) => word,
            _ => {
                tracing::debug!(guess = %text, "submit rejected: not in word list");
                self.messages.push(NOT_IN_WORD_LIST, now);
                self.shake_until = Some((self.board.current_row_index(), now + self.config.shake()));
                self.state = TurnState::Idle;
                return Outcome::Rejected(Rejection::NotInWordList);
            }
        };

        let feedback = Feedback::score(&guess, &self.secret);
        let row = self.board.current_row_index();
        let schedule = RevealSchedule::for_guess(row, &feedback, &self.config);
        scheduler.schedule_reveal(now, self.generation, &schedule);
        tracing::debug!(
            generation = self.generation,
            row,
            guess = %guess,
            feedback = %feedback,
            "reveal started"
        );

        self.pending = Some(PendingGuess {
            word: guess,
            feedback,
        });
        self.state = TurnState::Revealing;
        self.input_locked = true;
        Outcome::RevealStarted
    }

    /// Run one scheduled action
    ///
    /// Actions stamped with another session's generation are dropped.
    pub fn apply(&mut self, scheduled: ScheduledAction, scheduler: &mut Scheduler) -> Vec<SessionEvent> {
        if scheduled.generation != self.generation {
            tracing::debug!(
                stale = scheduled.generation,
                live = self.generation,
                action = ?scheduled.action,
                "discarding action from a previous session"
            );
            return Vec::new();
        }

        match scheduled.action {
            RevealAction::FlipOut { row, col } => {
                if self.board.set_phase(row, col, FlipPhase::FlippingOut) {
                    vec![SessionEvent::TileFlipping { row, col }]
                } else {
                    self.skip_tile_step(scheduled.action)
                }
            }
            RevealAction::Recolor { row, col, verdict } => {
                if self.board.reveal_tile(row, col, verdict) {
                    vec![SessionEvent::TileRevealed { row, col, verdict }]
                } else {
                    self.skip_tile_step(scheduled.action)
                }
            }
            RevealAction::Settle { row, col } => {
                if self.board.set_phase(row, col, FlipPhase::Still) {
                    vec![SessionEvent::TileSettled { row, col }]
                } else {
                    self.skip_tile_step(scheduled.action)
                }
            }
            RevealAction::Finalize => self.finalize(scheduled.due, scheduler),
            RevealAction::EndSession => {
                if self.ended {
                    Vec::new()
                } else {
                    self.ended = true;
                    tracing::debug!(generation = self.generation, "session ended");
                    vec![SessionEvent::SessionEnded]
                }
            }
        }
    }

    // Committed rows are frozen; a late tile step must not leak onto the next row
    fn skip_tile_step(&self, action: RevealAction) -> Vec<SessionEvent> {
        tracing::trace!(generation = self.generation, ?action, "tile step on a settled row skipped");
        Vec::new()
    }

    fn finalize(&mut self, at: Duration, scheduler: &mut Scheduler) -> Vec<SessionEvent> {
        let Some(PendingGuess { word, feedback }) = self.pending.take() else {
            tracing::warn!("finalize fired with no guess pending");
            return Vec::new();
        };

        self.keyboard.apply_guess(&word, &feedback);
        let row = match self.board.commit_row(&feedback) {
            Ok(row) => row,
            Err(e) => {
                tracing::warn!(error = %e, "could not commit revealed row");
                self.state = TurnState::Idle;
                self.input_locked = false;
                return Vec::new();
            }
        };

        let mut events = vec![SessionEvent::GuessCommitted {
            row,
            word,
            feedback,
        }];

        if feedback.is_perfect() {
            let guesses = row + 1;
            self.state = TurnState::Won;
            self.messages.push(celebration(guesses), at);
            scheduler.schedule(at + self.config.end_delay(), self.generation, RevealAction::EndSession);
            tracing::info!(generation = self.generation, guesses, "session won");
            events.push(SessionEvent::Won { guesses });
        } else if self.board.is_complete() {
            self.state = TurnState::Lost;
            self.messages.push(self.secret.text().to_uppercase(), at);
            scheduler.schedule(at + self.config.end_delay(), self.generation, RevealAction::EndSession);
            tracing::info!(generation = self.generation, secret = %self.secret, "session lost");
            events.push(SessionEvent::Lost {
                secret: self.secret.clone(),
            });
        } else {
            self.state = TurnState::Idle;
            self.input_locked = false;
        }
        events
    }

    /// Evict due messages and expire transient highlights
    pub fn tick(&mut self, now: Duration) -> Vec<SessionEvent> {
        if self.shake_until.is_some_and(|(_, until)| until <= now) {
            self.shake_until = None;
        }
        if self.pop_until.is_some_and(|(_, _, until)| until <= now) {
            self.pop_until = None;
        }
        self.messages
            .advance(now)
            .into_iter()
            .map(|m| SessionEvent::MessageExpired { id: m.id })
            .collect()
    }

    /// Earliest instant at which [`Session::tick`] has work to do
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        [
            self.messages.next_eviction(),
            self.shake_until.map(|(_, until)| until),
            self.pop_until.map(|(_, _, until)| until),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            generation: self.generation,
            board: &self.board,
            keyboard: &self.keyboard,
            status: self.status(),
            messages: &self.messages,
            revealing: self.is_revealing(),
            shaking_row: self.shake_until.map(|(row, _)| row),
            popped_tile: self.pop_until.map(|(row, col, _)| (row, col)),
            secret: self.revealed_secret(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        match self.state {
            TurnState::Won => SessionStatus::Won,
            TurnState::Lost => SessionStatus::Lost,
            TurnState::Idle | TurnState::Evaluating | TurnState::Revealing => {
                SessionStatus::InProgress
            }
        }
    }

    #[must_use]
    pub const fn state(&self) -> TurnState {
        self.state
    }

    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.state == TurnState::Revealing
    }

    #[must_use]
    pub const fn input_locked(&self) -> bool {
        self.input_locked
    }

    #[must_use]
    pub const fn has_ended(&self) -> bool {
        self.ended
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardMemory {
        &self.keyboard
    }

    #[must_use]
    pub const fn messages(&self) -> &MessageQueue {
        &self.messages
    }

    pub(crate) const fn secret(&self) -> &Word {
        &self.secret
    }

    /// The secret, once the session is won or lost
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Word> {
        matches!(self.state, TurnState::Won | TurnState::Lost).then_some(&self.secret)
    }
}

fn celebration(guesses: usize) -> &'static str {
    match guesses {
        1 => "Genius",
        2 => "Magnificent",
        3 => "Impressive",
        4 => "Splendid",
        5 => "Great",
        6 => "Phew",
        _ => "Solved",
    }
}
