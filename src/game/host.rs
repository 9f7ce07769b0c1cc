//! Session host: owns the live session and replaces it when it ends
//!
//! The host is the single scheduler loop. It routes due actions to the live
//! session, mounts a fresh session (new secret, new board, next generation)
//! on the end notification, and keeps win statistics for the process lifetime.

use super::config::GameConfig;
use super::dictionary::Dictionary;
use super::input::Command;
use super::schedule::Scheduler;
use super::session::{Outcome, Session, SessionEvent, Snapshot};
use rand::Rng;
use std::time::Duration;

/// In-memory results across sessions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    /// `guess_distribution[n - 1]` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    fn new(max_guesses: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_guesses],
            ..Self::default()
        }
    }

    fn record_win(&mut self, guesses: usize) {
        self.games_played += 1;
        self.games_won += 1;
        if let Some(slot) = self.guess_distribution.get_mut(guesses.saturating_sub(1)) {
            *slot += 1;
        }
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);
    }

    fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}

pub struct SessionHost<'a, R: Rng> {
    dictionary: &'a Dictionary,
    config: GameConfig,
    rng: R,
    scheduler: Scheduler,
    session: Session<'a>,
    stats: Statistics,
}

impl<'a, R: Rng> SessionHost<'a, R> {
    /// Mount the first session
    pub fn new(dictionary: &'a Dictionary, config: GameConfig, mut rng: R) -> Self {
        let session = Session::start(dictionary, config, 0, &mut rng);
        Self {
            dictionary,
            config,
            rng,
            scheduler: Scheduler::new(),
            session,
            stats: Statistics::new(config.max_guesses),
        }
    }

    /// Forward a command to the live session
    pub fn handle(&mut self, command: Command, now: Duration) -> Outcome {
        self.session.handle(command, now, &mut self.scheduler)
    }

    /// Run everything due by `now`
    ///
    /// A session end remounts a fresh session before returning; the
    /// `SessionEnded` event is still reported.
    pub fn advance(&mut self, now: Duration) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        while let Some(action) = self.scheduler.pop_due(now) {
            events.extend(self.session.apply(action, &mut self.scheduler));
        }
        events.extend(self.session.tick(now));

        for event in &events {
            match event {
                SessionEvent::Won { guesses } => self.stats.record_win(*guesses),
                SessionEvent::Lost { .. } => self.stats.record_loss(),
                _ => {}
            }
        }

        if self.session.has_ended() {
            self.remount();
        }
        events
    }

    /// Abandon the live session and start another
    ///
    /// Reveal steps still queued for the old session are discarded when due.
    pub fn new_game(&mut self) {
        tracing::debug!(generation = self.session.generation(), "session abandoned");
        self.remount();
    }

    fn remount(&mut self) {
        let generation = self.session.generation() + 1;
        self.session = Session::start(self.dictionary, self.config, generation, &mut self.rng);
    }

    /// Earliest instant at which [`SessionHost::advance`] has work to do
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.scheduler.next_due(), self.session.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// True while reveal or end-of-session steps are queued
    #[must_use]
    pub fn has_pending_actions(&self) -> bool {
        !self.scheduler.is_empty()
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.session.snapshot()
    }

    #[must_use]
    pub const fn session(&self) -> &Session<'a> {
        &self.session
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }
}
