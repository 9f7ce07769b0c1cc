//! Declarative reveal schedule and the single scheduler that runs it
//!
//! A submitted guess is turned into a list of `(offset, action)` pairs up
//! front. Offsets are absolute from the moment of submission; no action is
//! chained off another's completion. The scheduler stamps each entry with the
//! session generation so actions left over from an abandoned session can be
//! recognised and dropped.

use super::config::GameConfig;
use crate::core::{Feedback, Verdict, WORD_LENGTH};
use std::time::Duration;

/// Something the session does when its time comes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    /// Tile starts rotating away
    FlipOut { row: usize, col: usize },
    /// Tile shows its verdict and rotates back
    Recolor {
        row: usize,
        col: usize,
        verdict: Verdict,
    },
    /// Tile animation finished
    Settle { row: usize, col: usize },
    /// Apply keyboard updates, commit the row, decide win/loss
    Finalize,
    /// Won/lost display time is over
    EndSession,
}

/// Reveal timeline for one guess, relative to submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealSchedule {
    entries: Vec<(Duration, RevealAction)>,
}

impl RevealSchedule {
    /// Build the timeline for `feedback` submitted on board row `row`
    ///
    /// Tile `i` starts at `stride * i`, with its three phases at `0`, `phase`
    /// and `2 * phase` from that start. The row is finalized at
    /// `stride * L + buffer`, which a validated config keeps at or after the
    /// last tile settles.
    #[must_use]
    pub fn for_guess(row: usize, feedback: &Feedback, config: &GameConfig) -> Self {
        let stride = config.reveal_stride();
        let phase = config.flip_phase();
        let mut entries = Vec::with_capacity(WORD_LENGTH * 3 + 1);

        for (col, &verdict) in feedback.verdicts().iter().enumerate() {
            let start = stride * col as u32;
            entries.push((start, RevealAction::FlipOut { row, col }));
            entries.push((start + phase, RevealAction::Recolor { row, col, verdict }));
            entries.push((start + phase * 2, RevealAction::Settle { row, col }));
        }
        entries.push((config.finalize_offset(), RevealAction::Finalize));

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[(Duration, RevealAction)] {
        &self.entries
    }
}

/// An action waiting in the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAction {
    pub due: Duration,
    pub generation: u64,
    pub action: RevealAction,
}

/// Time-ordered queue of pending actions
///
/// Entries due at the same instant run in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    // Sorted by (due, seq)
    pending: Vec<(Duration, u64, ScheduledAction)>,
    seq: u64,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a single action at absolute time `due`
    pub fn schedule(&mut self, due: Duration, generation: u64, action: RevealAction) {
        let seq = self.seq;
        self.seq += 1;
        let at = self
            .pending
            .partition_point(|&(d, s, _)| (d, s) <= (due, seq));
        self.pending.insert(
            at,
            (
                due,
                seq,
                ScheduledAction {
                    due,
                    generation,
                    action,
                },
            ),
        );
    }

    /// Queue a whole reveal schedule starting at `start`
    pub fn schedule_reveal(&mut self, start: Duration, generation: u64, schedule: &RevealSchedule) {
        for &(offset, action) in schedule.entries() {
            self.schedule(start + offset, generation, action);
        }
    }

    /// Remove and return the earliest action due by `now`
    pub fn pop_due(&mut self, now: Duration) -> Option<ScheduledAction> {
        match self.pending.first() {
            Some(&(due, _, _)) if due <= now => Some(self.pending.remove(0).2),
            _ => None,
        }
    }

    /// When the earliest pending action is due
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.first().map(|&(due, _, _)| due)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
