//! Board state: rows of tiles and the typing cursor
//!
//! Rows are created lazily as the cursor reaches them. Every row before the
//! current one is committed, and no row after it holds a letter.

use crate::core::{Feedback, Verdict, WORD_LENGTH};
use thiserror::Error;

/// Why a row could not be committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("row has {filled} of {len} letters", len = WORD_LENGTH)]
    RowIncomplete { filled: usize },
    #[error("every row is already committed")]
    BoardFull,
}

/// Stage of a tile's flip animation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlipPhase {
    #[default]
    Still,
    /// Rotating away; the old face is still showing
    FlippingOut,
    /// Rotating back with the verdict colour applied
    FlippingIn,
}

/// A single letter cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub verdict: Verdict,
    pub phase: FlipPhase,
}

/// One guess worth of tiles
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    tiles: [Tile; WORD_LENGTH],
    committed: bool,
}

impl Row {
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LENGTH] {
        &self.tiles
    }

    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.committed
    }

    /// Letters typed so far, in order
    #[must_use]
    pub fn word(&self) -> String {
        self.tiles.iter().filter_map(|t| t.letter).collect()
    }

    /// Verdicts of a committed row
    #[must_use]
    pub fn feedback(&self) -> Option<Feedback> {
        self.committed
            .then(|| Feedback::new(self.tiles.map(|t| t.verdict)))
    }
}

/// The grid plus cursor
#[derive(Debug, Clone)]
pub struct Board {
    rows: Vec<Row>,
    max_rows: usize,
    row: usize,
    col: usize,
}

impl Board {
    /// An empty board with room for `max_rows` guesses
    #[must_use]
    pub fn new(max_rows: usize) -> Self {
        Self {
            rows: vec![Row::default()],
            max_rows,
            row: 0,
            col: 0,
        }
    }

    /// Rows created so far; at most `max_rows`
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    #[must_use]
    pub const fn current_row_index(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn current_col_index(&self) -> usize {
        self.col
    }

    /// The active row, or `None` once every row is committed
    #[must_use]
    pub fn current_row(&self) -> Option<&Row> {
        if self.is_complete() {
            None
        } else {
            self.rows.get(self.row)
        }
    }

    #[must_use]
    pub fn committed_count(&self) -> usize {
        self.rows.iter().filter(|r| r.committed).count()
    }

    /// True once `max_rows` rows are committed
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.row >= self.max_rows
    }

    #[must_use]
    pub const fn is_row_full(&self) -> bool {
        self.col == WORD_LENGTH
    }

    /// Write a letter at the cursor and advance it
    ///
    /// Returns `false` without changing anything if the row is full or the
    /// board is complete.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if self.is_complete() || self.is_row_full() {
            return false;
        }
        let col = self.col;
        self.rows[self.row].tiles[col].letter = Some(letter.to_ascii_lowercase());
        self.col += 1;
        true
    }

    /// Clear the tile before the cursor and step back
    ///
    /// Returns `false` at the start of the row.
    pub fn delete_letter(&mut self) -> bool {
        if self.is_complete() || self.col == 0 {
            return false;
        }
        self.col -= 1;
        self.rows[self.row].tiles[self.col].letter = None;
        true
    }

    /// Set a tile's flip phase on row `row`
    ///
    /// Only the active, uncommitted row animates; anything else is a no-op.
    pub(crate) fn set_phase(&mut self, row: usize, col: usize, phase: FlipPhase) -> bool {
        let Some(tile) = self.revealing_tile_mut(row, col) else {
            return false;
        };
        tile.phase = phase;
        true
    }

    /// Colour a tile on row `row` mid-flip
    ///
    /// Committed rows keep their frozen verdicts.
    pub(crate) fn reveal_tile(&mut self, row: usize, col: usize, verdict: Verdict) -> bool {
        let Some(tile) = self.revealing_tile_mut(row, col) else {
            return false;
        };
        tile.verdict = verdict;
        tile.phase = FlipPhase::FlippingIn;
        true
    }

    fn revealing_tile_mut(&mut self, row: usize, col: usize) -> Option<&mut Tile> {
        if self.is_complete() || row != self.row {
            return None;
        }
        self.rows.get_mut(row)?.tiles.get_mut(col)
    }

    /// Freeze the active row with its verdicts and move to the next row
    ///
    /// # Errors
    ///
    /// Fails if the row is not exactly full or every row is already committed.
    pub fn commit_row(&mut self, feedback: &Feedback) -> Result<usize, BoardError> {
        if self.is_complete() {
            return Err(BoardError::BoardFull);
        }
        if !self.is_row_full() {
            return Err(BoardError::RowIncomplete { filled: self.col });
        }

        let committed = self.row;
        let row = &mut self.rows[committed];
        for (tile, &verdict) in row.tiles.iter_mut().zip(feedback.verdicts()) {
            tile.verdict = verdict;
            tile.phase = FlipPhase::Still;
        }
        row.committed = true;

        self.row += 1;
        self.col = 0;
        if !self.is_complete() {
            self.rows.push(Row::default());
        }
        Ok(committed)
    }
}
