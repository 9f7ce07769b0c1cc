//! Formatting utilities for terminal output

use crate::game::Board;
use crate::game::SessionStatus;

/// Emoji grid of every committed row, headed like "Wordle 3/6"
///
/// A lost game is scored as "X/6".
#[must_use]
pub fn share_grid(board: &Board, status: SessionStatus) -> String {
    let committed: Vec<String> = board
        .rows()
        .iter()
        .filter_map(crate::game::Row::feedback)
        .map(crate::core::Feedback::to_emoji)
        .collect();

    let score = match status {
        SessionStatus::Lost => "X".to_string(),
        SessionStatus::Won | SessionStatus::InProgress => committed.len().to_string(),
    };

    let mut out = format!("Wordle {score}/{}", board.max_rows());
    for line in committed {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One bar per guess count, scaled to the most common count
#[must_use]
pub fn distribution_bars(distribution: &[usize], width: usize) -> Vec<String> {
    let max = distribution.iter().copied().max().unwrap_or(0) as f64;
    distribution
        .iter()
        .map(|&count| create_progress_bar(count as f64, max, width))
        .collect()
}
