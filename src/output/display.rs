//! Display functions for command results and the line-mode board

use super::formatters::{distribution_bars, share_grid};
use crate::commands::ScoreResult;
use crate::core::Verdict;
use crate::game::{Board, KEYBOARD_ROWS, KeyboardMemory, SessionStatus, Statistics, Tile};
use colored::{ColoredString, Colorize};

/// Color one letter cell by verdict
fn paint(letter: char, verdict: Verdict) -> ColoredString {
    let cell = format!(" {} ", letter.to_ascii_uppercase());
    match verdict {
        Verdict::Correct => cell.black().on_green().bold(),
        Verdict::Present => cell.black().on_yellow().bold(),
        Verdict::Absent => cell.white().on_bright_black(),
        Verdict::Unrevealed => cell.bold(),
    }
}

fn paint_tile(tile: &Tile) -> ColoredString {
    tile.letter.map_or_else(
        || " · ".bright_black(),
        |letter| paint(letter, tile.verdict),
    )
}

/// Print the result of scoring a guess
pub fn print_score_result(result: &ScoreResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}",
        result.secret.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let cells: String = result
        .feedback
        .verdicts()
        .iter()
        .enumerate()
        .map(|(i, &v)| paint(result.guess.char_at(i), v).to_string())
        .collect();
    println!("\n  {cells}   {}", result.feedback);

    if result.feedback.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    }
}

/// Print every row of the board, blank rows included
pub fn print_board(board: &Board) {
    println!();
    for index in 0..board.max_rows() {
        let line: String = board.rows().get(index).map_or_else(
            || " · ".repeat(5).bright_black().to_string(),
            |row| row.tiles().iter().map(|t| paint_tile(t).to_string()).collect(),
        );
        println!("  {line}");
    }
    println!();
}

/// Print the QWERTY keyboard colored by what is known about each letter
pub fn print_keyboard(keyboard: &KeyboardMemory) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .iter()
            .filter_map(|label| {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(paint(c, keyboard.get(c.to_ascii_lowercase())).to_string()),
                    _ => None,
                }
            })
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print the end-of-game share grid
pub fn print_share(board: &Board, status: SessionStatus) {
    println!("{}", share_grid(board, status));
}

/// Print session statistics
pub fn print_statistics(stats: &Statistics) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win rate:        {}",
        format!("{:.0}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    if stats.games_won > 0 {
        println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
        let bars = distribution_bars(&stats.guess_distribution, 24);
        for (i, (bar, count)) in bars.iter().zip(&stats.guess_distribution).enumerate() {
            println!("   {}: {} {count}", i + 1, bar.green());
        }
    }
    println!();
}
