//! Terminal output formatting
//!
//! Colored board printing for line mode and the score command.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_score_result, print_share, print_statistics};
pub use formatters::share_grid;
