//! Terminal-agnostic input commands
//!
//! Physical keys and on-screen key labels both normalize to [`Command`]. No
//! game logic happens here.

/// A player command forwarded to the turn controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Type a letter (always lowercase ASCII)
    Letter(char),
    /// Submit the current row
    Submit,
    /// Delete the letter before the cursor
    Delete,
}

/// Label of the on-screen submit key
pub const ENTER_LABEL: &str = "ENTER";
/// Label of the on-screen delete key
pub const DELETE_LABEL: &str = "⌫";

/// On-screen keyboard, top row first
pub const KEYBOARD_ROWS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &[ENTER_LABEL, "Z", "X", "C", "V", "B", "N", "M", DELETE_LABEL],
];

impl Command {
    /// Map a typed character; letters are case-insensitive
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            c if c.is_ascii_alphabetic() => Some(Self::Letter(c.to_ascii_lowercase())),
            '\n' | '\r' => Some(Self::Submit),
            '\u{8}' | '\u{7f}' => Some(Self::Delete),
            _ => None,
        }
    }

    /// Map an on-screen key label
    #[must_use]
    pub fn from_key_label(label: &str) -> Option<Self> {
        match label {
            ENTER_LABEL => Some(Self::Submit),
            DELETE_LABEL => Some(Self::Delete),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Self::Letter(c.to_ascii_lowercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}
