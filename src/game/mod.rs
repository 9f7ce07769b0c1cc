//! Game engine
//!
//! Everything stateful about playing: the dictionary, the board, keyboard
//! memory, messages, and the turn controller that sequences reveals. The
//! engine is single-threaded and clock-free; callers pass the current time in.

pub mod board;
pub mod clock;
pub mod config;
pub mod dictionary;
pub mod host;
pub mod input;
pub mod keyboard;
pub mod messages;
pub mod schedule;
pub mod session;

pub use board::{Board, BoardError, FlipPhase, Row, Tile};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, GameConfig};
pub use dictionary::{Dictionary, DictionaryError};
pub use host::{SessionHost, Statistics};
pub use input::{Command, KEYBOARD_ROWS};
pub use keyboard::KeyboardMemory;
pub use messages::{Message, MessageQueue};
pub use schedule::{RevealAction, RevealSchedule, ScheduledAction, Scheduler};
pub use session::{Outcome, Rejection, Session, SessionEvent, SessionStatus, Snapshot, TurnState};
