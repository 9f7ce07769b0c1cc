//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Each line is a whole guess; reveal timing
//! runs on a virtual clock that jumps straight to the next deadline.

use crate::core::WORD_LENGTH;
use crate::game::{
    Clock, Command, ManualClock, Outcome, SessionEvent, SessionHost, SessionStatus,
};
use crate::output::{print_board, print_keyboard, print_share, print_statistics};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Type `guess` into the live session, submit it, and run the reveal to completion
///
/// Whatever is already on the current row is cleared first. Returns the
/// submit outcome and every event the reveal produced, in order.
pub fn submit_guess<R: Rng>(
    host: &mut SessionHost<'_, R>,
    clock: &ManualClock,
    guess: &str,
) -> (Outcome, Vec<SessionEvent>) {
    for _ in 0..WORD_LENGTH {
        host.handle(Command::Delete, clock.now());
    }
    for command in guess.chars().filter_map(Command::from_char) {
        host.handle(command, clock.now());
    }

    let outcome = host.handle(Command::Submit, clock.now());
    let mut events = Vec::new();
    while host.has_pending_actions() {
        let Some(deadline) = host.next_deadline() else {
            break;
        };
        clock.advance_to(deadline);
        events.extend(host.advance(clock.now()));
        if events
            .iter()
            .any(|e| matches!(e, SessionEvent::Won { .. } | SessionEvent::Lost { .. }))
        {
            // Leave the end delay pending so the finished board can be shown
            break;
        }
    }
    (outcome, events)
}

/// Let the end delay elapse so the host mounts the next session
fn finish_session<R: Rng>(host: &mut SessionHost<'_, R>, clock: &ManualClock) {
    while host.has_pending_actions() {
        let Some(deadline) = host.next_deadline() else {
            break;
        };
        clock.advance_to(deadline);
        host.advance(clock.now());
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<R: Rng>(mut host: SessionHost<'_, R>) -> io::Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Line Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the five-letter word in {} tries.",
        host.config().max_guesses
    );
    println!("Commands: 'quit' to exit, 'new' for new game, 'stats' for statistics\n");

    let clock = ManualClock::new();

    loop {
        let turn = host.session().board().committed_count() + 1;
        let Some(input) = get_user_input(&format!("Guess {turn}"))? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                host.new_game();
                println!("\n🔄 New game started!\n");
                continue;
            }
            "stats" => {
                print_statistics(host.stats());
                continue;
            }
            "" => continue,
            _ => {}
        }

        if input.chars().count() > WORD_LENGTH {
            println!("{}\n", "❌ Too many letters".red());
            continue;
        }

        let (outcome, events) = submit_guess(&mut host, &clock, &input);
        if let Outcome::Rejected(_) = outcome {
            if let Some(message) = host.session().messages().latest() {
                println!("{}\n", format!("❌ {}", message.text).red());
            }
            continue;
        }

        print_board(host.session().board());
        print_keyboard(host.session().keyboard());

        let status = host.session().status();
        if events
            .iter()
            .any(|e| matches!(e, SessionEvent::Won { .. } | SessionEvent::Lost { .. }))
        {
            if let Some(message) = host.session().messages().latest() {
                let banner = match status {
                    SessionStatus::Won => format!("🎉 {}", message.text).bright_green().bold(),
                    SessionStatus::Lost | SessionStatus::InProgress => {
                        format!("The word was {}", message.text).bright_yellow().bold()
                    }
                };
                println!("{banner}\n");
            }
            print_share(host.session().board(), status);
            finish_session(&mut host, &clock);
            println!("\n🔄 New game started!\n");
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Dictionary, GameConfig};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn host(dict: &Dictionary) -> SessionHost<'_, StdRng> {
        SessionHost::new(dict, GameConfig::default(), StdRng::seed_from_u64(9))
    }

    #[test]
    fn full_guess_reveals_and_commits() {
        let dict = Dictionary::new(words_from_slice(&["crane", "react"])).unwrap();
        let mut host = host(&dict);
        let clock = ManualClock::new();

        let guess = if host.session().secret().text() == "crane" {
            "react"
        } else {
            "crane"
        };
        let (outcome, events) = submit_guess(&mut host, &clock, guess);

        assert_eq!(outcome, Outcome::RevealStarted);
        assert!(events
            .iter()
            .any(|e| matches!(e, SessionEvent::GuessCommitted { row: 0, .. })));
        assert_eq!(clock.now().as_millis(), 1800);
        assert!(!host.session().input_locked());
    }

    #[test]
    fn short_guess_is_rejected_without_advancing_time() {
        let dict = Dictionary::new(words_from_slice(&["crane"])).unwrap();
        let mut host = host(&dict);
        let clock = ManualClock::new();

        let (outcome, events) = submit_guess(&mut host, &clock, "cra");
        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert!(events.is_empty());
        assert_eq!(clock.now().as_millis(), 0);
    }

    #[test]
    fn rejected_letters_are_cleared_before_next_guess() {
        let dict = Dictionary::new(words_from_slice(&["crane"])).unwrap();
        let mut host = host(&dict);
        let clock = ManualClock::new();

        let (outcome, _) = submit_guess(&mut host, &clock, "zzzzz");
        assert!(matches!(outcome, Outcome::Rejected(_)));

        let (outcome, events) = submit_guess(&mut host, &clock, "crane");
        assert_eq!(outcome, Outcome::RevealStarted);
        assert!(events.contains(&SessionEvent::Won { guesses: 1 }));
    }

    #[test]
    fn win_leaves_end_delay_pending_until_finished() {
        let dict = Dictionary::new(words_from_slice(&["crane"])).unwrap();
        let mut host = host(&dict);
        let clock = ManualClock::new();

        submit_guess(&mut host, &clock, "crane");
        assert_eq!(host.session().status(), SessionStatus::Won);
        assert!(host.has_pending_actions());

        finish_session(&mut host, &clock);
        assert_eq!(host.session().generation(), 1);
        assert_eq!(host.session().status(), SessionStatus::InProgress);
        assert_eq!(host.stats().games_won, 1);
    }
}
