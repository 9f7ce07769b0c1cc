//! TUI application state and logic

use super::rendering::{KeyArea, ui};
use crate::game::{
    Clock, Command, Dictionary, GameConfig, Outcome, SessionEvent, SessionHost, SystemClock,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Position};
use std::io;
use std::time::Duration;

/// Upper bound on how long the loop sleeps with nothing scheduled
const IDLE_REDRAW: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a> {
    pub host: SessionHost<'a, StdRng>,
    clock: SystemClock,
    /// On-screen key positions from the last draw, for mouse hit-testing
    pub key_areas: Vec<KeyArea>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, config: GameConfig, rng: StdRng) -> Self {
        Self {
            host: SessionHost::new(dictionary, config, rng),
            clock: SystemClock::new(),
            key_areas: Vec::new(),
            should_quit: false,
        }
    }

    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Run whatever the scheduler has due
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        let events = self.host.advance(self.now());
        for event in &events {
            match event {
                SessionEvent::Won { guesses } => tracing::info!(guesses, "won"),
                SessionEvent::Lost { secret } => tracing::info!(%secret, "lost"),
                SessionEvent::SessionEnded => tracing::debug!("next game mounted"),
                _ => tracing::trace!(?event, "session event"),
            }
        }
        events
    }

    /// How long to wait for input before the next scheduled step
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        let now = self.now();
        self.host
            .next_deadline()
            .map_or(IDLE_REDRAW, |due| due.saturating_sub(now).min(IDLE_REDRAW))
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Outcome> {
        let command = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.host.new_game();
                return None;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return None;
            }
            KeyCode::Enter => Command::Submit,
            KeyCode::Backspace => Command::Delete,
            KeyCode::Char(c) => Command::from_char(c)?,
            _ => return None,
        };
        Some(self.host.handle(command, self.now()))
    }

    /// Apply a click at terminal cell (`column`, `row`)
    pub fn handle_click(&mut self, column: u16, row: u16) -> Option<Outcome> {
        let position = Position::new(column, row);
        let label = self
            .key_areas
            .iter()
            .find(|key| key.rect.contains(position))?
            .label;
        let command = Command::from_key_label(label)?;
        Some(self.host.handle(command, self.now()))
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            self.handle_click(mouse.column, mouse.row);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.tick();

        let mut key_areas = Vec::new();
        terminal.draw(|f| key_areas = ui(f, &app))?;
        app.key_areas = key_areas;

        if event::poll(app.poll_timeout())? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key(key);
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(&["crane", "slate"])).unwrap()
    }

    fn current_word(app: &App) -> String {
        app.host
            .session()
            .board()
            .current_row()
            .map(crate::game::Row::word)
            .unwrap_or_default()
    }

    #[test]
    fn typing_and_deleting() {
        let dict = dictionary();
        let mut app = App::new(&dict, GameConfig::default(), StdRng::seed_from_u64(1));

        assert_eq!(app.handle_key(press(KeyCode::Char('S'))), Some(Outcome::Typed));
        app.handle_key(press(KeyCode::Char('l')));
        assert_eq!(app.handle_key(press(KeyCode::Char('7'))), None);
        assert_eq!(current_word(&app), "sl");

        assert_eq!(app.handle_key(press(KeyCode::Backspace)), Some(Outcome::Deleted));
        assert_eq!(current_word(&app), "s");
    }

    #[test]
    fn enter_submits() {
        let dict = dictionary();
        let mut app = App::new(&dict, GameConfig::default(), StdRng::seed_from_u64(1));
        assert!(matches!(
            app.handle_key(press(KeyCode::Enter)),
            Some(Outcome::Rejected(_))
        ));
    }

    #[test]
    fn control_keys() {
        let dict = dictionary();
        let mut app = App::new(&dict, GameConfig::default(), StdRng::seed_from_u64(1));

        app.handle_key(ctrl('n'));
        assert_eq!(app.host.session().generation(), 1);
        assert!(!app.should_quit);

        app.handle_key(ctrl('c'));
        assert!(app.should_quit);

        let mut app = App::new(&dict, GameConfig::default(), StdRng::seed_from_u64(1));
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn clicking_on_screen_keys() {
        let dict = dictionary();
        let mut app = App::new(&dict, GameConfig::default(), StdRng::seed_from_u64(1));
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        let mut key_areas = Vec::new();
        terminal.draw(|f| key_areas = ui(f, &app)).unwrap();
        app.key_areas = key_areas;
        assert_eq!(app.key_areas.len(), 28);

        let q = app.key_areas.iter().find(|k| k.label == "Q").unwrap().rect;
        assert_eq!(app.handle_click(q.x, q.y), Some(Outcome::Typed));
        assert_eq!(current_word(&app), "q");

        let delete = app.key_areas.iter().find(|k| k.label == "⌫").unwrap().rect;
        assert_eq!(
            app.handle_click(delete.x + delete.width - 1, delete.y),
            Some(Outcome::Deleted)
        );
        assert_eq!(app.handle_click(0, 0), None);
    }

    #[test]
    fn header_shows_the_game_number() {
        let dict = dictionary();
        let mut app = App::new(&dict, GameConfig::default(), StdRng::seed_from_u64(1));
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let screen = |terminal: &Terminal<TestBackend>| -> String {
            terminal.backend().buffer().content().iter().map(|c| c.symbol()).collect()
        };

        terminal.draw(|f| {
            ui(f, &app);
        })
        .unwrap();
        assert!(screen(&terminal).contains("Game 1"));

        app.handle_key(ctrl('n'));
        terminal.draw(|f| {
            ui(f, &app);
        })
        .unwrap();
        assert!(screen(&terminal).contains("Game 2"));
    }

    #[test]
    fn poll_timeout_is_bounded() {
        let dict = dictionary();
        let app = App::new(&dict, GameConfig::default(), StdRng::seed_from_u64(1));
        assert_eq!(app.poll_timeout(), IDLE_REDRAW);
    }
}
