//! TUI rendering with ratatui
//!
//! Draws the board, the on-screen keyboard, transient messages, and a status
//! bar from a session snapshot.

use super::app::App;
use crate::core::Verdict;
use crate::game::{FlipPhase, KEYBOARD_ROWS, KeyboardMemory, Snapshot, Statistics, Tile};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Where an on-screen key was drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyArea {
    pub rect: Rect,
    pub label: &'static str,
}

/// Main UI rendering function
///
/// Returns the on-screen key positions so clicks can be mapped back to keys.
pub fn ui(f: &mut Frame, app: &App) -> Vec<KeyArea> {
    let snapshot = app.host.snapshot();
    let board_height = snapshot.board.max_rows() as u16 + 2;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Length(3),            // Messages
            Constraint::Length(5),            // Keyboard
            Constraint::Min(0),               // Spacer
            Constraint::Length(1),            // Status bar
        ])
        .split(f.area());

    render_header(f, snapshot.generation, chunks[0]);
    render_board(f, &snapshot, chunks[1]);
    render_messages(f, &snapshot, chunks[2]);
    let keys = render_keyboard(f, snapshot.keyboard, chunks[3]);
    render_status(f, app.host.stats(), chunks[5]);
    keys
}

/// Header line; generations count from zero, games from one
fn header_title(generation: u64) -> String {
    format!("W O R D L E  ·  Game {}", generation + 1)
}

fn render_header(f: &mut Frame, generation: u64, area: Rect) {
    let header = Paragraph::new(header_title(generation))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Background and foreground for a revealed verdict
const fn verdict_colors(verdict: Verdict) -> Option<(Color, Color)> {
    match verdict {
        Verdict::Correct => Some((Color::Green, Color::Black)),
        Verdict::Present => Some((Color::Yellow, Color::Black)),
        Verdict::Absent => Some((Color::DarkGray, Color::White)),
        Verdict::Unrevealed => None,
    }
}

fn tile_span(tile: &Tile, popped: bool, shaking: bool) -> Span<'static> {
    let Some(letter) = tile.letter else {
        return Span::styled(" · ", Style::default().fg(Color::DarkGray));
    };
    let text = format!(" {} ", letter.to_ascii_uppercase());

    let mut style = Style::default().add_modifier(Modifier::BOLD);
    match (tile.phase, verdict_colors(tile.verdict)) {
        // Mid-flip: edge-on, the face is hidden
        (FlipPhase::FlippingOut, _) => {
            return Span::styled(" ─ ", Style::default().fg(Color::Gray));
        }
        (_, Some((bg, fg))) => style = style.bg(bg).fg(fg),
        (_, None) => {
            style = style.fg(Color::White);
            if popped {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if shaking {
                style = style.fg(Color::Red);
            }
        }
    }
    Span::styled(text, style)
}

fn render_board(f: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let board = snapshot.board;
    let lines: Vec<Line> = (0..board.max_rows())
        .map(|index| {
            let Some(row) = board.rows().get(index) else {
                return Line::from(Span::styled(
                    " · ".repeat(5),
                    Style::default().fg(Color::DarkGray),
                ));
            };
            let shaking = snapshot.shaking_row == Some(index);
            let mut spans: Vec<Span> = row
                .tiles()
                .iter()
                .enumerate()
                .map(|(col, tile)| tile_span(tile, snapshot.popped_tile == Some((index, col)), shaking))
                .collect();
            // Nudge a rejected row sideways while it shakes
            if shaking {
                spans.insert(0, Span::raw("  "));
            }
            Line::from(spans)
        })
        .collect();

    let title = if snapshot.revealing { " Revealing… " } else { " Board " };
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, snapshot: &Snapshot<'_>, area: Rect) {
    let spans: Vec<Span> = snapshot
        .messages
        .iter()
        .map(|msg| {
            Span::styled(
                format!(" {} ", msg.text),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect();

    let line = if spans.is_empty() {
        snapshot.secret.map_or_else(Line::default, |secret| {
            Line::from(format!("Answer: {}", secret.text().to_uppercase()))
        })
    } else {
        Line::from(spans)
    };

    let messages = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(messages, area);
}

fn key_style(keyboard: &KeyboardMemory, label: &str) -> Style {
    let mut chars = label.chars();
    let verdict = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => keyboard.get(c.to_ascii_lowercase()),
        _ => Verdict::Unrevealed,
    };
    verdict_colors(verdict).map_or_else(
        || Style::default().fg(Color::Black).bg(Color::Gray),
        |(bg, fg)| Style::default().fg(fg).bg(bg),
    )
    .add_modifier(Modifier::BOLD)
}

fn render_keyboard(f: &mut Frame, keyboard: &KeyboardMemory, area: Rect) -> Vec<KeyArea> {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut keys = Vec::new();
    for (offset, row) in KEYBOARD_ROWS.iter().enumerate() {
        let y = inner.y + offset as u16;
        if y >= inner.bottom() {
            break;
        }

        let widths: Vec<u16> = row.iter().map(|label| label.chars().count() as u16 + 2).collect();
        let total = widths.iter().sum::<u16>() + widths.len().saturating_sub(1) as u16;
        let mut x = inner.x + inner.width.saturating_sub(total) / 2;

        for (&label, width) in row.iter().zip(widths) {
            let rect = Rect::new(x, y, width, 1).intersection(inner);
            if rect.width > 0 {
                let key = Paragraph::new(format!(" {label} ")).style(key_style(keyboard, label));
                f.render_widget(key, rect);
                keys.push(KeyArea { rect, label });
            }
            x = x.saturating_add(width + 1);
        }
    }
    keys
}

fn render_status(f: &mut Frame, stats: &Statistics, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        stats.games_played,
        stats.win_rate(),
        stats.current_streak
    );
    f.render_widget(Paragraph::new(stats_text).alignment(Alignment::Center), chunks[0]);

    let help = Paragraph::new("Esc: Quit | Ctrl-N: New Game | Type or click")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}
