//! TUI rendering with ratatui
//!
//! Every frame is drawn from controller state alone.

use super::app::{App, MessageStyle};
use super::layout::ScreenLayout;
use crate::core::{AttemptsBand, LetterState, Round};
use crate::game::GameStatus;
use crate::output::formatters::{attempts_bar, slots_to_string};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<S>) {
    let layout = ScreenLayout::new(f.area());

    render_header(f, layout.header);
    render_word(f, app, layout.word);
    render_attempts(f, app, layout.attempts);
    render_keyboard(f, app, &layout);
    render_outcome(f, app, &layout);
    render_status(f, app, layout.status);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("HANGMAN")
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

fn render_word<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let block = Block::default()
        .title(" Word ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let line = match (app.game.status(), app.game.round()) {
        (GameStatus::Loading, _) => Line::from(format!(
            "Fetching a word {}",
            SPINNER[app.spinner_frame % SPINNER.len()]
        ))
        .style(Style::default().fg(Color::Cyan)),
        (_, Some(round)) => Line::from(slots_to_string(round.slots()))
            .style(Style::default().add_modifier(Modifier::BOLD)),
        (_, None) => Line::from("No word available").style(Style::default().fg(Color::Red)),
    };

    // Vertically center the single line inside the block
    let paragraph = Paragraph::new(vec![Line::default(), line])
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, area);
}

const fn band_color(band: AttemptsBand) -> Color {
    match band {
        AttemptsBand::Comfortable => Color::Green,
        AttemptsBand::Warning => Color::Yellow,
        AttemptsBand::Critical => Color::Red,
    }
}

fn render_attempts<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let content = app.game.round().map_or_else(Line::default, |round| {
        let remaining = round.attempts_remaining();
        let color = band_color(AttemptsBand::from_remaining(remaining));
        Line::from(vec![
            Span::raw("Attempts left: "),
            Span::styled(
                remaining.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(attempts_bar(round), Style::default().fg(color)),
        ])
    });

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn key_style(round: Option<&Round>, letter: char, pressed: bool) -> Style {
    if pressed {
        return Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD);
    }

    match round.map_or(LetterState::Untried, |r| r.letter_state(letter)) {
        LetterState::Untried => Style::default(),
        LetterState::Hit => Style::default().fg(Color::Green),
        LetterState::Miss => Style::default().fg(Color::DarkGray),
    }
}

fn render_keyboard<S>(f: &mut Frame, app: &App<S>, layout: &ScreenLayout) {
    let block = Block::default().title(" Keyboard ").borders(Borders::ALL);
    f.render_widget(block, layout.keyboard);

    let round = app.game.round();
    let pressed = app.game.pressed_key();

    for &(letter, rect) in &layout.keys {
        let style = key_style(round, letter, pressed == Some(letter));
        let key = Paragraph::new(letter.to_ascii_uppercase().to_string())
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).style(style));
        f.render_widget(key, rect);
    }
}

fn render_outcome<S>(f: &mut Frame, app: &App<S>, layout: &ScreenLayout) {
    let status = app.game.status();
    let block = Block::default()
        .title(" Round ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if !app.game.can_restart() {
        render_messages(f, app, layout.outcome, block);
        return;
    }

    let mut lines = Vec::new();
    if status == GameStatus::Lost
        && let Some(round) = app.game.round()
    {
        lines.push(Line::from(Span::styled(
            round.target().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let (text, color) = match status {
        GameStatus::Won => ("You win!", Color::Green),
        GameStatus::Lost => ("Better luck next time!", Color::Red),
        _ => ("No word available", Color::Red),
    };
    lines.push(Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from("Press Enter or click to play again"));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    f.render_widget(paragraph, layout.outcome);

    let button = Paragraph::new("Play Again")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).bg(Color::Blue))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
    f.render_widget(button, layout.restart_button);
}

fn render_messages<S>(f: &mut Frame, app: &App<S>, area: Rect, block: Block) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    f.render_widget(List::new(messages).block(block), area);
}

fn render_status<S>(f: &mut Frame, app: &App<S>, area: Rect) {
    let stats = app.game.stats();
    let text = format!(
        "Rounds: {} | Win Rate: {:.0}% | Streak: {} | a-z: Guess | Enter: Restart | Ctrl+N: New Word | Esc: Quit",
        stats.rounds_played,
        stats.win_rate(),
        stats.current_streak
    );

    let status = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::SourceKind;
    use ratatui::{Terminal, backend::TestBackend};
    use tokio::runtime::Runtime;

    fn app_playing(runtime: &Runtime, word: &str, attempts: u32) -> App<SourceKind> {
        let mut app = App::new(
            SourceKind::Fixed(word.to_string()),
            attempts,
            runtime.handle().clone(),
        );
        let ticket = app.game.begin_round();
        app.game.finish_loading(ticket, word);
        app
    }

    fn draw<S>(app: &App<S>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn loading_shows_spinner() {
        let runtime = Runtime::new().unwrap();
        let mut app = App::new(
            SourceKind::Fixed("cat".to_string()),
            6,
            runtime.handle().clone(),
        );
        app.game.begin_round();
        let screen = draw(&app);
        assert!(screen.contains("Fetching a word"));
    }

    #[test]
    fn playing_shows_slots_and_attempts() {
        let runtime = Runtime::new().unwrap();
        let mut app = app_playing(&runtime, "cat", 6);
        app.game.guess('a');
        let screen = draw(&app);
        assert!(screen.contains("_ A _"));
        assert!(screen.contains("Attempts left: 6"));
        assert!(!screen.contains("Play Again"));
    }

    #[test]
    fn lost_round_reveals_word() {
        let runtime = Runtime::new().unwrap();
        let mut app = app_playing(&runtime, "cat", 1);
        app.game.guess('z');
        let screen = draw(&app);
        assert!(screen.contains("CAT"));
        assert!(screen.contains("Better luck next time!"));
        assert!(screen.contains("Play Again"));
    }

    #[test]
    fn won_round_congratulates() {
        let runtime = Runtime::new().unwrap();
        let mut app = app_playing(&runtime, "ox", 6);
        app.game.guess('o');
        app.game.guess('x');
        let screen = draw(&app);
        assert!(screen.contains("You win!"));
        assert!(screen.contains("Play Again"));
    }

    #[test]
    fn unavailable_word_is_reported() {
        let runtime = Runtime::new().unwrap();
        let app = app_playing(&runtime, "", 6);
        let screen = draw(&app);
        assert!(screen.contains("No word available"));
    }

    #[test]
    fn band_colors() {
        assert_eq!(band_color(AttemptsBand::from_remaining(8)), Color::Green);
        assert_eq!(band_color(AttemptsBand::from_remaining(4)), Color::Yellow);
        assert_eq!(band_color(AttemptsBand::from_remaining(1)), Color::Red);
    }

    #[test]
    fn pressed_key_is_highlighted() {
        let round = Round::new("cat", 6);
        let style = key_style(Some(&round), 'q', true);
        assert_eq!(style.bg, Some(Color::Blue));
        assert_eq!(key_style(Some(&round), 'q', false), Style::default());
    }
}
