//! TUI application state and logic

use super::layout::ScreenLayout;
use crate::core::{GuessOutcome, parse_letter};
use crate::game::{GameController, GameStatus, RoundTicket};
use crate::wordlists::{WordSource, fetch_word_or_empty};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseButton, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::debug;

/// How long the event loop waits for input before ticking
const TICK_RATE: Duration = Duration::from_millis(80);

/// How long a key stays highlighted when the terminal doesn't report releases
const KEY_HIGHLIGHT: Duration = Duration::from_millis(180);

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App<S> {
    pub game: GameController,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub spinner_frame: usize,
    source: Arc<S>,
    runtime: Handle,
    words_tx: UnboundedSender<(RoundTicket, String)>,
    words_rx: UnboundedReceiver<(RoundTicket, String)>,
    pressed_at: Option<Instant>,
    viewport: Rect,
}

impl<S: WordSource + 'static> App<S> {
    /// Create the app; fetches are spawned on `runtime`
    #[must_use]
    pub fn new(source: S, attempts: u32, runtime: Handle) -> Self {
        let (words_tx, words_rx) = mpsc::unbounded_channel();

        Self {
            game: GameController::new(attempts),
            messages: Vec::new(),
            should_quit: false,
            spinner_frame: 0,
            source: Arc::new(source),
            runtime,
            words_tx,
            words_rx,
            pressed_at: None,
            viewport: Rect::default(),
        }
    }

    /// Start loading a new round
    ///
    /// The fetch runs in the background; its word arrives through [`tick`](Self::tick).
    pub fn start_round(&mut self) {
        let ticket = self.game.begin_round();
        let source = Arc::clone(&self.source);
        let tx = self.words_tx.clone();

        self.runtime.spawn(async move {
            let word = fetch_word_or_empty(source.as_ref()).await;
            if tx.send((ticket, word)).is_err() {
                debug!("app closed before word arrived");
            }
        });
    }

    /// Periodic housekeeping: deliver fetched words, expire key highlight, animate
    pub fn tick(&mut self) {
        while let Ok((ticket, word)) = self.words_rx.try_recv() {
            self.deliver_word(ticket, &word);
        }

        if let Some(pressed_at) = self.pressed_at
            && pressed_at.elapsed() >= KEY_HIGHLIGHT
        {
            self.release_key();
        }

        if self.game.status() == GameStatus::Loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    fn deliver_word(&mut self, ticket: RoundTicket, word: &str) {
        if !self.game.finish_loading(ticket, word) {
            return;
        }

        match self.game.status() {
            GameStatus::Unavailable => self.add_message(
                "No word available. Press Enter to try again.",
                MessageStyle::Error,
            ),
            _ => {
                let letters = self.game.round().map_or(0, |r| r.slots().len());
                self.add_message(
                    &format!("New word: {letters} letters. Start guessing!"),
                    MessageStyle::Info,
                );
            }
        }
    }

    /// Guess a letter from either the physical or the on-screen keyboard
    pub fn guess_letter(&mut self, letter: char) {
        self.game.press_key(letter);
        self.pressed_at = Some(Instant::now());

        let Some(outcome) = self.game.guess(letter) else {
            return;
        };

        let shown = letter.to_ascii_uppercase();
        match outcome {
            GuessOutcome::Hit { revealed } => self.add_message(
                &format!("{shown}: {revealed} revealed"),
                MessageStyle::Success,
            ),
            GuessOutcome::Miss { .. } => {
                self.add_message(&format!("{shown}: not in the word"), MessageStyle::Error);
            }
        }

        match self.game.status() {
            GameStatus::Won => self.add_message("You win!", MessageStyle::Success),
            GameStatus::Lost => self.add_message("Better luck next time!", MessageStyle::Error),
            _ => {}
        }
    }

    pub fn release_key(&mut self) {
        self.game.release_key();
        self.pressed_at = None;
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.kind {
            KeyEventKind::Release => {
                self.release_key();
                return;
            }
            KeyEventKind::Repeat => return,
            KeyEventKind::Press => {}
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.start_round();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Enter => {
                if self.game.can_restart() {
                    self.start_round();
                }
            }
            // Shift is the only modifier a letter key may carry
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                if let Some(letter) = parse_letter(c) {
                    self.guess_letter(letter);
                }
            }
            _ => {}
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = ScreenLayout::new(self.viewport);
                if let Some(letter) = layout.key_at(mouse.column, mouse.row) {
                    self.guess_letter(letter);
                } else if self.game.can_restart()
                    && layout.is_restart_button(mouse.column, mouse.row)
                {
                    self.start_round();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => self.release_key(),
            _ => {}
        }
    }

    /// Remember the area last drawn into, for mouse hit-testing
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Raw mode, alternate screen and mouse capture for the lifetime of the TUI
///
/// Restores the terminal on drop, whichever way the event loop exits.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    keyboard_enhanced: bool,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;

        // Key release events let the on-screen highlight follow the physical key
        let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false);

        match Self::setup(keyboard_enhanced) {
            Ok(terminal) => Ok(Self {
                terminal,
                keyboard_enhanced,
            }),
            Err(e) => {
                restore_terminal(&mut io::stdout(), keyboard_enhanced);
                Err(e.into())
            }
        }
    }

    fn setup(keyboard_enhanced: bool) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        if keyboard_enhanced {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        Terminal::new(CrosstermBackend::new(stdout))
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal(self.terminal.backend_mut(), self.keyboard_enhanced);
        let _ = self.terminal.show_cursor();
    }
}

/// Undo everything [`TerminalSession::enter`] may have set up; errors are ignored
fn restore_terminal<W: Write>(out: &mut W, keyboard_enhanced: bool) {
    if keyboard_enhanced {
        let _ = execute!(out, PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: WordSource + 'static>(app: App<S>) -> Result<()> {
    let mut session = TerminalSession::enter()?;
    let res = run_app(&mut session.terminal, app);

    // Restore terminal before the caller reports any error
    drop(session);
    res
}

fn run_app<B, S>(terminal: &mut Terminal<B>, mut app: App<S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    S: WordSource + 'static,
{
    app.start_round();

    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            super::rendering::ui(f, &app);
        })?;
        app.set_viewport(area);

        if event::poll(TICK_RATE)? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        app.tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
