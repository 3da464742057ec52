//! Screen geometry
//!
//! Computed from the terminal area alone so that drawing and mouse hit-testing
//! agree on where every on-screen key sits.

use crate::core::ALPHABET;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of one on-screen key, borders included
pub const KEY_WIDTH: u16 = 5;
/// Height of one on-screen key, borders included
pub const KEY_HEIGHT: u16 = 3;
/// Keys per keyboard row
pub const KEYS_PER_ROW: usize = 9;

const KEY_ROWS: u16 = ALPHABET.len().div_ceil(KEYS_PER_ROW) as u16;
const KEYBOARD_HEIGHT: u16 = KEY_ROWS * KEY_HEIGHT + 2;
const RESTART_WIDTH: u16 = 16;
const RESTART_HEIGHT: u16 = 3;

/// Areas of every widget on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub word: Rect,
    pub attempts: Rect,
    pub keyboard: Rect,
    pub keys: Vec<(char, Rect)>,
    pub outcome: Rect,
    pub restart_button: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),               // Header
                Constraint::Length(5),               // Revealed word
                Constraint::Length(3),               // Attempts
                Constraint::Length(KEYBOARD_HEIGHT), // Keyboard
                Constraint::Min(7),                  // Outcome and messages
                Constraint::Length(1),               // Status bar
            ])
            .split(area);

        let keyboard = chunks[3];
        let outcome = chunks[4];

        Self {
            header: chunks[0],
            word: chunks[1],
            attempts: chunks[2],
            keyboard,
            keys: key_areas(keyboard),
            outcome,
            restart_button: restart_area(outcome),
            status: chunks[5],
        }
    }

    /// The on-screen key under a terminal cell, if any
    #[must_use]
    pub fn key_at(&self, column: u16, row: u16) -> Option<char> {
        let position = Position::new(column, row);
        self.keys
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|&(letter, _)| letter)
    }

    #[must_use]
    pub fn is_restart_button(&self, column: u16, row: u16) -> bool {
        self.restart_button.contains(Position::new(column, row))
    }
}

/// Lay the alphabet out in centered rows inside the keyboard block
fn key_areas(keyboard: Rect) -> Vec<(char, Rect)> {
    let inner = shrink(keyboard);
    let row_width = KEY_WIDTH * KEYS_PER_ROW as u16;
    let left = inner.x + inner.width.saturating_sub(row_width) / 2;

    ALPHABET
        .iter()
        .enumerate()
        .filter_map(|(i, &letter)| {
            let row = (i / KEYS_PER_ROW) as u16;
            let col = (i % KEYS_PER_ROW) as u16;
            let rect = Rect::new(
                left + col * KEY_WIDTH,
                inner.y + row * KEY_HEIGHT,
                KEY_WIDTH,
                KEY_HEIGHT,
            )
            .intersection(inner);
            (!rect.is_empty()).then_some((letter, rect))
        })
        .collect()
}

/// Bottom-centered inside the outcome panel
fn restart_area(outcome: Rect) -> Rect {
    let inner = shrink(outcome);
    let x = inner.x + inner.width.saturating_sub(RESTART_WIDTH) / 2;
    let y = inner.y + inner.height.saturating_sub(RESTART_HEIGHT);
    Rect::new(x, y, RESTART_WIDTH, RESTART_HEIGHT).intersection(inner)
}

/// Area inside a one-cell border
fn shrink(area: Rect) -> Rect {
    Rect::new(
        area.x.saturating_add(1),
        area.y.saturating_add(1),
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    )
}
