//! Round orchestration

mod controller;

pub use controller::{GameController, GameStatus, RoundTicket, Statistics};
