//! Interactive TUI interface

mod app;
pub mod layout;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
