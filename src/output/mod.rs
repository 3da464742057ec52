//! Terminal output formatting
//!
//! Display utilities for line mode and shared text formatting.

pub mod display;
pub mod formatters;

pub use display::{print_guess, print_outcome, print_round, print_statistics};
