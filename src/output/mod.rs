//! Terminal output formatting
//!
//! Display utilities shared by the CLI game modes.

pub mod display;
pub mod formatters;

pub use display::{print_grid, print_keyboard, print_round_end};
