//! Mottrix
//!
//! A word-guessing puzzle engine (Motus style) for 5-8 letter French words,
//! with a playable terminal interface: six attempts, per-letter feedback,
//! aggregated keyboard state, first-letter hint, and an optional countdown.
//!
//! # Quick Start
//!
//! ```rust
//! use mottrix::core::{LetterOutcome, Word, score};
//!
//! let target = Word::new("maison").unwrap();
//! let guess = Word::new("motion").unwrap();
//!
//! let outcomes = score(&guess, &target);
//! assert_eq!(outcomes[0], LetterOutcome::Correct);
//! ```

// Core domain types and the scoring function
pub mod core;

// Game state machine: session, keyboard, timer
pub mod game;

// Embedded word lists and the stock dictionary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
