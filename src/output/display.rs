//! Display functions for the CLI game modes

use super::formatters::{colored_cell, colored_row, keyboard_lines};
use crate::core::LetterOutcome;
use crate::game::{GameSession, SessionStatus, WordSource};
use colored::Colorize;

/// Print the attempt grid, including the row being typed
pub fn print_grid<S: WordSource>(session: &GameSession<'_, S>) {
    println!();
    for (index, row) in session.attempts().iter().enumerate() {
        if row.is_complete() {
            println!("  {}", colored_row(row));
        } else if index == session.current_attempt() && !session.is_over() {
            println!("  {}", current_row(session));
        } else {
            let blanks: String = (0..session.word_length())
                .map(|_| colored_cell('·', LetterOutcome::Unknown))
                .collect();
            println!("  {blanks}");
        }
    }
    println!();
}

/// The in-progress row: hint cell, typed letters, blank padding
fn current_row<S: WordSource>(session: &GameSession<'_, S>) -> String {
    let mut cells = Vec::with_capacity(session.word_length());

    if let Some(hint) = session.hint_letter() {
        cells.push(format!(" {hint} ").black().on_cyan().to_string());
    }
    for ch in session.pending_input().chars() {
        cells.push(colored_cell(ch, LetterOutcome::Unknown));
    }
    while cells.len() < session.word_length() {
        cells.push(colored_cell('·', LetterOutcome::Unknown));
    }

    cells.join("")
}

/// Print the aggregated keyboard under the grid
pub fn print_keyboard<S: WordSource>(session: &GameSession<'_, S>) {
    for line in keyboard_lines(session.keyboard()) {
        println!("  {line}");
    }
    println!();
}

/// Print the end-of-round banner
pub fn print_round_end<S: WordSource>(session: &GameSession<'_, S>) {
    match session.status() {
        SessionStatus::Playing => {}
        SessionStatus::Won => {
            let attempts = session.attempts_used();
            let banner = if attempts == 1 {
                "Gagné du premier coup !".to_string()
            } else {
                format!("Gagné en {attempts} essais !")
            };
            println!("{}", banner.green().bold());
        }
        SessionStatus::LostAttempts => {
            println!(
                "{}",
                format!("Perdu ! Le mot était {}", session.target()).red().bold()
            );
        }
        SessionStatus::LostTimeout => {
            println!(
                "{}",
                format!("Temps écoulé ! Le mot était {}", session.target())
                    .red()
                    .bold()
            );
        }
    }
}
