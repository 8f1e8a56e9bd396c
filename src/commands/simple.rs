//! Simple interactive CLI mode
//!
//! Line-oriented playable game without the TUI. The whole word is typed per
//! line, so the first-letter hint is shown as a plain message instead of a
//! pre-filled cell and submissions bypass the hint prepending.

use crate::game::{GameSession, WordSource};
use crate::output::{print_grid, print_keyboard, print_round_end};
use std::io::{self, Write};

/// Run the simple line-oriented game mode
///
/// # Errors
///
/// Returns an error if there is an I/O error reading user input or if the
/// word source has no words of the requested length.
pub fn run_simple<S: WordSource>(source: &S, length: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    MOTTRIX - Mode Simple                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Devinez le mot en 6 essais.");
    println!("Commandes : 'quit' pour quitter, 'new' pour une nouvelle partie\n");

    let mut session = GameSession::new(source, length).map_err(|e| e.to_string())?;

    loop {
        print_grid(&session);
        print_keyboard(&session);

        if session.is_over() {
            print_round_end(&session);

            let answer = get_user_input("Nouvelle partie ? (o/n)")?;
            if answer.starts_with('o') || answer.starts_with('y') {
                session.new_round(length).map_err(|e| e.to_string())?;
                continue;
            }
            return Ok(());
        }

        if let Some(hint) = session.hint_letter() {
            println!("Indice : le mot commence par {hint}");
        }

        let input = get_user_input(&format!("Mot ({} lettres)", session.word_length()))?;
        match input.as_str() {
            "quit" | "q" => return Ok(()),
            "new" => {
                session.new_round(length).map_err(|e| e.to_string())?;
            }
            word => {
                // The full word was typed, so the hint must not prepend
                // another copy of the first letter
                session.dismiss_hint();
                if let Err(reason) = session.submit(word) {
                    println!("\n✗ {reason}");
                }
            }
        }
    }
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
