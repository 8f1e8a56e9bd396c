//! One-off scoring command
//!
//! Scores a guess against a target and prints the outcome row. Handy for
//! checking duplicate-letter edge cases without playing a round.

use crate::core::{Attempt, Word, score};
use crate::output::formatters::{colored_row, row_to_emoji};

/// Result of scoring one guess against one target
pub struct ScoreResult {
    pub attempt: Attempt,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error when either word fails validation or the lengths
/// differ.
pub fn score_pair(guess: &str, target: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| format!("invalid target: {e}"))?;

    if guess.len() != target.len() {
        return Err(format!(
            "length mismatch: guess has {} letters, target has {}",
            guess.len(),
            target.len()
        ));
    }

    let outcomes = score(&guess, &target);
    Ok(ScoreResult {
        attempt: Attempt::scored(&guess, &outcomes),
    })
}

/// Print the result of the `score` command
pub fn print_score_result(result: &ScoreResult) {
    println!();
    println!("  {}", colored_row(&result.attempt));
    println!("  {}", row_to_emoji(&result.attempt));
}
