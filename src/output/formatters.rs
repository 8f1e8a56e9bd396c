//! Formatting utilities for terminal output

use crate::core::{Attempt, LetterOutcome};
use crate::game::KeyboardState;
use colored::Colorize;

/// Keyboard layout rendered by the CLI frontends
pub const KEYBOARD_ROWS: [&str; 3] = ["AZERTYUIOP", "QSDFGHJKLM", "WXCVBN"];

/// Emoji square for a single outcome
#[must_use]
pub const fn outcome_emoji(outcome: LetterOutcome) -> char {
    match outcome {
        LetterOutcome::Correct | LetterOutcome::Victory => '🟩',
        LetterOutcome::Misplaced => '🟨',
        LetterOutcome::Absent => '⬜',
        LetterOutcome::Solution => '🟥',
        LetterOutcome::Unknown => '⬛',
    }
}

/// Format an attempt row as an emoji string
///
/// # Examples
/// ```
/// use mottrix::core::Attempt;
/// use mottrix::output::formatters::row_to_emoji;
///
/// assert_eq!(row_to_emoji(&Attempt::empty(5)), "");
/// ```
#[must_use]
pub fn row_to_emoji(attempt: &Attempt) -> String {
    attempt
        .letters()
        .iter()
        .map(|l| outcome_emoji(l.outcome))
        .collect()
}

/// Render one letter cell with its outcome color
#[must_use]
pub fn colored_cell(character: char, outcome: LetterOutcome) -> String {
    let cell = format!(" {character} ");
    let painted = match outcome {
        LetterOutcome::Correct | LetterOutcome::Victory => cell.black().on_green(),
        LetterOutcome::Misplaced => cell.black().on_yellow(),
        LetterOutcome::Absent => cell.white().on_bright_black(),
        LetterOutcome::Solution => cell.white().on_red(),
        LetterOutcome::Unknown => cell.normal(),
    };
    painted.to_string()
}

/// Render a full attempt row, padding incomplete rows with blank cells
#[must_use]
pub fn colored_row(attempt: &Attempt) -> String {
    let mut cells: Vec<String> = attempt
        .letters()
        .iter()
        .map(|l| colored_cell(l.character, l.outcome))
        .collect();

    while cells.len() < attempt.row_length() {
        cells.push(colored_cell('·', LetterOutcome::Unknown));
    }

    cells.join("")
}

/// Render the aggregated keyboard as colored AZERTY rows
#[must_use]
pub fn keyboard_lines(keyboard: &KeyboardState) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let indent = " ".repeat(i * 2);
            let keys: String = row
                .chars()
                .map(|ch| colored_cell(ch, keyboard.state_of(ch)))
                .collect();
            format!("{indent}{keys}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};

    #[test]
    fn emoji_per_outcome() {
        assert_eq!(outcome_emoji(LetterOutcome::Correct), '🟩');
        assert_eq!(outcome_emoji(LetterOutcome::Victory), '🟩');
        assert_eq!(outcome_emoji(LetterOutcome::Misplaced), '🟨');
        assert_eq!(outcome_emoji(LetterOutcome::Absent), '⬜');
        assert_eq!(outcome_emoji(LetterOutcome::Solution), '🟥');
    }

    #[test]
    fn row_to_emoji_reference_scenario() {
        let guess = Word::new("MOTION").unwrap();
        let target = Word::new("MAISON").unwrap();
        let attempt = Attempt::scored(&guess, &score(&guess, &target));

        assert_eq!(row_to_emoji(&attempt), "🟩⬜⬜🟨🟩🟩");
    }

    #[test]
    fn keyboard_lines_cover_all_rows() {
        let lines = keyboard_lines(&KeyboardState::new());
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn keyboard_layout_covers_alphabet() {
        let all: String = KEYBOARD_ROWS.concat();
        assert_eq!(all.len(), 26);
        for letter in 'A'..='Z' {
            assert!(all.contains(letter), "missing {letter}");
        }
    }
}
