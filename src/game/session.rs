//! Game session state machine
//!
//! Owns the grid of attempts, the pending input buffer, the first-letter
//! hint, and the aggregated keyboard. Orchestrates scoring and resolves the
//! terminal conditions: win, exhausted attempts, timeout. All transition
//! operations are no-ops once the session has left `Playing`, so a late
//! timer signal racing a submission is benign.

use super::keyboard::KeyboardState;
use super::source::{GameError, WordSource};
use crate::core::{Attempt, Word, normalize_char, score};
use std::fmt;

/// Number of attempt rows per round
pub const MAX_ATTEMPTS: usize = 6;

/// Session lifecycle; terminal once not `Playing`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Playing,
    Won,
    LostAttempts,
    LostTimeout,
}

impl SessionStatus {
    /// True for every state that ends the round
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Why a submission was refused
///
/// These are expected, recoverable, user-facing outcomes. Every rejection
/// leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// The effective candidate (hint letter included) has the wrong length
    WrongLength { expected: usize, actual: usize },
    /// The word source does not know the candidate
    NotInDictionary,
    /// The round is already over
    SessionOver,
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, actual } => {
                write!(f, "Le mot doit faire {expected} lettres (saisi : {actual})")
            }
            Self::NotInDictionary => write!(f, "Mot non reconnu"),
            Self::SessionOver => write!(f, "La partie est terminée"),
        }
    }
}

impl std::error::Error for RejectionReason {}

/// One round of the guessing game
#[derive(Debug)]
pub struct GameSession<'a, S: WordSource> {
    source: &'a S,
    target: Word,
    attempts: Vec<Attempt>,
    current_attempt: usize,
    status: SessionStatus,
    keyboard: KeyboardState,
    input: String,
    first_letter_used: bool,
}

impl<'a, S: WordSource> GameSession<'a, S> {
    /// Start a session with a random target of the given length
    ///
    /// # Errors
    /// Returns [`GameError::NoWordsAvailable`] when the source holds no
    /// words of that length.
    pub fn new(source: &'a S, length: usize) -> Result<Self, GameError> {
        let target = source
            .random_word(length)
            .ok_or(GameError::NoWordsAvailable(length))?;
        Ok(Self::with_target(source, target))
    }

    /// Start a session with a fixed target word
    #[must_use]
    pub fn with_target(source: &'a S, target: Word) -> Self {
        let length = target.len();
        Self {
            source,
            target,
            attempts: vec![Attempt::empty(length); MAX_ATTEMPTS],
            current_attempt: 0,
            status: SessionStatus::Playing,
            keyboard: KeyboardState::new(),
            input: String::new(),
            first_letter_used: true,
        }
    }

    /// Submit a candidate word
    ///
    /// While the hint is active the target's first letter is prepended to
    /// `raw_input` to form the effective candidate. On acceptance the scored
    /// attempt is recorded, the keyboard updated, the win/loss transition
    /// applied, the input buffer cleared and the hint re-armed for the next
    /// row (only while the session is still `Playing`).
    ///
    /// Win evaluation happens before the attempts-exhausted check: a correct
    /// word on the final row is `Won`, never `LostAttempts`.
    ///
    /// # Errors
    /// [`RejectionReason::SessionOver`] once the round ended,
    /// [`RejectionReason::WrongLength`] when the effective candidate does
    /// not match the target length, [`RejectionReason::NotInDictionary`]
    /// when the word source refuses it. Rejections leave all state
    /// unchanged.
    pub fn submit(&mut self, raw_input: &str) -> Result<Attempt, RejectionReason> {
        if self.status.is_terminal() || self.current_attempt >= MAX_ATTEMPTS {
            return Err(RejectionReason::SessionOver);
        }

        let mut candidate_text = String::with_capacity(self.word_length());
        if self.first_letter_used {
            candidate_text.push(self.target.first_letter());
        }
        candidate_text.push_str(raw_input);

        let expected = self.word_length();
        let actual = candidate_text.chars().count();
        if actual != expected {
            return Err(RejectionReason::WrongLength { expected, actual });
        }

        // Anything that fails normalization (digits, punctuation) cannot be
        // a dictionary word
        let Ok(candidate) = Word::new(&candidate_text) else {
            return Err(RejectionReason::NotInDictionary);
        };

        if !self.source.is_valid(candidate.text()) {
            return Err(RejectionReason::NotInDictionary);
        }

        let outcomes = score(&candidate, &self.target);
        let attempt = Attempt::scored(&candidate, &outcomes);
        self.keyboard.update(&attempt);

        let index = self.current_attempt;
        self.attempts[index] = attempt.clone();

        if self.attempts[index].is_winning() {
            self.status = SessionStatus::Won;
            self.attempts[index].mark_victory();
        } else {
            self.current_attempt += 1;
            if self.current_attempt >= MAX_ATTEMPTS {
                self.status = SessionStatus::LostAttempts;
                self.attempts[MAX_ATTEMPTS - 1] = Attempt::solution_row(&self.target);
            }
        }

        self.input.clear();
        self.first_letter_used = self.status == SessionStatus::Playing;

        Ok(attempt)
    }

    /// Submit whatever sits in the pending input buffer
    ///
    /// # Errors
    /// Same as [`Self::submit`].
    pub fn submit_pending(&mut self) -> Result<Attempt, RejectionReason> {
        let raw = self.input.clone();
        self.submit(&raw)
    }

    /// Force the timeout loss
    ///
    /// No-op unless `Playing`. Writes the solution row at the current row
    /// (clamped to the last row) without advancing the index.
    pub fn force_timeout(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        self.status = SessionStatus::LostTimeout;
        let index = self.current_attempt.min(MAX_ATTEMPTS - 1);
        self.attempts[index] = Attempt::solution_row(&self.target);
    }

    /// Append a letter to the pending input buffer
    ///
    /// Bounded by the word length, minus the hint cell while the hint is
    /// active. Non-letter characters and input after the round ended are
    /// ignored.
    pub fn push_letter(&mut self, ch: char) {
        if self.status.is_terminal() {
            return;
        }
        let Some(normalized) = normalize_char(ch) else {
            return;
        };
        let capacity = self.word_length() - usize::from(self.first_letter_used);
        if self.input.len() < capacity {
            self.input.push(normalized);
        }
    }

    /// Remove the last letter of the pending input buffer
    ///
    /// Deleting on an empty buffer retracts the hint instead of erroring:
    /// the player gives up the revealed first letter to type the full word
    /// themselves.
    pub fn pop_letter(&mut self) {
        if self.status.is_terminal() {
            return;
        }
        if self.input.pop().is_none() {
            self.first_letter_used = false;
        }
    }

    /// Give up the first-letter hint for the current row
    pub fn dismiss_hint(&mut self) {
        if !self.status.is_terminal() {
            self.first_letter_used = false;
        }
    }

    /// Clear all mutable state and start over with a new target
    pub fn reset(&mut self, new_target: Word) {
        let length = new_target.len();
        self.target = new_target;
        self.attempts = vec![Attempt::empty(length); MAX_ATTEMPTS];
        self.current_attempt = 0;
        self.status = SessionStatus::Playing;
        self.keyboard.reset();
        self.input.clear();
        self.first_letter_used = true;
    }

    /// Draw a fresh random target of the given length and reset
    ///
    /// # Errors
    /// Returns [`GameError::NoWordsAvailable`] when the source holds no
    /// words of that length; the current round is left untouched.
    pub fn new_round(&mut self, length: usize) -> Result<(), GameError> {
        let target = self
            .source
            .random_word(length)
            .ok_or(GameError::NoWordsAvailable(length))?;
        self.reset(target);
        Ok(())
    }

    /// The secret target word
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Length of the target and of every attempt row
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    /// The grid of attempt rows (always exactly [`MAX_ATTEMPTS`])
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// 0-based index of the row the next submission lands in
    #[inline]
    #[must_use]
    pub const fn current_attempt(&self) -> usize {
        self.current_attempt
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> SessionStatus {
        self.status
    }

    /// Derived: some completed attempt found the target
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.attempts.iter().any(Attempt::is_winning)
    }

    /// Derived: no further guesses are accepted without a reset
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Aggregated per-letter keyboard feedback
    #[inline]
    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    /// The pending (not yet submitted) input
    #[inline]
    #[must_use]
    pub fn pending_input(&self) -> &str {
        &self.input
    }

    /// Whether the first-letter hint is active for the current row
    #[inline]
    #[must_use]
    pub const fn first_letter_used(&self) -> bool {
        self.first_letter_used
    }

    /// The revealed first letter while the hint is active
    #[must_use]
    pub fn hint_letter(&self) -> Option<char> {
        self.first_letter_used.then(|| self.target.first_letter())
    }

    /// 1-based count of completed attempts (display value, non-authoritative)
    #[must_use]
    pub const fn attempts_used(&self) -> usize {
        match self.status {
            SessionStatus::Won => self.current_attempt + 1,
            _ => self.current_attempt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterOutcome;

    /// Deterministic source: `random_word` returns the first word of the
    /// requested length, validity is plain membership.
    #[derive(Debug)]
    struct FixtureSource {
        words: Vec<Word>,
    }

    impl FixtureSource {
        fn new(words: &[&str]) -> Self {
            Self {
                words: words.iter().map(|t| Word::new(t).unwrap()).collect(),
            }
        }
    }

    impl WordSource for FixtureSource {
        fn random_word(&self, length: usize) -> Option<Word> {
            self.words.iter().find(|word| word.len() == length).cloned()
        }

        fn is_valid(&self, word: &str) -> bool {
            Word::new(word).is_ok_and(|w| self.words.contains(&w))
        }
    }

    fn fixture() -> FixtureSource {
        FixtureSource::new(&[
            "MAISON", "MOTION", "RAISON", "SAISON", "MATINS", "BANANE", "ORANGE", "TABLE",
            "SUCRE", "FLEUR",
        ])
    }

    fn w(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn new_session_starts_clean() {
        let src = fixture();
        let session = GameSession::with_target(&src, w("MAISON"));

        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.current_attempt(), 0);
        assert_eq!(session.word_length(), 6);
        assert!(session.first_letter_used());
        assert_eq!(session.hint_letter(), Some('M'));
        assert_eq!(session.attempts().len(), MAX_ATTEMPTS);
        assert!(session.attempts().iter().all(|row| !row.is_complete()));
    }

    #[test]
    fn new_draws_from_source() {
        let src = fixture();
        let session = GameSession::new(&src, 5).unwrap();
        assert_eq!(session.word_length(), 5);
    }

    #[test]
    fn new_surfaces_missing_length() {
        let src = fixture();
        let err = GameSession::new(&src, 8).unwrap_err();
        assert_eq!(err, GameError::NoWordsAvailable(8));
    }

    #[test]
    fn winning_submission() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();

        let attempt = session.submit("MAISON").unwrap();
        assert!(attempt.is_winning());
        assert_eq!(session.status(), SessionStatus::Won);
        assert!(session.is_won());
        assert!(session.is_over());
        assert_eq!(session.attempts_used(), 1);

        // The stored row carries the victory display rewrite
        assert!(
            session.attempts()[0]
                .letters()
                .iter()
                .all(|l| l.outcome == LetterOutcome::Victory)
        );
    }

    #[test]
    fn hint_letter_is_prepended() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));

        // Hint supplies the leading M; the player types the rest
        let attempt = session.submit("AISON").unwrap();
        assert_eq!(attempt.word(), "MAISON");
        assert_eq!(session.status(), SessionStatus::Won);
    }

    #[test]
    fn full_word_with_active_hint_is_too_long() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));

        let err = session.submit("MAISON").unwrap_err();
        assert_eq!(
            err,
            RejectionReason::WrongLength {
                expected: 6,
                actual: 7
            }
        );
        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.current_attempt(), 0);
    }

    #[test]
    fn wrong_length_beats_dictionary_membership() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();

        // TABLE is a dictionary word, but not 6 letters
        let err = session.submit("TABLE").unwrap_err();
        assert_eq!(
            err,
            RejectionReason::WrongLength {
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn unknown_word_is_rejected() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();

        let err = session.submit("ZZZZZZ").unwrap_err();
        assert_eq!(err, RejectionReason::NotInDictionary);
        assert_eq!(session.current_attempt(), 0);
    }

    #[test]
    fn garbage_input_is_rejected_without_panic() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();

        let err = session.submit("MA1SON").unwrap_err();
        assert_eq!(err, RejectionReason::NotInDictionary);
    }

    #[test]
    fn rejection_leaves_state_unchanged() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.push_letter('R');
        session.push_letter('A');

        let attempts_before = session.attempts().to_vec();
        let input_before = session.pending_input().to_string();

        let raw = session.pending_input().to_string();
        assert!(session.submit(&raw).is_err()); // RAI.. too short

        assert_eq!(session.attempts(), &attempts_before[..]);
        assert_eq!(session.pending_input(), input_before);
        assert_eq!(session.status(), SessionStatus::Playing);
    }

    #[test]
    fn six_failures_reveal_the_solution() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));

        for _ in 0..MAX_ATTEMPTS {
            session.dismiss_hint();
            session.submit("RAISON").unwrap();
        }

        assert_eq!(session.status(), SessionStatus::LostAttempts);
        assert_eq!(session.current_attempt(), MAX_ATTEMPTS);
        assert!(!session.is_won());

        // Exactly one row carries the solution display, and it is the last
        let solution_rows: Vec<usize> = session
            .attempts()
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                row.letters()
                    .iter()
                    .any(|l| l.outcome == LetterOutcome::Solution)
            })
            .map(|(i, _)| i)
            .collect();
        assert_eq!(solution_rows, vec![MAX_ATTEMPTS - 1]);
        assert_eq!(session.attempts()[MAX_ATTEMPTS - 1].word(), "MAISON");
    }

    #[test]
    fn win_on_final_attempt_beats_exhaustion() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));

        for _ in 0..(MAX_ATTEMPTS - 1) {
            session.dismiss_hint();
            session.submit("RAISON").unwrap();
        }
        assert_eq!(session.current_attempt(), MAX_ATTEMPTS - 1);

        session.dismiss_hint();
        session.submit("MAISON").unwrap();
        assert_eq!(session.status(), SessionStatus::Won);
        assert_eq!(session.attempts_used(), MAX_ATTEMPTS);
    }

    #[test]
    fn submit_after_terminal_state_is_session_over() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();
        session.submit("MAISON").unwrap();

        let attempts_before = session.attempts().to_vec();
        let err = session.submit("RAISON").unwrap_err();
        assert_eq!(err, RejectionReason::SessionOver);
        assert_eq!(session.attempts(), &attempts_before[..]);
    }

    #[test]
    fn force_timeout_mid_game() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));

        for _ in 0..2 {
            session.dismiss_hint();
            session.submit("RAISON").unwrap();
        }

        session.force_timeout();

        assert_eq!(session.status(), SessionStatus::LostTimeout);
        assert_eq!(session.current_attempt(), 2);

        // Rows 0-1 keep their scored letters, row 2 shows the solution,
        // rows 3-5 stay empty
        assert_eq!(session.attempts()[0].word(), "RAISON");
        assert_eq!(session.attempts()[1].word(), "RAISON");
        assert_eq!(session.attempts()[2].word(), "MAISON");
        assert!(
            session.attempts()[2]
                .letters()
                .iter()
                .all(|l| l.outcome == LetterOutcome::Solution)
        );
        for row in &session.attempts()[3..] {
            assert!(!row.is_complete());
        }
    }

    #[test]
    fn force_timeout_is_noop_when_over() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();
        session.submit("MAISON").unwrap();

        session.force_timeout();
        assert_eq!(session.status(), SessionStatus::Won);
        assert!(session.attempts()[0].is_winning());
    }

    #[test]
    fn force_timeout_on_full_grid_clamps_to_last_row() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        for _ in 0..MAX_ATTEMPTS {
            session.dismiss_hint();
            session.submit("RAISON").unwrap();
        }
        // Already LostAttempts; a stray timeout signal changes nothing
        session.force_timeout();
        assert_eq!(session.status(), SessionStatus::LostAttempts);
    }

    #[test]
    fn input_buffer_respects_hint_capacity() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));

        for ch in "AISONX".chars() {
            session.push_letter(ch);
        }
        // Hint occupies one cell: only 5 letters fit
        assert_eq!(session.pending_input(), "AISON");

        session.dismiss_hint();
        session.push_letter('X');
        assert_eq!(session.pending_input(), "AISONX");
    }

    #[test]
    fn push_letter_normalizes_and_filters() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();

        session.push_letter('é');
        session.push_letter('3');
        session.push_letter('t');
        assert_eq!(session.pending_input(), "ET");
    }

    #[test]
    fn pop_letter_retracts_hint_on_empty_buffer() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        assert!(session.first_letter_used());

        session.push_letter('A');
        session.pop_letter();
        assert!(session.first_letter_used()); // buffer was not empty

        session.pop_letter();
        assert!(!session.first_letter_used()); // empty delete retracts the hint
        assert_eq!(session.hint_letter(), None);

        // Harmless when already retracted
        session.pop_letter();
        assert!(!session.first_letter_used());
    }

    #[test]
    fn accepted_submission_clears_buffer_and_rearms_hint() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();
        for ch in "RAISON".chars() {
            session.push_letter(ch);
        }

        session.submit_pending().unwrap();
        assert_eq!(session.pending_input(), "");
        assert!(session.first_letter_used()); // still playing: hint re-armed
    }

    #[test]
    fn hint_not_rearmed_once_over() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();
        session.submit("MAISON").unwrap();
        assert!(!session.first_letter_used());
    }

    #[test]
    fn keyboard_follows_submissions() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();
        session.submit("MOTION").unwrap();

        assert_eq!(session.keyboard().state_of('M'), LetterOutcome::Correct);
        assert_eq!(session.keyboard().state_of('I'), LetterOutcome::Misplaced);
        assert_eq!(session.keyboard().state_of('T'), LetterOutcome::Absent);
    }

    #[test]
    fn reset_restores_initial_state() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();
        session.submit("RAISON").unwrap();
        session.force_timeout();

        session.reset(w("TABLE"));

        assert_eq!(session.status(), SessionStatus::Playing);
        assert_eq!(session.word_length(), 5);
        assert_eq!(session.current_attempt(), 0);
        assert!(session.first_letter_used());
        assert_eq!(session.pending_input(), "");
        assert_eq!(session.keyboard().state_of('R'), LetterOutcome::Unknown);
        assert!(session.attempts().iter().all(|row| !row.is_complete()));
    }

    #[test]
    fn new_round_draws_new_target() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.new_round(5).unwrap();
        assert_eq!(session.word_length(), 5);
        assert_eq!(session.status(), SessionStatus::Playing);

        // Missing length leaves the round untouched
        session.dismiss_hint();
        assert!(session.new_round(8).is_err());
        assert_eq!(session.word_length(), 5);
        assert!(!session.first_letter_used());
    }

    #[test]
    fn attempts_used_matches_one_based_convention() {
        let src = fixture();
        let mut session = GameSession::with_target(&src, w("MAISON"));
        session.dismiss_hint();
        session.submit("RAISON").unwrap();
        session.dismiss_hint();
        session.submit("SAISON").unwrap();
        assert_eq!(session.attempts_used(), 2);

        session.dismiss_hint();
        session.submit("MAISON").unwrap();
        assert_eq!(session.attempts_used(), 3);
    }
}
