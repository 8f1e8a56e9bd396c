//! Per-letter feedback outcomes
//!
//! A letter in the grid is either unscored (`Unknown`), carries a scoring
//! outcome (`Correct`/`Misplaced`/`Absent`), or carries one of the two
//! terminal display markers (`Solution`/`Victory`) that are applied to a
//! whole row when a round ends and are never produced by scoring itself.

use std::fmt;

/// State of a single letter in an attempt row or on the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LetterOutcome {
    /// Not yet scored (empty cell, untouched keyboard key)
    #[default]
    Unknown,
    /// Right letter, right position
    Correct,
    /// Letter occurs in the target, wrong position
    Misplaced,
    /// Letter does not occur (or all its occurrences are consumed)
    Absent,
    /// Display-only: row revealing the target after a loss
    Solution,
    /// Display-only: the winning row
    Victory,
}

impl LetterOutcome {
    /// Whether this outcome can be produced by scoring a guess
    ///
    /// `Solution` and `Victory` are display markers written by the session
    /// at a terminal transition, never by [`score`](crate::core::score).
    #[inline]
    #[must_use]
    pub const fn is_scoring(self) -> bool {
        matches!(self, Self::Correct | Self::Misplaced | Self::Absent)
    }

    /// Quality rank used for keyboard aggregation
    ///
    /// Ordering: `Unknown < Absent < Misplaced < Correct`. Display-only
    /// outcomes have no rank and never touch the keyboard.
    #[inline]
    #[must_use]
    pub const fn keyboard_rank(self) -> Option<u8> {
        match self {
            Self::Unknown => Some(0),
            Self::Absent => Some(1),
            Self::Misplaced => Some(2),
            Self::Correct => Some(3),
            Self::Solution | Self::Victory => None,
        }
    }
}

impl fmt::Display for LetterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Correct => "correct",
            Self::Misplaced => "misplaced",
            Self::Absent => "absent",
            Self::Solution => "solution",
            Self::Victory => "victory",
        };
        write!(f, "{name}")
    }
}
