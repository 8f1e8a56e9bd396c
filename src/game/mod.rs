//! Game state machine and collaborators
//!
//! The session owns one round of the game; the keyboard and timer are its
//! two satellite components. Word lookup goes through the [`WordSource`]
//! trait so frontends and tests can swap dictionaries.

mod keyboard;
mod session;
mod source;
mod timer;

pub use keyboard::KeyboardState;
pub use session::{GameSession, MAX_ATTEMPTS, RejectionReason, SessionStatus};
pub use source::{GameError, WordSource};
pub use timer::{DEFAULT_DURATION, TimerCoordinator};
