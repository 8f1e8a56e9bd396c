//! Command implementations

pub mod score;
pub mod simple;

pub use score::{ScoreResult, print_score_result, score_pair};
pub use simple::run_simple;
