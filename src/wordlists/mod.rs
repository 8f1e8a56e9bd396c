//! Word lists and the stock dictionary
//!
//! Provides embedded per-length French word lists compiled into the binary,
//! file loading helpers, and the [`Dictionary`] word source used by the
//! game frontends.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{
    WORDS_5, WORDS_5_COUNT, WORDS_6, WORDS_6_COUNT, WORDS_7, WORDS_7_COUNT, WORDS_8,
    WORDS_8_COUNT,
};
