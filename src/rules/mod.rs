//! Terminal classification vocabulary.

pub mod outcome;

pub use outcome::{GameStatus, Outcome};
