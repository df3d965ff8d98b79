//! # ttt-rewards
//!
//! A tic-tac-toe game engine with discounted reward shaping for RL training.
//!
//! ## Design Principles
//!
//! 1. **One Source of Truth**: `Cell` drives both the display symbol and the
//!    numeric training encoding, each through an explicit mapping.
//!
//! 2. **Errors Are Surfaced**: Illegal, out-of-turn and post-game moves are
//!    returned to the caller, never retried internally.
//!
//! 3. **Reproducible Randomness**: Random moves come from an injected,
//!    seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: Players, cells, moves, board, RNG and `GameState`
//! - `rules`: `Outcome` and `GameStatus`
//! - `nn`: Numeric feature encoding of boards and moves
//! - `training`: Play records, reward shaping and random self-play
//! - `error`: Crate error type

pub mod core;
pub mod error;
pub mod nn;
pub mod rules;
pub mod training;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, GameRngState, GameState, Move, Player};

pub use crate::error::{Error, Result};

pub use crate::nn::{BoardEncoder, CellEncoding, FEATURE_WIDTH};

pub use crate::rules::{GameStatus, Outcome};

pub use crate::training::{
    compute_rewards, Episode, Play, PlayRecord, RewardConfig, RewardShaper, SelfPlayConfig,
    SelfPlayWorker, TrainingBatch,
};
