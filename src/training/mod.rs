//! Training data generation.
//!
//! ## Overview
//!
//! - **PlayRecord**: The trained player's moves with pre-move boards
//! - **RewardShaper**: Turns a record plus outcome into discounted rewards
//!   and a feature matrix
//! - **SelfPlayWorker**: Random-vs-random games producing records
//!
//! ## Usage
//!
//! ```
//! use ttt_rewards::core::{GameState, Move, Player};
//! use ttt_rewards::rules::Outcome;
//! use ttt_rewards::training::{compute_rewards, PlayRecord, RewardConfig};
//!
//! let mut game = GameState::with_seed(42);
//! let mut record = PlayRecord::new(Player::X);
//!
//! record.play(&mut game, Move::new(0, 0)?)?;
//! game.play_o(1, 0)?;
//! record.play(&mut game, Move::new(0, 1)?)?;
//! game.play_o(1, 1)?;
//! record.play(&mut game, Move::new(0, 2)?)?;
//!
//! let outcome = Outcome::from_winner(game.winner());
//! let batch = compute_rewards(outcome, &record, &RewardConfig::default())?;
//! assert_eq!(batch.shape(), (3, 18));
//! # Ok::<(), ttt_rewards::Error>(())
//! ```

pub mod record;
pub mod reward;
pub mod self_play;

pub use record::{Play, PlayRecord};
pub use reward::{compute_rewards, RewardConfig, RewardShaper, TrainingBatch};
pub use self_play::{Episode, SelfPlayConfig, SelfPlayWorker};
