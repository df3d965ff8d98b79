//! Feature encoding for model training.
//!
//! - **CellEncoding**: mapping table from `Cell` to a numeric value
//! - **BoardEncoder**: flattens boards and one-hot encodes moves
//!
//! ## Usage
//!
//! ```
//! use ttt_rewards::core::{Board, Move, Player};
//! use ttt_rewards::nn::{BoardEncoder, FEATURE_WIDTH};
//!
//! let encoder = BoardEncoder::default();
//! let row = encoder.encode_play(&Board::new(), Move::new(0, 0)?, Player::X);
//! assert_eq!(row.len(), FEATURE_WIDTH);
//! # Ok::<(), ttt_rewards::Error>(())
//! ```

pub mod encoder;

pub use encoder::{BoardEncoder, CellEncoding, FEATURE_WIDTH};
