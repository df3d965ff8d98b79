//! Core engine types: players, board, moves, RNG and game state.

pub mod board;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, Move, MoveList, BOARD_SIDE, CELL_COUNT, WINNING_LINES};
pub use player::{Cell, Player};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
