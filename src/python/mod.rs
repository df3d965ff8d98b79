//! Python bindings for the ttt-rewards engine.
//!
//! # Quick Start
//!
//! ```python
//! import ttt_rewards as ttt
//!
//! game = ttt.TicTacToe(seed=42)
//! record = ttt.PlayRecord("x")
//!
//! player = "x"
//! while game.check_for_winner() is None and not game.check_for_board_filled():
//!     if player == "x":
//!         record.play_random(game)
//!     else:
//!         game.random_play_o()
//!     player = "o" if player == "x" else "x"
//!
//! rewards, features = ttt.compute_rewards(game.check_for_winner(), record)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Player;
use crate::error::Error;

mod py_game;
mod py_training;

pub use py_game::*;
pub use py_training::*;

impl From<Error> for PyErr {
    fn from(err: Error) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// Parse "x"/"o" into a player.
pub(crate) fn parse_player(symbol: &str) -> PyResult<Player> {
    Player::from_symbol(symbol)
        .ok_or_else(|| PyValueError::new_err(format!("unknown player '{}'", symbol)))
}

/// ttt-rewards: tic-tac-toe with discounted rewards for RL training.
#[pymodule]
fn ttt_rewards(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTicTacToe>()?;
    m.add_class::<PyPlayRecord>()?;
    m.add_function(wrap_pyfunction!(py_training::compute_rewards, m)?)?;
    Ok(())
}
