//! Game bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{GameState, Move};
use crate::nn::BoardEncoder;

use super::parse_player;

/// Python wrapper for GameState.
#[pyclass(name = "TicTacToe")]
pub struct PyTicTacToe {
    pub(crate) state: GameState,
}

#[pymethods]
impl PyTicTacToe {
    /// Create a new empty game.
    ///
    /// # Arguments
    /// - seed: RNG seed for random moves
    #[new]
    #[pyo3(signature = (seed = 0))]
    fn new(seed: u64) -> Self {
        Self {
            state: GameState::with_seed(seed),
        }
    }

    /// Place a mark for "x" or "o".
    fn play(&mut self, player: &str, row: usize, col: usize) -> PyResult<()> {
        let player = parse_player(player)?;
        self.state.play_move(player, Move::new(row, col)?)?;
        Ok(())
    }

    fn play_x(&mut self, row: usize, col: usize) -> PyResult<()> {
        Ok(self.state.play_x(row, col)?)
    }

    fn play_o(&mut self, row: usize, col: usize) -> PyResult<()> {
        Ok(self.state.play_o(row, col)?)
    }

    /// Play a random legal move for X, returning (row, col).
    fn random_play_x(&mut self) -> PyResult<(usize, usize)> {
        let mv = self.state.random_play_x()?;
        Ok((mv.row(), mv.col()))
    }

    /// Play a random legal move for O, returning (row, col).
    fn random_play_o(&mut self) -> PyResult<(usize, usize)> {
        let mv = self.state.random_play_o()?;
        Ok((mv.row(), mv.col()))
    }

    /// Get the empty cells as (row, col) tuples in row-major order.
    fn get_possible_moves(&self) -> Vec<(usize, usize)> {
        self.state
            .legal_moves()
            .iter()
            .map(|mv| (mv.row(), mv.col()))
            .collect()
    }

    /// Get the winner ("x" or "o"), or None.
    fn check_for_winner(&self) -> Option<&'static str> {
        self.state.winner().map(|p| p.symbol())
    }

    fn check_for_board_filled(&self) -> bool {
        self.state.is_full()
    }

    /// Get the player who moved last ("x" or "o"), or None.
    fn get_last_move(&self) -> Option<&'static str> {
        self.state.last_mover().map(|p| p.symbol())
    }

    /// Get the board as a 3x3 float32 array (-1 empty, 0 x, 1 o).
    fn get_board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let values = BoardEncoder::default().encode_board(self.state.board());
        PyArray1::from_slice_bound(py, &values)
            .reshape([3, 3])
            .map_err(|e| PyValueError::new_err(format!("{}", e)))
    }

    fn reset_game_state(&mut self) {
        self.state.reset();
    }

    fn __str__(&self) -> String {
        self.state.board().to_string()
    }

    fn __repr__(&self) -> String {
        format!("TicTacToe(status={:?})", self.state.status())
    }
}
