//! Training data bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::Move;
use crate::nn::FEATURE_WIDTH;
use crate::rules::Outcome;
use crate::training::{PlayRecord, RewardConfig, RewardShaper};

use super::parse_player;
use super::py_game::PyTicTacToe;

/// Python wrapper for PlayRecord.
#[pyclass(name = "PlayRecord")]
#[derive(Clone)]
pub struct PyPlayRecord(pub PlayRecord);

#[pymethods]
impl PyPlayRecord {
    /// Create an empty record for "x" or "o".
    #[new]
    #[pyo3(signature = (player = "x"))]
    fn new(player: &str) -> PyResult<Self> {
        Ok(Self(PlayRecord::new(parse_player(player)?)))
    }

    /// Play (row, col) for the recorded player and keep the play.
    fn play(
        &mut self,
        mut game: PyRefMut<'_, PyTicTacToe>,
        row: usize,
        col: usize,
    ) -> PyResult<()> {
        self.0.play(&mut game.state, Move::new(row, col)?)?;
        Ok(())
    }

    /// Play a random legal move for the recorded player and keep the play.
    fn play_random(&mut self, mut game: PyRefMut<'_, PyTicTacToe>) -> PyResult<(usize, usize)> {
        let mv = self.0.play_random(&mut game.state)?;
        Ok((mv.row(), mv.col()))
    }

    #[getter]
    fn player(&self) -> &'static str {
        self.0.player().symbol()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __repr__(&self) -> String {
        format!("PlayRecord(player={}, plays={})", self.0.player(), self.0.len())
    }
}

/// Compute discounted rewards and the feature matrix for a finished game.
///
/// Returns (rewards, features) as numpy arrays:
/// - rewards: [N] float64
/// - features: [N, 18] float32
#[pyfunction]
#[pyo3(signature = (
    winner,
    record,
    win_reward = 100.0,
    loss_reward = -100.0,
    draw_reward = 0.0,
    discount_factor = 0.8
))]
pub fn compute_rewards<'py>(
    py: Python<'py>,
    winner: Option<&str>,
    record: &PyPlayRecord,
    win_reward: f64,
    loss_reward: f64,
    draw_reward: f64,
    discount_factor: f64,
) -> PyResult<(Bound<'py, PyArray1<f64>>, Bound<'py, PyArray2<f32>>)> {
    let winner = winner.map(parse_player).transpose()?;
    let config = RewardConfig::default()
        .with_win_reward(win_reward)
        .with_loss_reward(loss_reward)
        .with_draw_reward(draw_reward)
        .with_discount_factor(discount_factor);

    let shaper = RewardShaper::new(config)?;
    let batch = shaper.compute(Outcome::from_winner(winner), &record.0)?;
    let n = batch.len();

    let rewards = PyArray1::from_vec_bound(py, batch.rewards);
    let features = PyArray1::from_vec_bound(py, batch.features)
        .reshape([n, FEATURE_WIDTH])
        .map_err(|e| PyValueError::new_err(format!("{}", e)))?;

    Ok((rewards, features))
}
