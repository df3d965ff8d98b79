//! Game state: board ownership, move validation and terminal detection.
//!
//! `GameState` is the only mutator of a `Board`. Every accepted move goes
//! through [`GameState::play_move`], which enforces:
//!
//! - **Set-once cells**: an occupied cell can never be overwritten
//! - **Turn alternation**: the same player cannot move twice in a row
//! - **Absorbing terminal state**: no moves after a win or a full board
//!
//! Random move selection uses the injected [`GameRng`], so self-play is
//! reproducible from a seed.
//!
//! ```
//! use ttt_rewards::core::{GameState, Move, Player};
//! use ttt_rewards::rules::GameStatus;
//!
//! let mut game = GameState::with_seed(42);
//! game.play_move(Player::X, Move::new(1, 1)?)?;
//! assert_eq!(game.status(), GameStatus::InProgress);
//!
//! // X cannot move again before O
//! assert!(game.play_move(Player::X, Move::new(0, 0)?).is_err());
//! # Ok::<(), ttt_rewards::Error>(())
//! ```

use tracing::debug;

use crate::core::board::{Board, Move, MoveList};
use crate::core::player::Player;
use crate::core::rng::{GameRng, GameRngState};
use crate::error::{Error, Result};
use crate::rules::{GameStatus, Outcome};

/// A single tic-tac-toe game.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    last_mover: Option<Player>,
    rng: GameRng,
}

impl GameState {
    /// Create an empty game with an RNG seeded from `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create an empty game using the given RNG for random moves.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        Self {
            board: Board::new(),
            last_mover: None,
            rng,
        }
    }

    /// Place `player`'s mark at `mv`.
    ///
    /// # Errors
    ///
    /// - [`Error::IllegalMove`] if the cell is occupied
    /// - [`Error::OutOfTurn`] if `player` made the previous move
    /// - [`Error::GameOver`] if the game is already terminal
    pub fn play_move(&mut self, player: Player, mv: Move) -> Result<()> {
        if !self.board.get(mv).is_empty() {
            debug!(%player, cell = %mv, "rejected move on occupied cell");
            return Err(Error::IllegalMove {
                row: mv.row(),
                col: mv.col(),
            });
        }

        self.check_may_move(player)?;

        self.board.set(mv, player.mark());
        self.last_mover = Some(player);
        debug!(%player, cell = %mv, "move accepted");

        if let Some(outcome) = self.outcome() {
            debug!(%outcome, "game reached terminal state");
        }

        Ok(())
    }

    /// Place X's mark at `(row, col)`.
    pub fn play_x(&mut self, row: usize, col: usize) -> Result<()> {
        self.play_move(Player::X, Move::new(row, col)?)
    }

    /// Place O's mark at `(row, col)`.
    pub fn play_o(&mut self, row: usize, col: usize) -> Result<()> {
        self.play_move(Player::O, Move::new(row, col)?)
    }

    /// Play a uniformly random legal move for `player` and return it.
    ///
    /// Turn and terminal checks run before the RNG is drawn, so a rejected
    /// call leaves the random stream untouched. The move then goes through
    /// [`play_move`](Self::play_move).
    ///
    /// # Errors
    ///
    /// [`Error::NoLegalMoves`] if the board is full, otherwise any error
    /// from `play_move`.
    pub fn random_legal_move(&mut self, player: Player) -> Result<Move> {
        let moves = self.legal_moves();
        if moves.is_empty() {
            return Err(Error::NoLegalMoves);
        }

        // The RNG only advances for a move that will be accepted.
        self.check_may_move(player)?;

        let mv = *self.rng.choose(&moves).ok_or(Error::NoLegalMoves)?;
        self.play_move(player, mv)?;
        Ok(mv)
    }

    /// Turn and terminal checks shared by every move path.
    fn check_may_move(&self, player: Player) -> Result<()> {
        if self.last_mover == Some(player) {
            debug!(%player, "rejected out-of-turn move");
            return Err(Error::OutOfTurn { player });
        }

        if let Some(outcome) = self.outcome() {
            debug!(%player, %outcome, "rejected move after game end");
            return Err(Error::GameOver);
        }

        Ok(())
    }

    /// Play a random legal move for X.
    pub fn random_play_x(&mut self) -> Result<Move> {
        self.random_legal_move(Player::X)
    }

    /// Play a random legal move for O.
    pub fn random_play_o(&mut self) -> Result<Move> {
        self.random_legal_move(Player::O)
    }

    /// All empty cells in row-major order.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.board.empty_cells()
    }

    /// Get the winner, X checked before O.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.board.winner()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player who made the most recent move.
    #[must_use]
    pub fn last_mover(&self) -> Option<Player> {
        self.last_mover
    }

    /// Get the outcome if the game is over.
    ///
    /// The winner is checked before fullness: a full board with a
    /// completed line is a win, not a draw.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if let Some(winner) = self.winner() {
            Some(Outcome::Winner(winner))
        } else if self.is_full() {
            Some(Outcome::Draw)
        } else {
            None
        }
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.outcome() {
            Some(outcome) => GameStatus::Terminal(outcome),
            None if self.last_mover.is_none() => GameStatus::Empty,
            None => GameStatus::InProgress,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    /// Reinitialize to the empty state in place.
    ///
    /// The RNG keeps its position, so successive games draw fresh moves.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.last_mover = None;
    }

    /// Checkpoint the RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::with_rng(GameRng::default())
    }
}
