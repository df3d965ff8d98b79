//! Play records: the trained player's moves with pre-move board snapshots.

use serde::{Deserialize, Serialize};

use crate::core::{Board, GameState, Move, Player};
use crate::error::Result;

/// A single recorded play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// The move that was made.
    pub mv: Move,
    /// The board as it was before the move.
    pub board_before: Board,
}

/// Chronological plays of one player over a single game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRecord {
    player: Player,
    plays: Vec<Play>,
}

impl PlayRecord {
    /// Create an empty record for `player`.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self {
            player,
            plays: Vec::new(),
        }
    }

    /// Append a play.
    pub fn push(&mut self, mv: Move, board_before: Board) {
        self.plays.push(Play { mv, board_before });
    }

    /// Snapshot the board, play `mv` for the recorded player and keep the play.
    ///
    /// Nothing is recorded if the move is rejected.
    pub fn play(&mut self, game: &mut GameState, mv: Move) -> Result<()> {
        let board_before = *game.board();
        game.play_move(self.player, mv)?;
        self.push(mv, board_before);
        Ok(())
    }

    /// Like [`play`](Self::play), with a random legal move.
    pub fn play_random(&mut self, game: &mut GameState) -> Result<Move> {
        let board_before = *game.board();
        let mv = game.random_legal_move(self.player)?;
        self.push(mv, board_before);
        Ok(mv)
    }

    /// The player whose plays are recorded.
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn iter(&self) -> impl Iterator<Item = &Play> {
        self.plays.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.plays.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn clear(&mut self) {
        self.plays.clear();
    }
}

impl Default for PlayRecord {
    fn default() -> Self {
        Self::new(Player::X)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn test_play_records_snapshot_before_move() {
        let mut game = GameState::with_seed(1);
        let mut record = PlayRecord::new(Player::X);

        record.play(&mut game, Move::new(1, 1).unwrap()).unwrap();
        game.play_o(0, 0).unwrap();
        record.play(&mut game, Move::new(2, 2).unwrap()).unwrap();

        assert_eq!(record.len(), 2);
        assert_eq!(record.plays()[0].board_before, Board::new());
        assert_eq!(record.plays()[1].board_before.occupied_count(), 2);
        let second = record.plays()[1];
        assert_eq!(second.board_before.get(second.mv), Cell::Empty);
    }

    #[test]
    fn test_rejected_move_not_recorded() {
        let mut game = GameState::with_seed(1);
        let mut record = PlayRecord::new(Player::X);

        record.play(&mut game, Move::new(0, 0).unwrap()).unwrap();
        assert!(record.play(&mut game, Move::new(0, 1).unwrap()).is_err());
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn test_play_random() {
        let mut game = GameState::with_seed(4);
        let mut record = PlayRecord::new(Player::O);

        let mv = record.play_random(&mut game).unwrap();
        assert_eq!(record.plays()[0].mv, mv);
        assert!(record.plays()[0].board_before.cells().iter().all(|c| c.is_empty()));
        assert_eq!(game.board().get(mv), Cell::O);
    }
}
