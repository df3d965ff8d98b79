//! Numeric encoding of boards and moves for model input.
//!
//! A feature row is the pre-move board flattened row-major (9 values)
//! followed by a one-hot move vector (9 values). The one-hot vector uses
//! the mover's mark value at the move's cell index and the empty value
//! everywhere else, matching the board encoding's empty marker.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Move, Player, CELL_COUNT};
use crate::error::{Error, Result};

/// Width of one feature row: board cells plus one-hot move.
pub const FEATURE_WIDTH: usize = 2 * CELL_COUNT;

/// Mapping table from cell content to its numeric feature value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellEncoding {
    /// Value of an empty cell (default: -1).
    pub empty: f32,
    /// Value of an X mark (default: 0).
    pub x: f32,
    /// Value of an O mark (default: 1).
    pub o: f32,
}

impl Default for CellEncoding {
    fn default() -> Self {
        Self {
            empty: -1.0,
            x: 0.0,
            o: 1.0,
        }
    }
}

impl CellEncoding {
    /// Get the numeric value of a cell.
    #[must_use]
    pub fn value(&self, cell: Cell) -> f32 {
        match cell {
            Cell::Empty => self.empty,
            Cell::X => self.x,
            Cell::O => self.o,
        }
    }

    /// Decode a numeric value back into a cell.
    #[must_use]
    pub fn decode(&self, value: f32) -> Option<Cell> {
        [Cell::Empty, Cell::X, Cell::O]
            .into_iter()
            .find(|&c| self.value(c) == value)
    }

    /// Check that all three values are finite and distinct.
    pub fn validate(&self) -> Result<()> {
        let values = [self.empty, self.x, self.o];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::InvalidConfiguration {
                message: format!("cell encoding values must be finite, got {:?}", values),
            });
        }
        if self.empty == self.x || self.empty == self.o || self.x == self.o {
            return Err(Error::InvalidConfiguration {
                message: format!("cell encoding values must be distinct, got {:?}", values),
            });
        }
        Ok(())
    }
}

/// Encodes boards and moves into feature vectors.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoardEncoder {
    encoding: CellEncoding,
}

impl BoardEncoder {
    #[must_use]
    pub fn new(encoding: CellEncoding) -> Self {
        Self { encoding }
    }

    #[must_use]
    pub fn encoding(&self) -> &CellEncoding {
        &self.encoding
    }

    /// Flatten a board row-major into numeric values.
    #[must_use]
    pub fn encode_board(&self, board: &Board) -> [f32; CELL_COUNT] {
        let cells = *board.cells();
        cells.map(|c| self.encoding.value(c))
    }

    /// One-hot encode a move made by `player`.
    #[must_use]
    pub fn encode_move(&self, mv: Move, player: Player) -> [f32; CELL_COUNT] {
        let mut one_hot = [self.encoding.empty; CELL_COUNT];
        one_hot[mv.index()] = self.encoding.value(player.mark());
        one_hot
    }

    /// Build the full feature row for one play.
    #[must_use]
    pub fn encode_play(
        &self,
        board_before: &Board,
        mv: Move,
        player: Player,
    ) -> [f32; FEATURE_WIDTH] {
        let mut row = [0.0; FEATURE_WIDTH];
        row[..CELL_COUNT].copy_from_slice(&self.encode_board(board_before));
        row[CELL_COUNT..].copy_from_slice(&self.encode_move(mv, player));
        row
    }

    /// Rebuild a board from its encoded cells.
    ///
    /// Returns `None` if any value is not in the encoding table.
    #[must_use]
    pub fn decode_board(&self, values: &[f32]) -> Option<Board> {
        if values.len() != CELL_COUNT {
            return None;
        }
        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, &v) in cells.iter_mut().zip(values) {
            *cell = self.encoding.decode(v)?;
        }
        Some(Board::from_cells(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_encoding() {
        let enc = CellEncoding::default();
        assert_eq!(enc.value(Cell::Empty), -1.0);
        assert_eq!(enc.value(Cell::X), 0.0);
        assert_eq!(enc.value(Cell::O), 1.0);
        assert!(enc.validate().is_ok());
    }

    #[test]
    fn test_encoding_must_be_distinct() {
        let enc = CellEncoding {
            empty: 0.0,
            x: 0.0,
            o: 1.0,
        };
        assert!(matches!(
            enc.validate(),
            Err(Error::InvalidConfiguration { .. })
        ));

        let enc = CellEncoding {
            empty: f32::NAN,
            x: 0.0,
            o: 1.0,
        };
        assert!(enc.validate().is_err());
    }

    #[test]
    fn test_encode_move_one_hot() {
        let encoder = BoardEncoder::default();
        let one_hot = encoder.encode_move(Move::new(1, 2).unwrap(), Player::X);

        assert_eq!(one_hot[5], 0.0);
        assert_eq!(one_hot.iter().filter(|&&v| v == -1.0).count(), 8);
    }

    #[test]
    fn test_encode_play_layout() {
        let encoder = BoardEncoder::default();
        let board = Board::from_cells([
            Cell::X,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::O,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);
        let row = encoder.encode_play(&board, Move::new(2, 2).unwrap(), Player::X);

        assert_eq!(
            &row[..9],
            &[0.0, -1.0, -1.0, -1.0, 1.0, -1.0, -1.0, -1.0, -1.0]
        );
        assert_eq!(
            &row[9..],
            &[-1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, 0.0]
        );
    }

    #[test]
    fn test_decode_board() {
        let encoder = BoardEncoder::default();
        let board = Board::from_cells([Cell::O; CELL_COUNT]);
        let values = encoder.encode_board(&board);
        assert_eq!(encoder.decode_board(&values), Some(board));
        assert_eq!(encoder.decode_board(&[0.5; CELL_COUNT]), None);
        assert_eq!(encoder.decode_board(&[0.0; 3]), None);
    }
}
