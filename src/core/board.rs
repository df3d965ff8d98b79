//! The 3x3 board and moves on it.
//!
//! Cells are stored row-major, so the cell index of `(row, col)` is
//! `row * 3 + col`. The same index drives the one-hot move encoding.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::player::{Cell, Player};
use crate::error::{Error, Result};

/// Number of rows (and columns).
pub const BOARD_SIDE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// The eight winning lines as cell indices.
///
/// Rows come first, then columns, then the main diagonal and the
/// anti-diagonal (the main diagonal of the board rotated by 90 degrees).
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Move list sized for the whole board, never spills to the heap.
pub type MoveList = SmallVec<[Move; CELL_COUNT]>;

/// A cell position on the board.
///
/// Deserialization goes through [`Move::new`], so decoded moves are always
/// in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a [`Move`].
#[derive(Deserialize)]
struct RawMove {
    row: usize,
    col: usize,
}

impl TryFrom<RawMove> for Move {
    type Error = Error;

    fn try_from(raw: RawMove) -> Result<Self> {
        Move::new(raw.row, raw.col)
    }
}

impl Move {
    /// Create a move, checking that both coordinates are in `0..3`.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= BOARD_SIDE || col >= BOARD_SIDE {
            return Err(Error::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Create a move from a cell index (`row * 3 + col`).
    pub fn from_index(index: usize) -> Result<Self> {
        if index >= CELL_COUNT {
            return Err(Error::OutOfBounds {
                row: index / BOARD_SIDE,
                col: index % BOARD_SIDE,
            });
        }
        Ok(Self::from_index_unchecked(index))
    }

    const fn from_index_unchecked(index: usize) -> Self {
        Self {
            row: (index / BOARD_SIDE) as u8,
            col: (index % BOARD_SIDE) as u8,
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Get the cell index (`row * 3 + col`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIDE + self.col()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of cells.
///
/// `Board` is a plain value. Turn order and the set-once rule are
/// enforced by `GameState`, which is the only mutator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from row-major cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get the cell at a move position.
    #[must_use]
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    pub(crate) fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.index()] = cell;
    }

    /// Get all cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Iterate over the three rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_SIDE)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Check whether no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// All empty cells in row-major order.
    #[must_use]
    pub fn empty_cells(&self) -> MoveList {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| Move::from_index_unchecked(i))
            .collect()
    }

    /// Check whether `player` has three in a row on any winning line.
    #[must_use]
    pub fn has_line(&self, player: Player) -> bool {
        let mark = player.mark();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == mark))
    }

    /// Get the winner, if any.
    ///
    /// X is checked before O, so a board with lines for both players
    /// (unreachable in legal play) reports X.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        Player::ALL.into_iter().find(|&p| self.has_line(p))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "_____________")?;
        for row in self.rows() {
            writeln!(
                f,
                "| {} | {} | {} |",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        write!(f, "_____________")
    }
}
