//! Players and cell contents.
//!
//! ## Player
//!
//! The two players, `X` (conventionally the trained player) and `O`.
//!
//! ## Cell
//!
//! The content of one board cell. `Cell` is the single source of truth for
//! both the display symbol and (via `CellEncoding`) the numeric feature value.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player "x".
    X,
    /// Player "o".
    O,
}

impl Player {
    /// Both players, X first.
    pub const ALL: [Player; 2] = [Player::X, Player::O];

    /// Get the other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Get the mark this player places on the board.
    #[must_use]
    pub const fn mark(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Get the display symbol ("x" or "o").
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Player::X => "x",
            Player::O => "o",
        }
    }

    /// Parse a player from its symbol.
    ///
    /// ```
    /// use ttt_rewards::core::Player;
    ///
    /// assert_eq!(Player::from_symbol("x"), Some(Player::X));
    /// assert_eq!(Player::from_symbol("O"), Some(Player::O));
    /// assert_eq!(Player::from_symbol("z"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "x" | "X" => Some(Player::X),
            "o" | "O" => Some(Player::O),
            _ => None,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Content of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by player X.
    X,
    /// Marked by player O.
    O,
}

impl Cell {
    /// Check whether the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the player owning this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    /// Get the display symbol. Empty cells render as a blank.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::X => "x",
            Cell::O => "o",
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.mark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_marks_and_symbols() {
        assert_eq!(Player::X.mark(), Cell::X);
        assert_eq!(Cell::from(Player::O), Cell::O);
        assert_eq!(Cell::Empty.symbol(), " ");
        assert_eq!(Cell::X.symbol(), "x");
        assert_eq!(format!("{}", Player::O), "o");
    }

    #[test]
    fn test_cell_player() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::X.player(), Some(Player::X));
        assert_eq!(Cell::O.player(), Some(Player::O));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::X).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::X);
    }
}
