//! Game outcomes and lifecycle status.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(Player),
    /// Full board with no completed line.
    Draw,
}

impl Outcome {
    /// Build an outcome from an optional winner, `None` meaning a draw.
    #[must_use]
    pub fn from_winner(winner: Option<Player>) -> Self {
        winner.map_or(Outcome::Draw, Outcome::Winner)
    }

    /// Get the winner, if any.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Winner(p) => Some(p),
            Outcome::Draw => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self == Outcome::Winner(player)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(p) => write!(f, "{} wins", p),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}

/// Lifecycle status of a game.
///
/// `Empty -> InProgress -> Terminal`; Terminal is absorbing until reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No move played yet.
    Empty,
    /// At least one move played, game not over.
    InProgress,
    /// Game over.
    Terminal(Outcome),
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Terminal(_))
    }

    /// Get the outcome if the game is over.
    #[must_use]
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            GameStatus::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }
}
