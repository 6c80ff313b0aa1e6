//! Wire shape of the game state handed to display clients.

use crate::games::tictactoe::{GameState, Outcome, Player, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Contents of one board cell as a display client sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Cell {
    /// Marked by X.
    #[serde(rename = "X")]
    X,
    /// Marked by O.
    #[serde(rename = "O")]
    O,
    /// No mark yet.
    #[serde(rename = " ")]
    Blank,
}

impl From<Square> for Cell {
    fn from(square: Square) -> Self {
        match square {
            Square::Empty => Cell::Blank,
            Square::Occupied(Player::X) => Cell::X,
            Square::Occupied(Player::O) => Cell::O,
        }
    }
}

/// Result of a finished game.
///
/// Absent (`null`) while the game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Winner {
    /// X completed a line.
    #[serde(rename = "X")]
    X,
    /// O completed a line.
    #[serde(rename = "O")]
    O,
    /// Board filled with no completed line.
    #[serde(rename = "D")]
    Draw,
}

impl Winner {
    /// Maps an outcome to the winner field; `None` while in progress.
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::InProgress => None,
            Outcome::Win(Player::X) => Some(Winner::X),
            Outcome::Win(Player::O) => Some(Winner::O),
            Outcome::Draw => Some(Winner::Draw),
        }
    }
}

/// Snapshot of the game returned by every command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameSnapshot {
    /// The 9 cells in row-major order (0 = top-left, 8 = bottom-right).
    pub board: [Cell; 9],
    /// Player to move; once the game is over, the player who moved last.
    pub current_player: Player,
    /// True once the game has been won or drawn.
    pub game_over: bool,
    /// Winner, draw marker, or null while the game is running.
    pub winner: Option<Winner>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        Self {
            board: state.board().squares().map(Cell::from),
            current_player: state.current_player(),
            game_over: state.is_over(),
            winner: Winner::from_outcome(state.outcome()),
        }
    }
}

impl From<GameState> for GameSnapshot {
    fn from(state: GameState) -> Self {
        Self::from(&state)
    }
}
