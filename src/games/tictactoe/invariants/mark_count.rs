//! Mark-count invariant: X is never behind O and never more than one ahead.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkCountInvariant;

impl Invariant<GameState> for MarkCountInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has the same number of marks as O, or exactly one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Outcome, Position, Square};

    fn state_with(marks: &[(Position, Player)]) -> GameState {
        let mut board = Board::new();
        for (pos, player) in marks {
            board.set(*pos, Square::Occupied(*player));
        }
        GameState::from_parts(board, Player::X, Outcome::InProgress)
    }

    #[test]
    fn test_balanced_and_one_ahead_hold() {
        assert!(MarkCountInvariant::holds(&state_with(&[])));
        assert!(MarkCountInvariant::holds(&state_with(&[(
            Position::Center,
            Player::X
        )])));
        assert!(MarkCountInvariant::holds(&state_with(&[
            (Position::Center, Player::X),
            (Position::TopLeft, Player::O),
        ])));
    }

    #[test]
    fn test_o_ahead_violates() {
        assert!(!MarkCountInvariant::holds(&state_with(&[(
            Position::Center,
            Player::O
        )])));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        assert!(!MarkCountInvariant::holds(&state_with(&[
            (Position::Center, Player::X),
            (Position::TopLeft, Player::X),
        ])));
    }
}
