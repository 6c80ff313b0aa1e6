//! Turn agreement invariant: the current player matches the marks on the board.

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the current player is derivable from the mark counts.
///
/// While the game is running, X is to move exactly when both players have
/// the same number of marks. Once terminal, the current player is frozen at
/// whoever made the final move.
pub struct TurnAgreementInvariant;

impl Invariant<GameState> for TurnAgreementInvariant {
    fn holds(state: &GameState) -> bool {
        let balanced = state.board().count(Player::X) == state.board().count(Player::O);
        let expected = match (state.is_over(), balanced) {
            (false, true) | (true, false) => Player::X,
            (false, false) | (true, true) => Player::O,
        };
        state.current_player() == expected
    }

    fn description() -> &'static str {
        "Current player agrees with the marks on the board"
    }
}
